use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Overwrites `path` with the graph document. The contents go to a sibling
/// temp file first and are renamed into place, so the destination is either
/// fully replaced or left untouched.
pub fn write_graph(path: &Path, contents: &str) -> Result<()> {
    let mut tmp_os = path.as_os_str().to_os_string();
    tmp_os.push(".tmp");
    let tmp = PathBuf::from(tmp_os);

    std::fs::write(&tmp, contents).map_err(|source| Error::OutputWrite {
        path: tmp.clone(),
        source,
    })?;

    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
