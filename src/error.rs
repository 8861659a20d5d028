use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the discovery pipeline. Argument errors are not
/// represented here; they surface as `clap::Error` before any work starts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {}: {}", .path.display(), .source)]
    ResourceAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed archive {}: {}", .path.display(), .source)]
    MalformedArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("resource not found: {name}")]
    ResourceNotFound { name: String },

    #[error("cannot write {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
