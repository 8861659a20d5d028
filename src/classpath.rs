use memmap2::Mmap;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

/// A fixed origin (directory or jar) from which class resources are listed.
///
/// `prefix` and `path` arguments are slash-separated relative paths; a prefix
/// is either empty or ends with `/`. Listings return bare child names (file
/// name or sub-package name, no separators), sorted lexicographically.
pub trait ClasspathRoot {
    fn list_resources(&self, prefix: &str) -> Result<Vec<String>>;

    fn read_resource(&self, path: &str) -> Result<Vec<u8>>;
}

/// Selects the root variant by the input path's suffix: `.jar` opens the
/// archive variant, anything else is treated as a class directory.
pub fn open_root(input: &Path) -> Result<Box<dyn ClasspathRoot>> {
    if input.extension().is_some_and(|e| e == "jar") {
        Ok(Box::new(JarClasspathRoot::new(input)?))
    } else {
        Ok(Box::new(DirectoryClasspathRoot::new(input)))
    }
}

pub struct DirectoryClasspathRoot {
    origin: PathBuf,
}

impl DirectoryClasspathRoot {
    pub fn new(origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl ClasspathRoot for DirectoryClasspathRoot {
    fn list_resources(&self, prefix: &str) -> Result<Vec<String>> {
        let dir = self.origin.join(prefix);
        let entries = std::fs::read_dir(&dir).map_err(|source| Error::ResourceAccess {
            path: dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ResourceAccess {
                path: dir.clone(),
                source,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn read_resource(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.origin.join(path);
        std::fs::read(&full).map_err(|source| Error::ResourceAccess { path: full, source })
    }
}

#[derive(Debug)]
pub struct JarClasspathRoot {
    origin: PathBuf,
    // Entry names cached from the central directory at construction time.
    entries: Vec<String>,
}

impl JarClasspathRoot {
    pub fn new(origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        let archive = open_archive(&origin)?;
        let entries = archive.file_names().map(str::to_owned).collect();
        Ok(Self { origin, entries })
    }
}

impl ClasspathRoot for JarClasspathRoot {
    fn list_resources(&self, prefix: &str) -> Result<Vec<String>> {
        // One level deep: everything up to the next separator. Synthetic
        // directory entries ("com/example/") collapse into the same child
        // name as the files beneath them.
        let mut names = BTreeSet::new();
        for entry in &self.entries {
            let Some(rest) = entry.strip_prefix(prefix) else {
                continue;
            };
            let child = match rest.split_once('/') {
                Some((dir, _)) => dir,
                None => rest,
            };
            if !child.is_empty() {
                names.insert(child.to_owned());
            }
        }
        Ok(names.into_iter().collect())
    }

    fn read_resource(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = open_archive(&self.origin)?;
        let mut entry = match archive.by_name(path) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::ResourceNotFound {
                    name: path.to_owned(),
                });
            }
            Err(source) => {
                return Err(Error::MalformedArchive {
                    path: self.origin.clone(),
                    source,
                });
            }
        };

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .map_err(|source| Error::ResourceAccess {
                path: self.origin.clone(),
                source,
            })?;
        Ok(buf)
    }
}

fn open_archive(origin: &Path) -> Result<ZipArchive<Cursor<Mmap>>> {
    let file = File::open(origin).map_err(|source| Error::ResourceAccess {
        path: origin.to_path_buf(),
        source,
    })?;
    // SAFETY: The file is opened read-only and the mapping is owned by the
    // returned archive, so it cannot outlive the handle it was created from.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| Error::ResourceAccess {
        path: origin.to_path_buf(),
        source,
    })?;
    ZipArchive::new(Cursor::new(mmap)).map_err(|source| Error::MalformedArchive {
        path: origin.to_path_buf(),
        source,
    })
}
