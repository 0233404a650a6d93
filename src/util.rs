//! Utility functions used in all other montageformats modules.

use flate2::bufread::GzDecoder;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use crate::error::{MontageformatsError, Result};

/// Check whether the file extension ends with ".gz".
pub fn is_gz_file<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false)
}


/// Fail with [`MontageformatsError::MissingFile`] if nothing exists at the given path.
pub fn require_file<P>(path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(MontageformatsError::MissingFile(path.to_path_buf()))
    }
}


/// Open a file for reading. If the file's name ends with ".gz", the returned reader decompresses it on the fly.
pub fn open_input<P>(path: P) -> Result<Box<dyn Read>>
where
    P: AsRef<Path>,
{
    let gz = is_gz_file(&path);
    let file = BufReader::new(File::open(path)?);
    if gz {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}


/// Make a path absolute (relative to the current directory) and collapse `.` and `..` components.
///
/// This is purely lexical: the file system is not consulted and the path does not need to exist.
/// A `..` at the root is dropped.
pub fn normalize_path<P>(path: P) -> PathBuf
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
