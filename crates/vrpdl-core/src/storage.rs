//! Local filesystem side of the download: output directories and file writes.

use crate::error::{DirectoryError, WriteError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Creates `path` and any missing parents. An existing directory is success.
pub fn ensure_dir(path: &Path) -> Result<(), DirectoryError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| DirectoryError {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path` in binary, creating or truncating the file.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), WriteError> {
    let err = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(err)?;
    file.write_all(data).map_err(err)?;
    file.flush().map_err(err)?;
    Ok(())
}
