//! File-backed storage with atomic replacement.

use std::fs;
use std::io;
use std::path::PathBuf;

use reckon_core::{Storage, StorageError};

/// Whole-file blob storage.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// kill during a write leaves either the previous snapshot or the new one,
/// never a half-written blob.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl FileStorage {
    /// Store the blob at `path`.
    pub fn new(path: PathBuf) -> Self {
        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);
        Self { path, tmp_path }
    }
}

impl Storage for FileStorage {
    fn read(&mut self) -> Result<Vec<u8>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        fs::write(&self.tmp_path, bytes)?;
        fs::rename(&self.tmp_path, &self.path)?;
        Ok(())
    }
}
