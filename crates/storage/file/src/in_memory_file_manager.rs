//! An in-memory [`FileManager`], useful for tests that exercise the pager
//! and page crates without touching disk.

use crate::api::FileManager;
use crate::file_error::FileError;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// A `FileManager` backed by a growable in-memory byte buffer instead of a
/// real file. `open` never fails and the "path" is retained only for
/// diagnostics.
#[derive(Debug)]
pub struct InMemoryFileManager {
    path: PathBuf,
    bytes: RwLock<Vec<u8>>,
}

impl FileManager for InMemoryFileManager {
    fn open(path: impl AsRef<Path>) -> Result<Self, FileError> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            bytes: RwLock::new(Vec::new()),
        })
    }

    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError> {
        let bytes = self.bytes.read().expect("InMemoryFileManager poisoned");
        let offset = offset as usize;
        if offset >= bytes.len() {
            return Ok(Vec::new());
        }
        let end = (offset + length).min(bytes.len());
        Ok(bytes[offset..end].to_vec())
    }

    fn write(&self, offset: u64, data: &[u8]) -> Result<(), FileError> {
        let mut bytes = self.bytes.write().expect("InMemoryFileManager poisoned");
        let offset = offset as usize;
        let end = offset + data.len();
        if bytes.len() < end {
            bytes.resize(end, 0);
        }
        bytes[offset..end].copy_from_slice(data);
        Ok(())
    }

    fn append(&self, data: &[u8]) -> Result<(), FileError> {
        let offset = self.size()?;
        self.write(offset, data)
    }

    fn size(&self) -> Result<u64, FileError> {
        Ok(self.bytes.read().expect("InMemoryFileManager poisoned").len() as u64)
    }

    fn close(self) {
        tracing::debug!(path = ?self.path, "closing in-memory file manager");
    }
}
