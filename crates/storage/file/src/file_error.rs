use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a [`crate::FileManager`] implementation.
#[derive(Debug, Error)]
pub enum FileError {
    /// Opening or creating the backing file failed.
    #[error("failed to open backing file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A positioned read failed.
    #[error("failed to read {length} bytes at offset {offset}")]
    Read {
        offset: u64,
        length: usize,
        #[source]
        source: std::io::Error,
    },
    /// A positioned write failed.
    #[error("failed to write {length} bytes at offset {offset}")]
    Write {
        offset: u64,
        length: usize,
        #[source]
        source: std::io::Error,
    },
    /// Querying the file size failed.
    #[error("failed to query file size")]
    Size(#[source] std::io::Error),
}
