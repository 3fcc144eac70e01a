//! Public API for the `file` crate.

use crate::file_error::FileError;
use std::path::Path;

/// A `FileManager` performs all byte-level I/O against a single backing
/// file, addressed purely by byte offset. It has no notion of pages, page
/// sizes, or records — those live in the `page` and `pager` crates.
pub trait FileManager: Sized {
    /// Opens the backing resource at `path`, creating it empty if it does
    /// not already exist, or opening it for read+write without truncating
    /// it otherwise.
    fn open(path: impl AsRef<Path>) -> Result<Self, FileError>;

    /// Reads up to `length` bytes starting at `offset`. Reaching end of
    /// file is not an error: the returned `Vec` may be shorter than
    /// `length`, including empty, if `offset` is at or past the current
    /// file size.
    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError>;

    /// Writes `bytes` at `offset`, extending the file if necessary, then
    /// flushes so the write is visible to subsequent reads.
    fn write(&self, offset: u64, bytes: &[u8]) -> Result<(), FileError>;

    /// Writes `bytes` at the current end of the file, then flushes.
    fn append(&self, bytes: &[u8]) -> Result<(), FileError>;

    /// Returns the current length of the file, in bytes.
    fn size(&self) -> Result<u64, FileError>;

    /// Releases the file. Consumes `self`: there is no use of a
    /// `FileManager` after `close`.
    fn close(self);
}
