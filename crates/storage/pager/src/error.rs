use file::FileError;
use page::PageError;
use thiserror::Error;

/// Errors raised while mediating access to pages through a [`crate::Pager`].
#[derive(Debug, Error)]
pub enum PagerError {
    /// The backing file could not be read from, written to, or sized.
    #[error("file i/o error")]
    Io(#[from] FileError),
    /// A page failed to encode or decode.
    #[error("page codec error")]
    Page(#[from] PageError),
}
