use crate::page_id::PageId;
use crate::page_type::PageVariant;
use binary_helpers::bin_error::BinaryError;
use thiserror::Error;

/// The kind of failure that occurred on a page operation, without the
/// owning page's id attached. See [`PageError`] for the public error type.
#[derive(Debug, Error)]
pub enum PageErrorKind {
    /// Inserting `needed` more bytes would exceed the page's `max_size`.
    #[error("not enough space: {available} free bytes, needed {needed}")]
    Capacity { needed: usize, available: usize },
    /// A row or entry id was out of range, negative, or tombstoned.
    #[error("invalid or tombstoned row id {row_id}")]
    Index { row_id: i64 },
    /// The requested operation does not apply to this page's variant.
    #[error("operation `{operation}` is not supported on a {variant:?} page")]
    Unsupported {
        operation: &'static str,
        variant: PageVariant,
    },
    /// The raw variant byte at the start of a page did not match a known [`PageVariant`].
    #[error("unrecognized page variant byte {0}")]
    UnknownVariant(u8),
    /// Decoding a fixed-width integer out of the page buffer failed.
    #[error("binary decoding error")]
    Binary(#[from] BinaryError),
}

/// Public-facing error type for page operations, carrying the id of the
/// page on which the failure occurred.
#[derive(Debug, Error)]
#[error("error on page {page_id}: {kind}")]
pub struct PageError {
    pub page_id: PageId,
    #[source]
    pub kind: PageErrorKind,
}

/// Result type returned by page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Attaches a page id to a [`PageErrorKind`], producing the public [`PageError`].
pub(crate) trait WithPageId<T> {
    fn with_page_id(self, page_id: PageId) -> PageResult<T>;
}

impl<T> WithPageId<T> for Result<T, PageErrorKind> {
    fn with_page_id(self, page_id: PageId) -> PageResult<T> {
        self.map_err(|kind| PageError { page_id, kind })
    }
}
