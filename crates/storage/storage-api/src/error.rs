use pager::PagerError;
use record_codec::CodecError;
use thiserror::Error;

/// Errors raised while storing or retrieving a record through a [`crate::StorageManager`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("pager error")]
    Pager(#[from] PagerError),
    #[error("record codec error")]
    Codec(#[from] CodecError),
}
