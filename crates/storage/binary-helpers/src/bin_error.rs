use std::array::TryFromSliceError;
use thiserror::Error;

/// Errors raised while reading or writing fixed-width integers through a byte slice.
#[derive(Debug, Error)]
pub enum BinaryError {
    /// The requested range does not fit inside the provided slice.
    #[error(
        "attempt to access {expected} bytes at offset {from_offset}, but the slice does not contain that range"
    )]
    SliceRangeOutOfBounds { expected: usize, from_offset: usize },
    /// A fixed-size array conversion failed after an explicit length check.
    #[error("error converting a slice to a fixed-size array")]
    SliceConversionError(#[from] TryFromSliceError),
}
