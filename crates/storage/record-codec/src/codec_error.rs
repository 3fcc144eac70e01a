use binary_helpers::bin_error::BinaryError;
use thiserror::Error;

/// Errors raised while serializing or deserializing a record.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An integer value does not fit in the 32-bit signed field this codec emits.
    #[error("integer {0} does not fit in a 32-bit signed field")]
    IntegerOverflow(i64),
    /// A serial type byte decoded from a record did not match any known code.
    #[error("unrecognized serial type {0}")]
    UnknownSerialType(u64),
    /// `header_size` would not fit in the single-byte varint this codec assumes.
    #[error("record has too many columns for a single-byte header_size (max ~126)")]
    TooManyColumns,
    /// The number of decoded fields did not match the supplied column list.
    #[error("decoded {actual} fields but {expected} column names were supplied")]
    ColumnCountMismatch { expected: usize, actual: usize },
    /// The record bytes were truncated or otherwise malformed.
    #[error("malformed record: {0}")]
    Malformed(&'static str),
    /// A fixed-width integer or float failed to decode.
    #[error("binary decoding error")]
    Binary(#[from] BinaryError),
}
