//! Encodes a column-keyed tuple of typed values into a self-describing
//! byte string — `varint(header_size) || serial_type_varints || body_bytes`
//! — and decodes it back given a column name list.

mod codec_error;
mod record;
mod value;

/// Base-128 varint encoding used for `header_size` and serial type tags.
pub mod varint;

pub use codec_error::CodecError;
pub use record::{deserialize, serialize};
pub use value::Value;
