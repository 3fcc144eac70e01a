//! Shared binary encoding helpers used by the `page` and `record-codec` crates.
//!
//! All multi-byte integers and floats in this workspace's on-disk formats
//! are big-endian; see [`be`] for the shared codec.

pub mod be;
pub mod bin_error;
