//! `Page`, the in-memory twin of a single on-disk 4096-byte slot.
//!
//! A page is either a *leaf*, holding an ordered list of opaque record
//! payloads addressed by row id, or *internal*, holding an ordered list of
//! `(key, child_page_id)` entries for future tree navigation. Both variants
//! share one struct; the active variant lives in the `body` field.

mod ctors;
mod delete;
mod insert;
mod internal;
mod read_row;
mod serde;

/// Public API for the `Page` struct.
pub mod api;
