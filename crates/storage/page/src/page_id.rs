//! Page identity.
//!
//! This is a single-file database: a page is identified purely by a dense,
//! non-negative page number. Page `k` occupies byte range
//! `[k * PAGE_SIZE, (k + 1) * PAGE_SIZE)` in the backing file.

/// Identifier of a page within the backing file.
pub type PageId = u32;
