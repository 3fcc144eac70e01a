//! # pagestore
//!
//! A single-file embedded storage engine: paged file I/O, an in-memory page
//! cache, and a self-describing record codec, composed under
//! `storage_api::StorageManager`.
//!
//! The engine is split across the crates under `/crates/storage`:
//!
//! - `file`: offset-indexed reads and writes against a single backing file.
//! - `page`: the in-memory twin of one on-disk 4096-byte slot, leaf or internal.
//! - `pager`: a `{page_id -> Page}` cache with dirty tracking and allocation.
//! - `record-codec`: encodes a column-keyed tuple of values into a
//!   self-describing byte string, and back.
//! - `storage-api`: ties the above together behind a single façade.

pub use file::{DiskFileManager, FileError, FileManager, InMemoryFileManager};
pub use page::{Page, PageError, PageId, PageVariant, PAGE_SIZE};
pub use pager::{Pager, PagerConfig, PagerError};
pub use record_codec::{deserialize, serialize, CodecError, Value};
pub use storage_api::{RowLocation, StorageError, StorageManager};
