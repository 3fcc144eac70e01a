use crate::error::{PageErrorKind, PageResult, WithPageId};
use crate::page_id::PageId;
use crate::page_type::PageVariant;

/// The live contents of a page, keyed by its variant.
#[derive(Debug)]
pub(crate) enum PageBody {
    /// Ordered list of record payloads. `None` marks a tombstoned slot that
    /// still occupies its ordinal position. `tombstones` is the LIFO stack
    /// of reusable slot indices, most recently freed on top.
    Leaf {
        slots: Vec<Option<Vec<u8>>>,
        tombstones: Vec<usize>,
    },
    /// Ordered list of `(key, child_page_id)` entries.
    Internal { entries: Vec<(Vec<u8>, u32)> },
}

/// In-memory representation of one on-disk page.
#[derive(Debug)]
pub struct Page {
    pub(crate) page_id: PageId,
    pub(crate) max_size: usize,
    pub(crate) dirty: bool,
    /// Running estimate of bytes consumed by live content, used for the
    /// capacity checks described on [`Page::has_space`]. Tombstoned slots do
    /// not contribute to this total once deleted.
    pub(crate) current_size: usize,
    pub(crate) body: PageBody,
}

impl Page {
    /// The page's identifier.
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    /// The maximum serialized size of this page, in bytes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// `true` if the page has been mutated since it was last marked clean.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag. Called by the pager after a successful flush.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// The running byte-accounting total described in [`Page::has_space`].
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// This page's variant.
    pub fn variant(&self) -> PageVariant {
        match &self.body {
            PageBody::Leaf { .. } => PageVariant::Leaf,
            PageBody::Internal { .. } => PageVariant::Internal,
        }
    }

    /// Returns `true` iff `payload` could be inserted without exceeding
    /// `max_size`. Leaf pages only; internal pages answer `false`.
    pub fn has_space(&self, payload: &[u8]) -> bool {
        match &self.body {
            PageBody::Leaf { .. } => self.current_size + payload.len() + 4 <= self.max_size,
            PageBody::Internal { .. } => false,
        }
    }

    /// Inserts `payload` into a leaf page, reusing the most recently
    /// tombstoned slot if one exists, and returns the row id it occupies.
    pub fn insert(&mut self, payload: Vec<u8>) -> PageResult<i64> {
        self.insert_internal(payload).with_page_id(self.page_id)
    }

    /// Retrieves the payload stored at `row_id` on a leaf page.
    pub fn get(&self, row_id: i64) -> PageResult<&[u8]> {
        self.get_internal(row_id).with_page_id(self.page_id)
    }

    /// Tombstones the slot at `row_id` on a leaf page, freeing it for reuse.
    pub fn delete(&mut self, row_id: i64) -> PageResult<()> {
        self.delete_internal(row_id).with_page_id(self.page_id)
    }

    /// Appends a `(key, child_page_id)` entry to an internal page and
    /// returns the entry index it occupies.
    pub fn add_entry(&mut self, key: Vec<u8>, child_page_id: u32) -> PageResult<i64> {
        self.add_entry_internal(key, child_page_id)
            .with_page_id(self.page_id)
    }

    /// Retrieves the `(key, child_page_id)` entry at `index` on an internal page.
    pub fn get_entry(&self, index: i64) -> PageResult<(&[u8], u32)> {
        self.get_entry_internal(index).with_page_id(self.page_id)
    }

    pub(super) fn capacity_error(&self, needed: usize) -> PageErrorKind {
        PageErrorKind::Capacity {
            needed,
            available: self.max_size.saturating_sub(self.current_size),
        }
    }
}
