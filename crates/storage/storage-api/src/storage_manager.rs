//! Ties a [`pager::Pager`] to the record codec: encode a record, find or
//! allocate a leaf page with room, store it, and read it back.
use crate::error::StorageError;
use file::FileManager;
use indexmap::IndexMap;
use page::PageVariant;
use pager::{Pager, PagerConfig};
use record_codec::Value;
use record_codec::{deserialize, serialize};

/// Identifies a stored record: the leaf page it lives on and its row id
/// within that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLocation {
    pub page_id: page::PageId,
    pub row_id: i64,
}

/// Ties a [`Pager`] to the record codec: encodes a record, finds a leaf page
/// with room for it, and stores it — and decodes one back given its
/// [`RowLocation`] and column names.
#[derive(Debug)]
pub struct StorageManager<F: FileManager> {
    pager: Pager<F>,
}

impl<F: FileManager> StorageManager<F> {
    /// Opens a storage manager over `file_manager`.
    pub fn new(file_manager: F, config: PagerConfig) -> Result<Self, StorageError> {
        Ok(Self {
            pager: Pager::new(file_manager, config)?,
        })
    }

    /// Encodes `fields` and stores the result on a leaf page with enough
    /// free space, allocating a new one if none of the existing pages fit it.
    pub fn insert_record(
        &mut self,
        fields: &[(String, Value)],
    ) -> Result<RowLocation, StorageError> {
        let payload = serialize(fields)?;
        let page_id = self.find_or_allocate_leaf_with_space(&payload)?;

        let page = self.pager.get_mut(page_id)?;
        let row_id = page.insert(payload)?;
        self.pager.mark_dirty(page_id);

        Ok(RowLocation { page_id, row_id })
    }

    /// Reads back the record at `location`, decoding it against `columns`.
    pub fn read_record(
        &mut self,
        location: RowLocation,
        columns: &[String],
    ) -> Result<IndexMap<String, Value>, StorageError> {
        let page = self.pager.get(location.page_id)?;
        let bytes = page.get(location.row_id)?;
        Ok(deserialize(bytes, columns)?)
    }

    /// Removes the record at `location`, leaving a tombstone behind.
    pub fn delete_record(&mut self, location: RowLocation) -> Result<(), StorageError> {
        let page = self.pager.get_mut(location.page_id)?;
        page.delete(location.row_id)?;
        self.pager.mark_dirty(location.page_id);
        Ok(())
    }

    /// Flushes every dirty page.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.pager.flush_all()?;
        Ok(())
    }

    /// Flushes every dirty page and releases the backing file.
    pub fn close(self) -> Result<(), StorageError> {
        self.pager.close()?;
        Ok(())
    }

    fn find_or_allocate_leaf_with_space(
        &mut self,
        payload: &[u8],
    ) -> Result<page::PageId, StorageError> {
        for page_id in 0..self.pager.page_count() {
            let page = self.pager.get(page_id)?;
            if page.variant() == PageVariant::Leaf && page.has_space(payload) {
                return Ok(page_id);
            }
        }

        let page = self.pager.allocate(PageVariant::Leaf)?;
        Ok(page.page_id())
    }
}
