//! The `Pager` itself: a `{page_id -> Page}` cache plus a dirty set, layered
//! over a `FileManager`.

use crate::config::PagerConfig;
use crate::error::PagerError;
use file::FileManager;
use page::{Page, PageId, PageVariant};
use std::collections::{HashMap, HashSet};

/// Maps page identifiers to live pages, tracks dirtiness, allocates new
/// pages, and flushes dirty pages back to the backing file.
///
/// This is a single-caller cache: there is no latching, no pinning, and no
/// background writer. A host that wants to share a `Pager` across threads
/// must wrap it in its own mutex — see the module-level documentation.
#[derive(Debug)]
pub struct Pager<F: FileManager> {
    file_manager: F,
    config: PagerConfig,
    cache: HashMap<PageId, Page>,
    dirty: HashSet<PageId>,
    page_count: u32,
}

impl<F: FileManager> Pager<F> {
    /// Opens a pager over `file_manager`. The initial page count is derived
    /// from the file's current size, rounded down to whole pages.
    pub fn new(file_manager: F, config: PagerConfig) -> Result<Self, PagerError> {
        let file_size = file_manager.size()?;
        let page_count = (file_size / config.page_size as u64) as u32;
        Ok(Self {
            file_manager,
            config,
            cache: HashMap::new(),
            dirty: HashSet::new(),
            page_count,
        })
    }

    /// The number of pages that exist, including allocated-but-unflushed ones.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Retrieves the page for `page_id`, loading it from disk (or
    /// synthesizing a blank leaf page, if `page_id` is past the end of the
    /// file) on a cache miss.
    pub fn get(&mut self, page_id: PageId) -> Result<&Page, PagerError> {
        self.load_if_absent(page_id)?;
        Ok(self.cache.get(&page_id).expect("just loaded"))
    }

    /// Like [`Pager::get`], but mutable. Callers that mutate the returned
    /// page must still call [`Pager::mark_dirty`] — the page's own dirty
    /// flag and the pager's dirty set are maintained independently, as the
    /// module documents.
    pub fn get_mut(&mut self, page_id: PageId) -> Result<&mut Page, PagerError> {
        self.load_if_absent(page_id)?;
        Ok(self.cache.get_mut(&page_id).expect("just loaded"))
    }

    fn load_if_absent(&mut self, page_id: PageId) -> Result<(), PagerError> {
        if self.cache.contains_key(&page_id) {
            tracing::trace!(page_id, "pager cache hit");
            return Ok(());
        }

        let offset = page_id as u64 * self.config.page_size as u64;
        let file_size = self.file_manager.size()?;

        let page = if offset >= file_size {
            tracing::debug!(page_id, "page past end of file, synthesizing blank leaf");
            Page::new_leaf_with_max_size(page_id, self.config.page_size)
        } else {
            tracing::debug!(page_id, "pager cache miss, reading from disk");
            let bytes = self.file_manager.read(offset, self.config.page_size)?;
            Page::from_bytes(page_id, self.config.page_size, &bytes)?
        };

        self.cache.insert(page_id, page);
        Ok(())
    }

    /// Marks `page_id` dirty. No-op if it is not cached.
    pub fn mark_dirty(&mut self, page_id: PageId) {
        if self.cache.contains_key(&page_id) {
            self.dirty.insert(page_id);
        }
    }

    /// Serializes and writes `page_id` to disk if dirty, then clears its
    /// dirty bit. No-op if `page_id` is clean or uncached.
    pub fn flush(&mut self, page_id: PageId) -> Result<(), PagerError> {
        if !self.dirty.contains(&page_id) {
            return Ok(());
        }
        let Some(page) = self.cache.get(&page_id) else {
            return Ok(());
        };

        let bytes = page.to_bytes()?;
        let offset = page_id as u64 * self.config.page_size as u64;
        self.file_manager.write(offset, &bytes)?;

        self.dirty.remove(&page_id);
        if let Some(page) = self.cache.get_mut(&page_id) {
            page.mark_clean();
        }
        tracing::debug!(page_id, "flushed page");
        Ok(())
    }

    /// Flushes every currently dirty page.
    pub fn flush_all(&mut self) -> Result<(), PagerError> {
        let dirty_ids: Vec<PageId> = self.dirty.iter().copied().collect();
        let count = dirty_ids.len();
        for page_id in dirty_ids {
            self.flush(page_id)?;
        }
        tracing::debug!(count, "flush_all complete");
        Ok(())
    }

    /// Allocates a new page of `variant`, assigning it the next dense page
    /// id, caches it, marks it dirty, and returns a mutable reference to it.
    pub fn allocate(&mut self, variant: PageVariant) -> Result<&mut Page, PagerError> {
        let page_id = self.page_count;
        let page = match variant {
            PageVariant::Leaf => Page::new_leaf_with_max_size(page_id, self.config.page_size),
            PageVariant::Internal => {
                Page::new_internal_with_max_size(page_id, self.config.page_size)
            }
        };

        self.cache.insert(page_id, page);
        self.dirty.insert(page_id);
        self.page_count += 1;

        tracing::debug!(page_id, ?variant, "allocated page");
        Ok(self.cache.get_mut(&page_id).expect("just inserted"))
    }

    /// Flushes every dirty page, then releases the backing file.
    pub fn close(mut self) -> Result<(), PagerError> {
        self.flush_all()?;
        self.file_manager.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use file::{FileManager, InMemoryFileManager};

    fn pager() -> Pager<InMemoryFileManager> {
        let file_manager = InMemoryFileManager::open("/test.db").unwrap();
        Pager::new(file_manager, PagerConfig::default()).unwrap()
    }

    #[test]
    fn get_past_end_of_file_synthesizes_blank_leaf() {
        let mut pager = pager();
        let page = pager.get(0).unwrap();
        assert_eq!(page.variant(), PageVariant::Leaf);
        assert!(!page.is_dirty());
    }

    #[test]
    fn allocate_produces_strictly_increasing_ids() {
        let mut pager = pager();
        let first = pager.allocate(PageVariant::Leaf).unwrap().page_id();
        let second = pager.allocate(PageVariant::Leaf).unwrap().page_id();
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(pager.page_count(), 2);
    }

    #[test]
    fn flush_all_then_reopen_round_trips_leaf_page() {
        let file_manager = InMemoryFileManager::open("/test.db").unwrap();
        let mut pager = Pager::new(file_manager, PagerConfig::default()).unwrap();

        let page = pager.allocate(PageVariant::Leaf).unwrap();
        let page_id = page.page_id();
        page.insert(b"one".to_vec()).unwrap();
        page.insert(b"two".to_vec()).unwrap();
        page.insert(b"three".to_vec()).unwrap();
        pager.mark_dirty(page_id);

        pager.flush_all().unwrap();

        let reloaded = pager.get(page_id).unwrap();
        assert_eq!(reloaded.get(0).unwrap(), b"one");
        assert_eq!(reloaded.get(1).unwrap(), b"two");
        assert_eq!(reloaded.get(2).unwrap(), b"three");
    }

    #[test]
    fn flush_all_then_close_then_reopen_reads_back_same_bytes() {
        let file_manager = InMemoryFileManager::open("/test.db").unwrap();
        let mut pager = Pager::new(file_manager, PagerConfig::default()).unwrap();

        let page = pager.allocate(PageVariant::Internal).unwrap();
        let page_id = page.page_id();
        page.add_entry(b"k".to_vec(), 7).unwrap();
        pager.mark_dirty(page_id);
        let expected_bytes = pager.get(page_id).unwrap().to_bytes().unwrap();

        pager.flush_all().unwrap();
        assert_eq!(pager.page_count(), 1);

        let reopened_bytes = pager.get(page_id).unwrap().to_bytes().unwrap();
        assert_eq!(reopened_bytes, expected_bytes);
    }

    #[test]
    fn clean_page_flush_is_a_no_op() {
        let mut pager = pager();
        pager.get(0).unwrap();
        pager.flush(0).unwrap();
    }
}
