use super::api::{Page, PageBody};
use crate::PAGE_SIZE;
use crate::page_id::PageId;

/// Reserved for the single variant byte every serialized page begins with.
const VARIANT_BYTE_COST: usize = 1;

impl Page {
    /// Creates a fresh, empty leaf page, clean and ready for inserts.
    pub fn new_leaf(page_id: PageId) -> Self {
        Self::new_leaf_with_max_size(page_id, PAGE_SIZE)
    }

    /// Creates a fresh, empty leaf page with a non-default `max_size`. Used
    /// by tests exercising capacity behavior at smaller page sizes.
    pub fn new_leaf_with_max_size(page_id: PageId, max_size: usize) -> Self {
        Self {
            page_id,
            max_size,
            dirty: false,
            current_size: VARIANT_BYTE_COST,
            body: PageBody::Leaf {
                slots: Vec::new(),
                tombstones: Vec::new(),
            },
        }
    }

    /// Creates a fresh, empty internal page, clean and ready for entries.
    pub fn new_internal(page_id: PageId) -> Self {
        Self::new_internal_with_max_size(page_id, PAGE_SIZE)
    }

    /// Creates a fresh, empty internal page with a non-default `max_size`.
    pub fn new_internal_with_max_size(page_id: PageId, max_size: usize) -> Self {
        Self {
            page_id,
            max_size,
            dirty: false,
            current_size: VARIANT_BYTE_COST,
            body: PageBody::Internal {
                entries: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_type::PageVariant;

    #[test]
    fn new_leaf_starts_clean_with_no_rows() {
        let page = Page::new_leaf(7);
        assert_eq!(page.page_id(), 7);
        assert!(!page.is_dirty());
        assert_eq!(page.variant(), PageVariant::Leaf);
        assert_eq!(page.current_size(), VARIANT_BYTE_COST);
    }

    #[test]
    fn new_internal_starts_clean_with_no_entries() {
        let page = Page::new_internal(3);
        assert_eq!(page.variant(), PageVariant::Internal);
        assert_eq!(page.current_size(), VARIANT_BYTE_COST);
    }
}
