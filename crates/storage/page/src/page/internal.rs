use super::api::{Page, PageBody};
use crate::error::PageErrorKind;

/// Per-entry on-disk cost: 2-byte key length, the key itself, 4-byte child page id.
fn entry_cost(key_len: usize) -> usize {
    2 + key_len + 4
}

impl Page {
    pub(super) fn add_entry_internal(
        &mut self,
        key: Vec<u8>,
        child_page_id: u32,
    ) -> Result<i64, PageErrorKind> {
        let entries = match &mut self.body {
            PageBody::Internal { entries } => entries,
            PageBody::Leaf { .. } => {
                return Err(PageErrorKind::Unsupported {
                    operation: "add_entry",
                    variant: self.variant(),
                });
            }
        };

        entries.push((key, child_page_id));
        let index = entries.len() - 1;
        let key_len = entries[index].0.len();

        self.current_size += entry_cost(key_len);
        self.dirty = true;
        Ok(index as i64)
    }

    pub(super) fn get_entry_internal(&self, index: i64) -> Result<(&[u8], u32), PageErrorKind> {
        let entries = match &self.body {
            PageBody::Internal { entries } => entries,
            PageBody::Leaf { .. } => {
                return Err(PageErrorKind::Unsupported {
                    operation: "get_entry",
                    variant: self.variant(),
                });
            }
        };

        let Ok(i) = usize::try_from(index) else {
            return Err(PageErrorKind::Index { row_id: index });
        };
        match entries.get(i) {
            Some((key, child_page_id)) => Ok((key.as_slice(), *child_page_id)),
            None => Err(PageErrorKind::Index { row_id: index }),
        }
    }
}
