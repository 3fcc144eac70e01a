use super::api::{Page, PageBody};
use crate::error::PageErrorKind;

impl Page {
    pub(super) fn insert_internal(&mut self, payload: Vec<u8>) -> Result<i64, PageErrorKind> {
        if !matches!(self.body, PageBody::Leaf { .. }) {
            return Err(PageErrorKind::Unsupported {
                operation: "insert",
                variant: self.variant(),
            });
        }
        if !self.has_space(&payload) {
            return Err(self.capacity_error(payload.len() + 4));
        }

        self.current_size += payload.len() + 4;

        let row_id = match &mut self.body {
            PageBody::Leaf { slots, tombstones } => {
                if let Some(reused) = tombstones.pop() {
                    slots[reused] = Some(payload);
                    reused
                } else {
                    slots.push(Some(payload));
                    slots.len() - 1
                }
            }
            PageBody::Internal { .. } => unreachable!("checked above"),
        };

        self.dirty = true;
        Ok(row_id as i64)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PageErrorKind;
    use crate::page::api::Page;

    #[test]
    fn inserts_append_sequential_row_ids() {
        let mut page = Page::new_leaf(0);
        assert_eq!(page.insert(b"A".to_vec()).unwrap(), 0);
        assert_eq!(page.insert(b"BB".to_vec()).unwrap(), 1);
        assert_eq!(page.insert(b"CCC".to_vec()).unwrap(), 2);
        assert!(page.is_dirty());
    }

    #[test]
    fn insert_refuses_when_payload_exceeds_capacity() {
        let mut page = Page::new_leaf(0);
        let payload = vec![0u8; 4092];
        assert!(matches!(
            page.insert(payload).unwrap_err().kind,
            PageErrorKind::Capacity { .. }
        ));
    }

    #[test]
    fn tombstone_reuse_follows_scenario_c() {
        let mut page = Page::new_leaf(0);
        page.insert(b"A".to_vec()).unwrap();
        page.insert(b"BB".to_vec()).unwrap();
        page.insert(b"CCC".to_vec()).unwrap();

        page.delete(1).unwrap();
        let reused = page.insert(b"DD".to_vec()).unwrap();

        assert_eq!(reused, 1);
        assert_eq!(page.get(1).unwrap(), b"DD");
        assert_eq!(page.get(0).unwrap(), b"A");
        assert_eq!(page.get(2).unwrap(), b"CCC");
    }
}
