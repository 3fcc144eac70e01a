use super::api::{Page, PageBody};
use crate::error::PageErrorKind;

impl Page {
    pub(super) fn get_internal(&self, row_id: i64) -> Result<&[u8], PageErrorKind> {
        let slots = match &self.body {
            PageBody::Leaf { slots, .. } => slots,
            PageBody::Internal { .. } => {
                return Err(PageErrorKind::Unsupported {
                    operation: "get",
                    variant: self.variant(),
                });
            }
        };

        let Ok(index) = usize::try_from(row_id) else {
            return Err(PageErrorKind::Index { row_id });
        };
        match slots.get(index) {
            Some(Some(payload)) => Ok(payload.as_slice()),
            _ => Err(PageErrorKind::Index { row_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PageErrorKind;
    use crate::page::api::Page;

    #[test]
    fn get_round_trips_inserted_payload() {
        let mut page = Page::new_leaf(0);
        let row_id = page.insert(b"hello".to_vec()).unwrap();
        assert_eq!(page.get(row_id).unwrap(), b"hello");
    }

    #[test]
    fn get_out_of_range_fails() {
        let page = Page::new_leaf(0);
        assert!(matches!(
            page.get(0).unwrap_err().kind,
            PageErrorKind::Index { .. }
        ));
    }
}
