use super::api::{Page, PageBody};
use crate::error::PageErrorKind;

impl Page {
    pub(super) fn delete_internal(&mut self, row_id: i64) -> Result<(), PageErrorKind> {
        let slots = match &mut self.body {
            PageBody::Leaf { slots, .. } => slots,
            PageBody::Internal { .. } => {
                return Err(PageErrorKind::Unsupported {
                    operation: "delete",
                    variant: self.variant(),
                });
            }
        };

        let Ok(index) = usize::try_from(row_id) else {
            return Err(PageErrorKind::Index { row_id });
        };
        let Some(slot) = slots.get_mut(index) else {
            return Err(PageErrorKind::Index { row_id });
        };
        let Some(payload) = slot.take() else {
            return Err(PageErrorKind::Index { row_id });
        };

        self.current_size -= payload.len() + 4;
        if let PageBody::Leaf { tombstones, .. } = &mut self.body {
            tombstones.push(index);
        }
        self.dirty = true;
        Ok(())
    }
}
