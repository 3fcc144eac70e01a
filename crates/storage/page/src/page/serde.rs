use super::api::{Page, PageBody};
use crate::error::{PageErrorKind, PageResult, WithPageId};
use crate::page_id::PageId;
use crate::page_type::PageVariant;
use binary_helpers::be::BigEndian;

fn push_be<T: BigEndian>(buf: &mut Vec<u8>, value: T) {
    let mut tmp = vec![0u8; T::SIZE];
    // SIZE-length buffer, so this cannot fail.
    value.to_be(&mut tmp).expect("fixed-size buffer");
    buf.extend_from_slice(&tmp);
}

fn read_be<T: BigEndian>(bytes: &[u8], offset: usize) -> Option<T> {
    bytes
        .get(offset..offset + T::SIZE)
        .map(|slice| T::from_be(slice).expect("slice length matches T::SIZE"))
}

impl Page {
    /// Serializes this page into exactly `max_size` bytes, per the layout in
    /// the module-level documentation of [`crate`].
    pub fn to_bytes(&self) -> PageResult<Vec<u8>> {
        self.to_bytes_internal().with_page_id(self.page_id)
    }

    fn to_bytes_internal(&self) -> Result<Vec<u8>, PageErrorKind> {
        let mut buf = Vec::with_capacity(self.max_size);
        buf.push(u8::from(self.variant()));

        match &self.body {
            PageBody::Leaf { slots, .. } => {
                for slot in slots {
                    match slot {
                        Some(payload) => {
                            push_be::<u32>(&mut buf, payload.len() as u32);
                            buf.extend_from_slice(payload);
                        }
                        None => push_be::<u32>(&mut buf, 0),
                    }
                }
            }
            PageBody::Internal { entries } => {
                for (key, child_page_id) in entries {
                    push_be::<u16>(&mut buf, key.len() as u16);
                    buf.extend_from_slice(key);
                    push_be::<u32>(&mut buf, *child_page_id);
                }
            }
        }

        if buf.len() > self.max_size {
            return Err(PageErrorKind::Capacity {
                needed: buf.len(),
                available: self.max_size,
            });
        }
        buf.resize(self.max_size, 0);
        Ok(buf)
    }

    /// Reconstructs a page from a `max_size`-byte buffer previously produced
    /// by [`Page::to_bytes`]. The result is clean.
    pub fn from_bytes(page_id: PageId, max_size: usize, bytes: &[u8]) -> PageResult<Page> {
        Self::from_bytes_internal(page_id, max_size, bytes).with_page_id(page_id)
    }

    fn from_bytes_internal(
        page_id: PageId,
        max_size: usize,
        bytes: &[u8],
    ) -> Result<Page, PageErrorKind> {
        let variant_byte = *bytes.first().ok_or(PageErrorKind::UnknownVariant(0))?;
        let variant =
            PageVariant::try_from(variant_byte).map_err(PageErrorKind::UnknownVariant)?;

        match variant {
            PageVariant::Leaf => Self::leaf_from_bytes(page_id, max_size, bytes),
            PageVariant::Internal => Self::internal_from_bytes(page_id, max_size, bytes),
        }
    }

    fn leaf_from_bytes(page_id: PageId, max_size: usize, bytes: &[u8]) -> Result<Page, PageErrorKind> {
        let mut slots = Vec::new();
        let mut tombstones = Vec::new();
        let mut current_size = 1usize;
        let mut cursor = 1usize;

        loop {
            if bytes.len() - cursor < 4 {
                break;
            }
            let length = read_be::<u32>(bytes, cursor).expect("bounds checked above") as usize;
            cursor += 4;

            if length == 0 {
                tombstones.push(slots.len());
                slots.push(None);
                continue;
            }
            if cursor + length > bytes.len() {
                // A prefix claiming more than remains is the padding boundary, not an error.
                break;
            }
            slots.push(Some(bytes[cursor..cursor + length].to_vec()));
            cursor += length;
            current_size += length + 4;
        }

        Ok(Page {
            page_id,
            max_size,
            dirty: false,
            current_size,
            body: PageBody::Leaf { slots, tombstones },
        })
    }

    fn internal_from_bytes(
        page_id: PageId,
        max_size: usize,
        bytes: &[u8],
    ) -> Result<Page, PageErrorKind> {
        let mut entries = Vec::new();
        let mut current_size = 1usize;
        let mut cursor = 1usize;

        loop {
            if bytes.len() - cursor < 2 {
                break;
            }
            let key_len = read_be::<u16>(bytes, cursor).expect("bounds checked above") as usize;
            if bytes.len() - cursor < 2 + key_len + 4 {
                break;
            }
            cursor += 2;
            let key = bytes[cursor..cursor + key_len].to_vec();
            cursor += key_len;
            let child_page_id =
                read_be::<u32>(bytes, cursor).expect("bounds checked above");
            cursor += 4;

            entries.push((key, child_page_id));
            current_size += 2 + key_len + 4;
        }

        Ok(Page {
            page_id,
            max_size,
            dirty: false,
            current_size,
            body: PageBody::Internal { entries },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::page::api::Page;
    use crate::page_type::PageVariant;

    #[test]
    fn leaf_round_trips_without_tombstones() {
        let mut page = Page::new_leaf(0);
        page.insert(b"A".to_vec()).unwrap();
        page.insert(b"BB".to_vec()).unwrap();
        page.insert(b"CCC".to_vec()).unwrap();

        let bytes = page.to_bytes().unwrap();
        assert_eq!(bytes.len(), page.max_size());

        let reloaded = Page::from_bytes(page.page_id(), page.max_size(), &bytes).unwrap();
        assert_eq!(reloaded.get(0).unwrap(), b"A");
        assert_eq!(reloaded.get(1).unwrap(), b"BB");
        assert_eq!(reloaded.get(2).unwrap(), b"CCC");
        assert!(!reloaded.is_dirty());
        assert_eq!(reloaded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn non_trailing_tombstones_survive_reload() {
        let mut page = Page::new_leaf(0);
        page.insert(b"A".to_vec()).unwrap();
        page.insert(b"B".to_vec()).unwrap();
        page.delete(0).unwrap();

        let bytes = page.to_bytes().unwrap();
        let reloaded = Page::from_bytes(page.page_id(), page.max_size(), &bytes).unwrap();
        assert!(reloaded.get(0).is_err());
        assert_eq!(reloaded.get(1).unwrap(), b"B");
    }

    #[test]
    fn internal_page_round_trips() {
        let mut page = Page::new_internal(1);
        page.add_entry(b"m".to_vec(), 9).unwrap();
        page.add_entry(b"z".to_vec(), 11).unwrap();

        let bytes = page.to_bytes().unwrap();
        let reloaded = Page::from_bytes(page.page_id(), page.max_size(), &bytes).unwrap();
        assert_eq!(reloaded.variant(), PageVariant::Internal);
        assert_eq!(reloaded.get_entry(0).unwrap(), (b"m".as_slice(), 9));
        assert_eq!(reloaded.get_entry(1).unwrap(), (b"z".as_slice(), 11));
    }

    #[test]
    fn fresh_page_serializes_to_all_zero_after_variant_byte() {
        let page = Page::new_leaf(0);
        let bytes = page.to_bytes().unwrap();
        assert_eq!(bytes[0], 0);
        assert!(bytes[1..].iter().all(|&b| b == 0));
    }
}
