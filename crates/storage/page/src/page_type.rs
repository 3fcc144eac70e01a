use std::convert::TryFrom;

/// Variant tag stored as the first byte of every serialized page.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// Holds an ordered list of opaque record payloads, addressed by row id.
    Leaf = 0,
    /// Holds an ordered list of `(key, child_page_id)` entries.
    Internal = 1,
}

impl From<PageVariant> for u8 {
    fn from(v: PageVariant) -> Self {
        v as u8
    }
}

impl TryFrom<u8> for PageVariant {
    type Error = u8;

    /// Attempts to convert a raw variant byte back into a `PageVariant`.
    /// Returns the offending byte on failure.
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PageVariant::Leaf),
            1 => Ok(PageVariant::Internal),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_from_u8() {
        assert_eq!(u8::from(PageVariant::Leaf), 0);
        assert_eq!(u8::from(PageVariant::Internal), 1);

        assert_eq!(PageVariant::try_from(0).unwrap(), PageVariant::Leaf);
        assert_eq!(PageVariant::try_from(1).unwrap(), PageVariant::Internal);

        assert_eq!(PageVariant::try_from(7), Err(7));
    }
}
