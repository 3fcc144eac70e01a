//! Big-endian fixed-width integer and float codecs.
//!
//! Every multi-byte value that appears on disk in this workspace — slot
//! length prefixes, child page ids, record integer/float bodies — is stored
//! big-endian. This module is the single place that encodes that choice.

use crate::bin_error::BinaryError;

/// A fixed-width numeric type that can be read from and written to a byte
/// slice in big-endian order.
pub trait BigEndian: Sized + Copy {
    /// Size of the encoded form, in bytes.
    const SIZE: usize;

    /// Decodes `Self` from exactly `Self::SIZE` big-endian bytes.
    fn from_be(source_bytes: &[u8]) -> Result<Self, BinaryError>;

    /// Encodes `self` into `target_buffer`, which must be exactly `Self::SIZE` bytes.
    fn to_be(self, target_buffer: &mut [u8]) -> Result<(), BinaryError>;
}

macro_rules! impl_big_endian {
    ($t:ty) => {
        impl BigEndian for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            fn from_be(source_bytes: &[u8]) -> Result<Self, BinaryError> {
                if source_bytes.len() != Self::SIZE {
                    return Err(BinaryError::SliceRangeOutOfBounds {
                        from_offset: 0,
                        expected: Self::SIZE,
                    });
                }
                Ok(<$t>::from_be_bytes(source_bytes.try_into()?))
            }

            fn to_be(self, target_buffer: &mut [u8]) -> Result<(), BinaryError> {
                if target_buffer.len() != Self::SIZE {
                    return Err(BinaryError::SliceRangeOutOfBounds {
                        from_offset: 0,
                        expected: Self::SIZE,
                    });
                }
                target_buffer.copy_from_slice(&self.to_be_bytes());
                Ok(())
            }
        }
    };
}

impl_big_endian!(u16);
impl_big_endian!(u32);
impl_big_endian!(u64);
impl_big_endian!(i32);

impl BigEndian for f64 {
    const SIZE: usize = 8;

    fn from_be(source_bytes: &[u8]) -> Result<Self, BinaryError> {
        Ok(f64::from_bits(u64::from_be(source_bytes)?))
    }

    fn to_be(self, target_buffer: &mut [u8]) -> Result<(), BinaryError> {
        self.to_bits().to_be(target_buffer)
    }
}

/// Reads a `T` from `bytes` at `start_offset`, big-endian.
pub fn read_be<T: BigEndian>(bytes: &[u8], start_offset: usize) -> Result<T, BinaryError> {
    let Some(slice) = bytes.get(start_offset..start_offset + T::SIZE) else {
        return Err(BinaryError::SliceRangeOutOfBounds {
            expected: T::SIZE,
            from_offset: start_offset,
        });
    };
    T::from_be(slice)
}

/// Writes `value` into `bytes` at `start_offset`, big-endian.
pub fn write_be<T: BigEndian>(
    bytes: &mut [u8],
    start_offset: usize,
    value: T,
) -> Result<(), BinaryError> {
    let Some(slice) = bytes.get_mut(start_offset..start_offset + T::SIZE) else {
        return Err(BinaryError::SliceRangeOutOfBounds {
            expected: T::SIZE,
            from_offset: start_offset,
        });
    };
    value.to_be(slice)
}
