//! Fixed-width machine words used by the engine and the cipher

use core::fmt::Debug;
use core::ops::{BitXor, BitXorAssign};

/// An unsigned word with wrapping arithmetic and little-endian packing
pub trait Word:
    Copy + Default + Eq + Debug + Send + Sync + BitXor<Output = Self> + BitXorAssign + 'static
{
    /// Width in bytes
    const BYTES: usize;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn rotate_left(self, n: u32) -> Self;

    /// Truncating conversion from a 64-bit value
    fn from_u64(value: u64) -> Self;

    /// Read a word from exactly `Self::BYTES` little-endian bytes
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Write the word into exactly `Self::BYTES` bytes, least significant first
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotate_left(self, n: u32) -> Self {
                <$ty>::rotate_left(self, n)
            }

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_le_bytes(buf)
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_conversion() {
        assert_eq!(<u32 as Word>::from_u64(0x5555_5555_5555_5555), 0x5555_5555);
        assert_eq!(<u64 as Word>::from_u64(18), 18u64);
    }

    #[test]
    fn test_little_endian_packing() {
        let w = <u32 as Word>::from_le_slice(&[0x41, 0xfb, 0x00, 0x00]);
        assert_eq!(w, 0xfb41);

        let mut out = [0u8; 8];
        Word::write_le(0x0102_0304_0506_0708u64, &mut out);
        assert_eq!(out, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_wrapping_add() {
        assert_eq!(Word::wrapping_add(u32::MAX, 2u32), 1);
        assert_eq!(Word::wrapping_add(u64::MAX, 1u64), 0);
    }
}
