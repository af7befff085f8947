//! UBI tweak: per-block position, first/last flags and type tag
//!
//! The tweak is a 128-bit value laid out as
//!
//! ```text
//! bits   0..=63   position (bytes processed through the current block)
//! bits 120..=125  type tag
//! bit  126        first block of the UBI call
//! bit  127        last block of the UBI call
//! ```
//!
//! Each word width slices this value into its own tweak schedule.

use crate::params::TYPE_MAX;

const TYPE_SHIFT: u32 = 56;
const FIRST_BIT: u64 = 1 << 62;
const LAST_BIT: u64 = 1 << 63;

/// Tweak for a single block of a UBI call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tweak {
    /// Cumulative byte count through this block (unpadded on the last block)
    pub position: u64,
    pub first: bool,
    pub last: bool,
    /// 6-bit UBI type tag
    pub type_tag: u8,
}

impl Tweak {
    pub fn new(type_tag: u8, position: u64, first: bool, last: bool) -> Self {
        debug_assert!(type_tag <= TYPE_MAX, "type tag exceeds 6 bits");
        Self {
            position,
            first,
            last,
            type_tag: type_tag & TYPE_MAX,
        }
    }

    /// Upper 64 bits of the tweak: type tag and flags
    #[inline(always)]
    pub fn flags_word(&self) -> u64 {
        let mut word = ((self.type_tag & TYPE_MAX) as u64) << TYPE_SHIFT;
        if self.first {
            word |= FIRST_BIT;
        }
        if self.last {
            word |= LAST_BIT;
        }
        word
    }

    /// 64-bit schedule: both tweak words plus their XOR
    #[inline(always)]
    pub fn words64(&self) -> [u64; 3] {
        let flags = self.flags_word();
        [self.position, flags, self.position ^ flags]
    }

    /// 32-bit schedule: four tweak words plus `t[0] ^ t[3]`
    ///
    /// Bits 64..=95 of the tweak are always zero here since the position
    /// counter is 64 bits wide.
    #[inline(always)]
    pub fn words32(&self) -> [u32; 5] {
        let lo = self.position as u32;
        let hi = (self.position >> 32) as u32;
        let flags = (self.flags_word() >> 32) as u32;
        [lo, hi, 0, flags, lo ^ flags]
    }
}
