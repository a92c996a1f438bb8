//! Masks for integer samples packed into wider containers, such as 12-bit
//! pixels stored in 2 bytes.
//!
//! All arithmetic is 32-bit. Shift counts wrap modulo 32, so an 8-byte
//! container never yields more than a 32-bit mask, and a `num_bytes` outside
//! `{1, 2, 4, 8}` produces whatever the shift formula gives. Signed samples are
//! never masked.

const ALL_ONES: u32 = 0xFFFF_FFFF;

/// Mask isolating the low `bits_stored` bits of a `num_bytes`-wide value.
pub fn create_bit_mask(num_bytes: u32, bits_stored: u32, unsigned: bool) -> u32 {
    if !unsigned {
        return ALL_ONES;
    }

    let n = i64::from(num_bytes);
    let shift = (4 - n) * 8 + (n * 8 - i64::from(bits_stored));
    // Truncation to u32 then `wrapping_shr` mirrors a 32-bit logical shift.
    let mask = ALL_ONES.wrapping_shr(shift as u32);

    match num_bytes {
        1 => mask & 0x0000_00FF,
        2 => mask & 0x0000_FFFF,
        4 => mask,
        8 => ALL_ONES,
        _ => mask,
    }
}

/// Storage layout of one packed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleLayout {
    pub num_bytes: u32,
    pub bits_stored: u32,
    pub unsigned: bool,
}

impl SampleLayout {
    pub fn new(num_bytes: u32, bits_stored: u32, unsigned: bool) -> SampleLayout {
        SampleLayout {
            num_bytes,
            bits_stored,
            unsigned,
        }
    }

    pub fn mask(&self) -> u32 {
        create_bit_mask(self.num_bytes, self.bits_stored, self.unsigned)
    }

    /// Strips padding and overflow bits from a raw container value.
    pub fn apply(&self, raw: u32) -> u32 {
        raw & self.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twelve_bits_in_two_bytes() {
        assert_eq!(create_bit_mask(2, 12, true), 0x0FFF);
    }

    #[test]
    fn full_width_unsigned() {
        assert_eq!(create_bit_mask(1, 8, true), 0xFF);
        assert_eq!(create_bit_mask(2, 16, true), 0xFFFF);
        assert_eq!(create_bit_mask(4, 32, true), 0xFFFF_FFFF);
    }

    #[test]
    fn narrow_unsigned() {
        assert_eq!(create_bit_mask(1, 1, true), 0x01);
        assert_eq!(create_bit_mask(1, 7, true), 0x7F);
        assert_eq!(create_bit_mask(2, 10, true), 0x03FF);
        assert_eq!(create_bit_mask(4, 24, true), 0x00FF_FFFF);
    }

    #[test]
    fn zero_bits_stored_wraps_to_full_mask() {
        // A 32-bit shift wraps to a shift of zero.
        assert_eq!(create_bit_mask(4, 0, true), 0xFFFF_FFFF);
        assert_eq!(create_bit_mask(2, 0, true), 0xFFFF);
    }

    #[test]
    fn eight_bytes_is_limited_to_32_bits() {
        assert_eq!(create_bit_mask(8, 64, true), 0xFFFF_FFFF);
        assert_eq!(create_bit_mask(8, 12, true), 0xFFFF_FFFF);
    }

    #[test]
    fn unlisted_width_is_not_ceiled() {
        // (4 - 3) * 8 + (24 - 12) = 20
        assert_eq!(create_bit_mask(3, 12, true), 0x0FFF);
    }

    #[test]
    fn layout_applies_mask() {
        let layout = SampleLayout::new(2, 12, true);
        assert_eq!(layout.mask(), 0x0FFF);
        assert_eq!(layout.apply(0xF123), 0x0123);
        assert_eq!(SampleLayout::new(2, 12, false).apply(0xF123), 0xF123);
    }

    proptest! {
        #[test]
        fn signed_is_always_unmasked(num_bytes in any::<u32>(), bits_stored in any::<u32>()) {
            prop_assert_eq!(create_bit_mask(num_bytes, bits_stored, false), 0xFFFF_FFFF);
        }

        #[test]
        fn unsigned_keeps_exactly_the_stored_bits(
            num_bytes in prop::sample::select(vec![1u32, 2, 4]),
            bits in 1u32..=32,
        ) {
            let bits_stored = bits.min(num_bytes * 8);
            let mask = create_bit_mask(num_bytes, bits_stored, true);
            prop_assert_eq!(mask.count_ones(), bits_stored);
            prop_assert_eq!(mask.trailing_ones(), bits_stored);
        }
    }
}
