/// Reverses the four bytes of `value`.
#[inline]
pub fn swap32(value: u32) -> u32 {
    ((value & 0xFF) << 24) | ((value & 0xFF00) << 8) | ((value >> 8) & 0xFF00) | (value >> 24)
}

/// Reverses the two bytes of `value` and sign-extends the result.
///
/// Callers rely on a negative result whenever the swapped high bit is set,
/// e.g. `swap16(0x00FF) == -256`.
#[inline]
pub fn swap16(value: u16) -> i32 {
    i32::from(value.swap_bytes() as i16)
}
