// Bit 0 is the least significant bit of the byte.

#[inline]
const fn mask(width: u32) -> u8 {
    ((1u16 << width) - 1) as u8
}

/// Reads `width` bits of `byte` starting at `offset`.
#[inline]
pub(crate) const fn get_bits(byte: u8, offset: u32, width: u32) -> u8 {
    (byte >> offset) & mask(width)
}

/// Returns `byte` with `width` bits at `offset` replaced by the low bits of `value`.
#[inline]
pub(crate) const fn set_bits(byte: u8, offset: u32, width: u32, value: u8) -> u8 {
    let field = mask(width) << offset;
    (byte & !field) | ((value << offset) & field)
}
