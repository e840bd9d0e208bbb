//! Single-byte layouts: a lone boolean, and a boolean with a 3-bit value.

use crate::bit_ops::{get_bits, set_bits};
use crate::error::Result;
use crate::frame::view;

const FLAG_BIT: u32 = 0;
const CONTROL_BIT: u32 = 3;
const STEP_OFFSET: u32 = 0;
const STEP_WIDTH: u32 = 3;

/// Packs a boolean into bit 0 of a single byte.
///
/// ```
/// use dpt_formats::pack_b1;
///
/// assert_eq!(pack_b1(true), [0x01]);
/// assert_eq!(pack_b1(false), [0x00]);
/// ```
pub fn pack_b1(value: bool) -> [u8; 1] {
    [set_bits(0, FLAG_BIT, 1, value as u8)]
}

/// Reads bit 0 of a single-byte frame. Other bits are ignored.
pub fn unpack_b1(data: &[u8]) -> Result<bool> {
    let [byte] = *view::<[u8; 1]>(data)?;
    Ok(get_bits(byte, FLAG_BIT, 1) == 1)
}

/// Packs a control flag into bit 3 and `value` into bits 0-2.
///
/// Only the low three bits of `value` are kept; callers constrain it to 0..=7.
///
/// ```
/// use dpt_formats::pack_b1u3;
///
/// assert_eq!(pack_b1u3(true, 5), [0b0000_1101]);
/// assert_eq!(pack_b1u3(false, 5), [0b0000_0101]);
/// ```
pub fn pack_b1u3(control: bool, value: u8) -> [u8; 1] {
    let byte = set_bits(0, CONTROL_BIT, 1, control as u8);
    [set_bits(byte, STEP_OFFSET, STEP_WIDTH, value)]
}

/// Reads the control flag (bit 3) and 3-bit value (bits 0-2) of a single-byte frame.
pub fn unpack_b1u3(data: &[u8]) -> Result<(bool, u8)> {
    let [byte] = *view::<[u8; 1]>(data)?;
    Ok((
        get_bits(byte, CONTROL_BIT, 1) == 1,
        get_bits(byte, STEP_OFFSET, STEP_WIDTH),
    ))
}
