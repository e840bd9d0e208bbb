//! Header-prefixed integer layouts.
//!
//! | Layout | Length | Payload |
//! |---|---|---|
//! | U8 | 2 | byte 1 |
//! | U32 | 5 | bytes 1-4, big-endian |
//! | V32 | 5 | bytes 1-4, big-endian two's complement |

use crate::error::Result;
use crate::frame::{view, ByteFrame, WordFrame, HEADER};

/// Packs an unsigned byte behind the header: `[0, value]`.
pub fn pack_u8(value: u8) -> [u8; 2] {
    bytemuck::cast(ByteFrame {
        header: HEADER,
        value,
    })
}

pub fn unpack_u8(data: &[u8]) -> Result<u8> {
    let frame: &ByteFrame = view(data)?;
    Ok(frame.value)
}

/// Packs an unsigned 32-bit integer behind the header, big-endian.
///
/// ```
/// use dpt_formats::pack_u32;
///
/// assert_eq!(pack_u32(0x0102_0304), [0x00, 0x01, 0x02, 0x03, 0x04]);
/// ```
pub fn pack_u32(value: u32) -> [u8; 5] {
    bytemuck::cast(WordFrame {
        header: HEADER,
        word: value.to_be_bytes(),
    })
}

pub fn unpack_u32(data: &[u8]) -> Result<u32> {
    let frame: &WordFrame = view(data)?;
    Ok(u32::from_be_bytes(frame.word))
}

/// Packs a signed 32-bit integer behind the header. Same layout as
/// [`pack_u32`]; the sign lives in the two's-complement bit pattern.
///
/// ```
/// use dpt_formats::pack_v32;
///
/// assert_eq!(pack_v32(-1), [0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
/// ```
pub fn pack_v32(value: i32) -> [u8; 5] {
    bytemuck::cast(WordFrame {
        header: HEADER,
        word: value.to_be_bytes(),
    })
}

pub fn unpack_v32(data: &[u8]) -> Result<i32> {
    let frame: &WordFrame = view(data)?;
    Ok(i32::from_be_bytes(frame.word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    #[test]
    fn u8_layout() {
        assert_eq!(pack_u8(0xAB), [0x00, 0xAB]);
        assert_eq!(unpack_u8(&[0x00, 0xAB]).unwrap(), 0xAB);
    }

    #[test]
    fn u8_ignores_header_value() {
        assert_eq!(unpack_u8(&[0x7F, 0x10]).unwrap(), 0x10);
    }

    #[test]
    fn u8_invalid_length() {
        assert_eq!(
            unpack_u8(&[0x10]),
            Err(FormatError::InvalidLength {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn u32_extremes() {
        for value in [0, 1, u32::MAX] {
            assert_eq!(unpack_u32(&pack_u32(value)).unwrap(), value);
        }
        assert_eq!(pack_u32(u32::MAX), [0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn v32_corner_cases() {
        assert_eq!(pack_v32(i32::MIN), [0x00, 0x80, 0x00, 0x00, 0x00]);
        assert_eq!(pack_v32(i32::MAX), [0x00, 0x7F, 0xFF, 0xFF, 0xFF]);
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(unpack_v32(&pack_v32(value)).unwrap(), value);
        }
    }

    #[test]
    fn word_layouts_share_bytes() {
        assert_eq!(pack_v32(-2), pack_u32(0xFFFF_FFFE));
    }

    #[test]
    fn word_invalid_length() {
        assert!(unpack_u32(&[0, 1, 2, 3]).is_err());
        assert!(unpack_v32(&[0, 1, 2, 3, 4, 5]).is_err());
    }
}
