//! Fixed wire layouts and the length check every decoder runs first.
//!
//! Multi-byte layouts start with a reserved header byte. Encoders always
//! write it as [`HEADER`]; decoders ignore its value.

use bytemuck_derive::{Pod, Zeroable};

use crate::error::{FormatError, Result};

/// Value of the reserved leading byte.
pub const HEADER: u8 = 0;

/// Header followed by one unsigned byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ByteFrame {
    pub header: u8,
    pub value: u8,
}

/// Header followed by a 32-bit word in big-endian order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct WordFrame {
    pub header: u8,
    pub word: [u8; 4],
}

/// Header followed by the two bytes of a 16-bit float.
///
/// `high` holds the sign (bit 7), the exponent (bits 3-6) and the top three
/// mantissa bits; `low` holds the remaining eight mantissa bits.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Float16Frame {
    pub header: u8,
    pub high: u8,
    pub low: u8,
}

/// Views `data` as the layout `T`, failing unless its length is exactly
/// `size_of::<T>()`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidLength`] on any length mismatch.
///
/// # Examples
///
/// ```
/// use dpt_formats::frame::{view, WordFrame};
///
/// let frame: &WordFrame = view(&[0, 0, 0, 1, 2])?;
/// assert_eq!(frame.word, [0, 0, 1, 2]);
///
/// assert!(view::<WordFrame>(&[0, 0, 1, 2]).is_err());
/// # Ok::<(), dpt_formats::FormatError>(())
/// ```
pub fn view<T: bytemuck::Pod>(data: &[u8]) -> Result<&T> {
    // Every layout is built from u8 fields, so only the size can mismatch.
    bytemuck::try_from_bytes(data).map_err(|_| {
        let expected = core::mem::size_of::<T>();
        tracing::trace!(expected, actual = data.len(), "rejected frame with invalid length");
        FormatError::InvalidLength {
            expected,
            actual: data.len(),
        }
    })
}
