//! Two-byte floating point: sign, 4-bit exponent, 11-bit mantissa.
//!
//! A value is `0.01 * m * 2^e`, where `m` is the mantissa field, minus 2048
//! when the sign bit is set. Encoding scales the input to hundredths,
//! truncates, then halves the mantissa (truncating toward zero) until it fits
//! the signed 12-bit range, bumping the exponent on every halving. Each
//! exponent step doubles the quantization step, so large magnitudes lose
//! precision: at `e` the error is below `0.01 * 2^e`.
//!
//! The truncating halving makes the range asymmetric: `-20.48` fits at
//! exponent 0 while `20.48` needs exponent 1. Deployed decoders expect this
//! exact split, so it is reproduced here rather than rounded.

use crate::bit_ops::{get_bits, set_bits};
use crate::error::Result;
use crate::frame::{view, Float16Frame, HEADER};

const RESOLUTION: f32 = 0.01;
const SCALE: f32 = 100.0;

const MANTISSA_MIN: i32 = -2048;
const MANTISSA_MAX: i32 = 2047;
const SIGN_OFFSET: i32 = 2048;
const MANTISSA_MASK: u16 = 0x07FF;

const SIGN_BIT: u32 = 7;
const EXPONENT_OFFSET: u32 = 3;
const EXPONENT_WIDTH: u32 = 4;
const MANTISSA_HIGH_WIDTH: u32 = 3;

/// The sign, exponent and mantissa fields of a 16-bit float.
///
/// # Examples
///
/// ```
/// use dpt_formats::Float16;
///
/// // 100.0 -> 10000 hundredths -> 5000 -> 2500 -> 1250 at exponent 3
/// let f = Float16::encode(100.0);
/// assert_eq!(f.exponent(), 3);
/// assert_eq!(f.signed_mantissa(), 1250);
/// assert_eq!(f.to_bytes(), [0x00, 0x1C, 0xE2]);
/// assert_eq!(f.to_f32(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Float16 {
    negative: bool,
    exponent: u8,
    mantissa: u16,
}

impl Float16 {
    /// Upper clamp bound, `2047 * 0.01 * 2^15`.
    ///
    /// As an `f32` this is `670760.9375`, which scales to mantissa 2046 at
    /// exponent 15; the top code `0x7FFF` is only reachable by decoding.
    pub const MAX: f32 = 670_760.96;

    /// Smallest encodable value, `-2048 * 0.01 * 2^15`.
    pub const MIN: f32 = -671_088.64;

    /// Capacity of the 4-bit exponent field.
    pub const MAX_EXPONENT: u8 = 15;

    /// Builds a value from raw fields. `exponent` keeps its low 4 bits and
    /// `mantissa` its low 11 bits, mirroring what fits on the wire.
    pub const fn from_parts(negative: bool, exponent: u8, mantissa: u16) -> Self {
        Self {
            negative,
            exponent: exponent & Self::MAX_EXPONENT,
            mantissa: mantissa & MANTISSA_MASK,
        }
    }

    /// Encodes `value`, saturating it to [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    ///
    /// `NaN` encodes as zero.
    pub fn encode(value: f32) -> Self {
        let clamped = value.clamp(Self::MIN, Self::MAX);

        // Float-to-int casts truncate toward zero and map NaN to 0.
        let mut mantissa = (clamped * SCALE) as i32;
        let mut exponent = 0u8;

        while !(MANTISSA_MIN..=MANTISSA_MAX).contains(&mantissa) && exponent < Self::MAX_EXPONENT {
            mantissa /= 2;
            exponent += 1;
        }

        // Unreachable for clamped input; keeps the fields in range regardless.
        let mantissa = mantissa.clamp(MANTISSA_MIN, MANTISSA_MAX);

        let negative = mantissa < 0;
        let folded = if negative {
            mantissa + SIGN_OFFSET
        } else {
            mantissa
        };

        Self {
            negative,
            exponent,
            mantissa: folded as u16,
        }
    }

    /// Decodes the fields of a 3-byte frame.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidLength`](crate::FormatError::InvalidLength)
    /// unless `data` is exactly 3 bytes long.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let frame: &Float16Frame = view(data)?;
        let high = get_bits(frame.high, 0, MANTISSA_HIGH_WIDTH);

        Ok(Self {
            negative: get_bits(frame.high, SIGN_BIT, 1) == 1,
            exponent: get_bits(frame.high, EXPONENT_OFFSET, EXPONENT_WIDTH),
            mantissa: (u16::from(high) << 8) | u16::from(frame.low),
        })
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        let mut high = set_bits(0, SIGN_BIT, 1, self.negative as u8);
        high = set_bits(high, EXPONENT_OFFSET, EXPONENT_WIDTH, self.exponent);
        high = set_bits(high, 0, MANTISSA_HIGH_WIDTH, (self.mantissa >> 8) as u8);

        bytemuck::cast(Float16Frame {
            header: HEADER,
            high,
            low: self.mantissa as u8,
        })
    }

    /// Reconstructs `0.01 * m * 2^e`.
    pub fn to_f32(&self) -> f32 {
        RESOLUTION * self.signed_mantissa() as f32 * (1u32 << self.exponent) as f32
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    /// The 11-bit mantissa field as stored on the wire.
    pub fn mantissa(&self) -> u16 {
        self.mantissa
    }

    /// The mantissa with the sign folded back in, in `-2048..=2047`.
    pub fn signed_mantissa(&self) -> i32 {
        let mantissa = i32::from(self.mantissa);
        if self.negative {
            mantissa - SIGN_OFFSET
        } else {
            mantissa
        }
    }

    /// Smallest step representable at this exponent, `0.01 * 2^e`.
    pub fn resolution(&self) -> f32 {
        RESOLUTION * (1u32 << self.exponent) as f32
    }
}

impl From<f32> for Float16 {
    fn from(value: f32) -> Self {
        Self::encode(value)
    }
}

impl From<Float16> for f32 {
    fn from(value: Float16) -> Self {
        value.to_f32()
    }
}

/// Packs `value` into `[header, sign|exponent|mantissa-high, mantissa-low]`.
///
/// ```
/// use dpt_formats::pack_f16;
///
/// assert_eq!(pack_f16(21.0), [0x00, 0x0C, 0x1A]);
/// assert_eq!(pack_f16(-30.0), [0x00, 0x8A, 0x24]);
/// ```
pub fn pack_f16(value: f32) -> [u8; 3] {
    Float16::encode(value).to_bytes()
}

pub fn unpack_f16(data: &[u8]) -> Result<f32> {
    Float16::decode(data).map(|f| f.to_f32())
}
