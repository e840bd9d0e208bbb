//! One-byte unsigned datapoints (`5.xxx`).
//!
//! Scaled types map `0..=MAX` linearly onto `0..=255`, truncating, so a
//! decoded value is within `MAX / 255` of what was packed.

use core::fmt;

use dpt_formats::{pack_u8, unpack_u8};

use crate::{DatapointValue, Result};

const RAW_MAX: f32 = u8::MAX as f32;

fn pack_scaled(value: f32, max: f32) -> [u8; 2] {
    pack_u8((value.clamp(0.0, max) * RAW_MAX / max) as u8)
}

fn unpack_scaled(data: &[u8], max: f32) -> Result<f32> {
    unpack_u8(data).map(|raw| f32::from(raw) * max / RAW_MAX)
}

macro_rules! scaled_datapoint {
    ($(#[$meta:meta])* $name:ident, $id:literal, $unit:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        pub struct $name(pub f32);

        impl $name {
            pub const MIN: f32 = 0.0;
            pub const MAX: f32 = $max;

            /// Quantization step of the byte encoding.
            pub const STEP: f32 = Self::MAX / RAW_MAX;
        }

        impl DatapointValue for $name {
            const ID: &'static str = $id;
            const UNIT: &'static str = $unit;
            type Frame = [u8; 2];

            fn pack(&self) -> Self::Frame {
                pack_scaled(self.0, Self::MAX)
            }

            fn unpack(data: &[u8]) -> Result<Self> {
                unpack_scaled(data, Self::MAX).map(Self)
            }
        }

        impl From<f32> for $name {
            fn from(value: f32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit)
            }
        }
    };
}

scaled_datapoint!(
    /// 5.001, percentage.
    Scaling, "5.001", "%", 100.0
);

scaled_datapoint!(
    /// 5.003, angle in degrees.
    Angle, "5.003", "°", 360.0
);

datapoint!(
    /// 5.010, raw counter value.
    ValueU8(u8), "5.010", "pulses", [u8; 2], pack_u8, unpack_u8,
    derive(Eq, Hash, PartialOrd, Ord)
);

impl ValueU8 {
    fn clamped(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ValueU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pulses", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_endpoints() {
        assert_eq!(Scaling(0.0).pack(), [0x00, 0x00]);
        assert_eq!(Scaling(100.0).pack(), [0x00, 0xFF]);
        assert_eq!(Scaling::unpack(&[0x00, 0xFF]).unwrap(), Scaling(100.0));
    }

    #[test]
    fn scaling_truncates() {
        assert_eq!(Scaling(50.0).pack(), [0x00, 127]);
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(Scaling(150.0).pack(), Scaling(100.0).pack());
        assert_eq!(Scaling(-5.0).pack(), Scaling(0.0).pack());
    }

    #[test]
    fn angle_roundtrip_within_step() {
        for value in [0.0, 45.0, 90.0, 180.0, 359.0] {
            let decoded = Angle::unpack(&Angle(value).pack()).unwrap();
            assert!((decoded.0 - value).abs() <= Angle::STEP, "{}", value);
        }
        assert_eq!(Angle(360.0).pack(), [0x00, 0xFF]);
    }

    #[test]
    fn value_u8_is_unscaled() {
        assert_eq!(ValueU8(42).pack(), [0x00, 42]);
        assert_eq!(ValueU8::unpack(&[0x00, 200]).unwrap(), ValueU8(200));
        assert_eq!(ValueU8(7).to_string(), "7 pulses");
    }

    #[test]
    fn display() {
        assert_eq!(Scaling(12.5).to_string(), "12.50 %");
        assert_eq!(Angle(90.0).to_string(), "90.00 °");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Scaling::unpack(&[0xFF]).is_err());
        assert!(ValueU8::unpack(&[0, 1, 2]).is_err());
    }
}
