//! Relative dimming control (`3.007`).

use core::fmt;

use dpt_formats::{pack_b1u3, unpack_b1u3};

use crate::{DatapointValue, Result};

/// Direction flag plus a 3-bit step code.
///
/// A step of 0 means stop; larger codes request finer steps. Steps above 7
/// saturate to 7 when packed.
///
/// ```
/// use dpt_types::{ControlDimming, DatapointValue};
///
/// let up = ControlDimming { increase: true, step: 3 };
/// assert_eq!(up.pack(), [0b1011]);
/// assert_eq!(ControlDimming::unpack(&[0b1011])?, up);
/// # Ok::<(), dpt_types::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlDimming {
    pub increase: bool,
    pub step: u8,
}

impl ControlDimming {
    pub const MAX_STEP: u8 = 7;
}

impl DatapointValue for ControlDimming {
    const ID: &'static str = "3.007";
    type Frame = [u8; 1];

    fn pack(&self) -> Self::Frame {
        pack_b1u3(self.increase, self.step.min(Self::MAX_STEP))
    }

    fn unpack(data: &[u8]) -> Result<Self> {
        let (increase, step) = unpack_b1u3(data)?;
        Ok(Self { increase, step })
    }
}

impl fmt::Display for ControlDimming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 0 {
            return f.write_str("Break");
        }
        let direction = if self.increase { "Increase" } else { "Decrease" };
        write!(f, "{} {}", direction, self.step)
    }
}
