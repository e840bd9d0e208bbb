//! # dpt_types
//!
//! Named datapoint types on top of the shared [`dpt_formats`] layouts.
//!
//! Each type is a thin wrapper that fixes an identifier, a unit and a
//! semantic range, and delegates the byte work to one layout:
//!
//! - `1.xxx` booleans: [`Switch`], [`Bool`], [`Enable`], [`UpDown`],
//!   [`OpenClose`], [`Start`]
//! - `3.007` dimming control: [`ControlDimming`]
//! - `5.xxx` unsigned bytes: [`Scaling`], [`Angle`], [`ValueU8`]
//! - `9.xxx` 16-bit floats: [`Temperature`], [`Illuminance`], [`WindSpeed`],
//!   [`Humidity`]
//! - `12.001` / `13.xxx` 32-bit counters: [`ValueCounter`], [`CounterPulses`],
//!   [`FlowRate`] and the energy types
//!
//! ## Examples
//!
//! ```
//! use dpt_types::{DatapointValue, Temperature};
//!
//! let frame = Temperature(21.0).pack();
//! assert_eq!(frame, [0x00, 0x0C, 0x1A]);
//!
//! let decoded = Temperature::unpack(&frame)?;
//! assert_eq!(decoded.to_string(), "21.00 °C");
//! # Ok::<(), dpt_types::FormatError>(())
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

#[macro_use]
mod macros;

pub mod control;
pub mod counter;
pub mod float;
pub mod switching;
pub mod unsigned;

pub use dpt_formats::{FormatError, Result};

pub use control::ControlDimming;
pub use counter::{
    ActiveEnergy, ActiveEnergyKwh, ApparentEnergy, ApparentEnergyKvah, CounterPulses, FlowRate,
    ReactiveEnergy, ReactiveEnergyKvarh, ValueCounter,
};
pub use float::{Humidity, Illuminance, Temperature, WindSpeed};
pub use switching::{Bool, Enable, OpenClose, Start, Switch, UpDown};
pub use unsigned::{Angle, Scaling, ValueU8};

/// A semantic value with a fixed wire layout.
///
/// Packing never fails: values outside the type's range saturate. Unpacking
/// only checks the frame length; a peer's out-of-range value decodes as-is.
pub trait DatapointValue: Sized {
    /// Datapoint identifier, e.g. `"9.001"`.
    const ID: &'static str;

    /// Unit symbol, empty when the value is unitless.
    const UNIT: &'static str = "";

    /// Fixed-length wire representation.
    type Frame: AsRef<[u8]>;

    fn pack(&self) -> Self::Frame;

    /// # Errors
    ///
    /// Returns [`FormatError::InvalidLength`] if `data` does not have the
    /// layout's exact length.
    fn unpack(data: &[u8]) -> Result<Self>;
}
