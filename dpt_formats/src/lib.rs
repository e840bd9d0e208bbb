//! # dpt_formats
//!
//! Wire formats shared by bus datapoint types.
//!
//! Every datapoint type reduces to one of a handful of fixed-length layouts.
//! This crate packs semantic values into those layouts and unpacks them again.
//! Packing is total (numeric inputs saturate); unpacking fails only when the
//! input does not have the layout's exact length.
//!
//! | Layout | Length | Functions |
//! |---|---|---|
//! | B1 | 1 | [`pack_b1`], [`unpack_b1`] |
//! | B1U3 | 1 | [`pack_b1u3`], [`unpack_b1u3`] |
//! | U8 | 2 | [`pack_u8`], [`unpack_u8`] |
//! | U32 | 5 | [`pack_u32`], [`unpack_u32`] |
//! | V32 | 5 | [`pack_v32`], [`unpack_v32`] |
//! | F16 | 3 | [`pack_f16`], [`unpack_f16`], [`Float16`] |
//!
//! ## Examples
//!
//! ```
//! use dpt_formats::{pack_f16, unpack_f16, FormatError};
//!
//! let frame = pack_f16(21.5);
//! let value = unpack_f16(&frame)?;
//! assert!((value - 21.5).abs() <= 0.02);
//!
//! assert!(matches!(
//!     unpack_f16(&frame[..2]),
//!     Err(FormatError::InvalidLength { expected: 3, actual: 2 })
//! ));
//! # Ok::<(), FormatError>(())
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

mod bit_ops;
pub mod boolean;
pub mod error;
pub mod float16;
pub mod frame;
pub mod integer;

pub use boolean::{pack_b1, pack_b1u3, unpack_b1, unpack_b1u3};
pub use error::{FormatError, Result};
pub use float16::{pack_f16, unpack_f16, Float16};
pub use integer::{pack_u32, pack_u8, pack_v32, unpack_u32, unpack_u8, unpack_v32};
