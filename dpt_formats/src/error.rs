#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised while decoding a wire frame.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The byte sequence does not have the exact length of the layout.
    #[cfg_attr(
        feature = "std",
        error("invalid length: expected {expected} bytes, got {actual}")
    )]
    InvalidLength { expected: usize, actual: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, FormatError>;
