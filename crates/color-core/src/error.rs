//! Unified error type for the color-core public API.
//!
//! Numeric operations never fail; errors only arise when turning text or
//! raw bytes into the crate's types. [`ColorError`] wraps them all for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::color::ParseColorError;

/// A name that matches none of an enum's variants (mood, harmony, deficiency).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseVariantError {
    /// What was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Error type for pixel buffer validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    /// Only RGB (3) and RGBA (4) buffers are supported
    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
    /// Byte length does not match width * height * channels
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// width * height * channels
        expected: usize,
        /// Length of the provided buffer
        actual: usize,
    },
}

/// Unified error type for the color-core public API.
///
/// # Example
///
/// ```
/// use color_core::{ColorError, Deficiency, Rgb};
///
/// fn parse(hex: &str, kind: &str) -> Result<(Rgb, Deficiency), ColorError> {
///     Ok((hex.parse()?, kind.parse()?))
/// }
///
/// assert!(parse("#FF0000", "tritanopia").is_ok());
/// assert!(parse("#FF0000", "sepia").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Invalid hex color string
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Unknown variant name
    #[error(transparent)]
    ParseVariant(#[from] ParseVariantError),
    /// Malformed pixel buffer
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}
