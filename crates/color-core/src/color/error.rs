//! Error types for color parsing.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or a non-hexadecimal character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Non-hexadecimal character encountered
    #[error("invalid hex character: {0:?}")]
    InvalidDigit(char),
}
