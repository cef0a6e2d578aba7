use std::path::PathBuf;

use color_core::PixelBufferError;
use thiserror::Error;

/// Failures at the CLI boundary: files, image decoding and argument syntax.
///
/// The color engine itself never fails on numeric input; everything here
/// comes from turning outside data into engine types.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {0:?}")]
    UnsupportedPng(png::ColorType),

    #[error("Pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),

    #[error("Invalid argument {input:?}: {reason}")]
    InvalidArgument { input: String, reason: String },
}

impl CliError {
    pub(crate) fn invalid_argument(input: &str, reason: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("3=#GGG", "invalid hex color");
        assert_eq!(err.to_string(), "Invalid argument \"3=#GGG\": invalid hex color");

        let err = CliError::from(PixelBufferError::UnsupportedChannels(2));
        assert_eq!(
            err.to_string(),
            "Pixel buffer error: unsupported channel count: 2 (expected 3 or 4)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
