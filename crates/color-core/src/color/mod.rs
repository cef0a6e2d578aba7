//! Color types and conversion utilities
//!
//! Every model is a small `Copy` value type; conversions are `From` impls
//! routed through [`Rgb`].
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit gamma-encoded sRGB, the interchange type (hex strings)
//! - [`LinearRgb`]: linear light, for matrix transforms and luminance
//! - [`Oklab`] / [`Oklch`]: perceptually uniform, for palette generation
//! - [`Hsl`], [`Hsb`], [`Hwb`]: cylindrical sRGB models for harmonies and UI
//! - [`Cmyk`]: print percentages
//!
//! # Example
//!
//! ```
//! use color_core::{Hsl, Oklch, Rgb};
//!
//! let violet: Rgb = "#8B5CF6".parse().unwrap();
//! let hsl = Hsl::from(violet);
//! let lch = Oklch::from(violet);
//!
//! assert_eq!(Rgb::from(hsl), violet);
//! assert_eq!(Rgb::from(lch), violet);
//! ```

mod cmyk;
mod error;
mod hsl;
mod hwb;
mod linear_rgb;
mod lut;
mod oklab;
mod rgb;

pub use cmyk::Cmyk;
pub use error::ParseColorError;
pub use hsl::{Hsb, Hsl};
pub use hwb::Hwb;
pub use linear_rgb::{relative_luminance, LinearRgb, LUMINANCE_WEIGHTS};
pub use oklab::{Oklab, Oklch};
pub use rgb::{is_valid_hex, Rgb};

/// Wrap a hue angle into 0.0..360.0.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }
}
