//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Matrix transforms (OKLab, dichromacy simulation) and luminance are only
//! meaningful here.

use super::lut::{linear_to_srgb, srgb8_to_linear};
use super::rgb::Rgb;

/// WCAG / Rec. 709 luminance weights for linear R, G and B.
///
/// The only copy of these constants in the crate: contrast evaluation and
/// the achromatopsia simulation both go through [`LinearRgb::luminance`].
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power.
/// They are typically in the range 0.0..=1.0, but may exceed it after a
/// matrix transform; conversion back to [`Rgb`] clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance: weighted sum of the linear channels.
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMINANCE_WEIGHTS[0] * self.r + LUMINANCE_WEIGHTS[1] * self.g + LUMINANCE_WEIGHTS[2] * self.b
    }

    /// Apply a row-major 3x3 matrix to the channel vector.
    #[inline]
    pub fn transform(self, m: &[[f64; 3]; 3]) -> Self {
        Self {
            r: m[0][0] * self.r + m[0][1] * self.g + m[0][2] * self.b,
            g: m[1][0] * self.r + m[1][1] * self.g + m[1][2] * self.b,
            b: m[2][0] * self.r + m[2][1] * self.g + m[2][2] * self.b,
        }
    }

    /// Clamp every channel to 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl From<Rgb> for LinearRgb {
    /// Gamma-decode through the shared lookup table.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(rgb.r),
            g: srgb8_to_linear(rgb.g),
            b: srgb8_to_linear(rgb.b),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Gamma-encode, then round and clamp to 8 bits.
    ///
    /// Out-of-gamut channels are clamped before encoding, never wrapped.
    fn from(linear: LinearRgb) -> Self {
        Rgb::from_unit(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

/// WCAG relative luminance of an sRGB color (0.0 for black, 1.0 for white).
///
/// # Example
/// ```
/// use color_core::{relative_luminance, Rgb};
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
/// ```
pub fn relative_luminance(rgb: Rgb) -> f64 {
    LinearRgb::from(rgb).luminance()
}
