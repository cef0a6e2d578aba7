//! Oklab perceptual color space and its polar form, Oklch
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use serde::{Deserialize, Serialize};

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::normalize_hue;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab.
    ///
    /// Uses the updated 2021-01-25 matrices from Björn Ottosson.
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to LMS (M1 matrix)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS to Lab (M2 matrix)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (reverse nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness (same as Oklab L, 0.0..=1.0)
/// - `c`: Chroma, sqrt(a^2 + b^2); roughly 0.0..=0.4 inside sRGB
/// - `h`: Hue angle in degrees, 0.0..360.0
///
/// For achromatic colors hue is undefined; the conversion yields 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch color. Hue wraps into 0.0..360.0.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }
}

impl From<Oklab> for Oklch {
    /// Convert from Oklab to Oklch (Cartesian to polar).
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        // atan2(0, 0) is 0.0, harmless for zero chroma
        let h = lab.b.atan2(lab.a).to_degrees();
        Self::new(lab.l, c, h)
    }
}

impl From<Oklch> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        Oklch::from(Oklab::from(LinearRgb::from(rgb)))
    }
}

impl From<Oklch> for Rgb {
    /// Out-of-gamut colors are clamped per channel during gamma encoding.
    fn from(lch: Oklch) -> Self {
        Rgb::from(LinearRgb::from(Oklab::from(lch)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE_TOLERANCE: f64 = 1e-5;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.2, 0.7, 0.1),
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let theirs: PaletteOklab<f64> = LinSrgb::new(r, g, b).into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_oklch_round_trip_within_one_lsb() {
        let mut max_error = 0i32;
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let original = Rgb::new(r, g, b);
                    let back = Rgb::from(Oklch::from(original));
                    for (x, y) in original.to_bytes().iter().zip(back.to_bytes()) {
                        max_error = max_error.max((*x as i32 - y as i32).abs());
                    }
                }
            }
        }
        assert!(max_error <= 1, "max OKLCH round-trip error {max_error} LSB");
    }

    #[test]
    fn test_known_values() {
        let white = Oklch::from(Rgb::WHITE);
        assert!(approx_eq(white.l, 1.0, 1e-6), "white L = {}", white.l);
        assert!(white.c < 1e-6);

        let black = Oklch::from(Rgb::BLACK);
        assert!(approx_eq(black.l, 0.0, 1e-9));
        assert!(black.c < 1e-9);

        // sRGB red: L ~0.628, C ~0.258, h ~29.2 degrees
        let red = Oklch::from(Rgb::new(255, 0, 0));
        assert!(approx_eq(red.l, 0.628, 1e-3), "red L = {}", red.l);
        assert!(approx_eq(red.c, 0.258, 1e-3), "red C = {}", red.c);
        assert!(approx_eq(red.h, 29.23, 0.05), "red h = {}", red.h);
    }

    #[test]
    fn test_hue_is_normalized() {
        // Blue has a negative atan2 angle: must come out in 0..360
        let blue = Oklch::from(Rgb::new(0, 0, 255));
        assert!((0.0..360.0).contains(&blue.h), "blue h = {}", blue.h);
        assert!(approx_eq(blue.h, 264.05, 0.05), "blue h = {}", blue.h);

        assert!(approx_eq(Oklch::new(0.5, 0.1, -90.0).h, 270.0, 1e-9));
        assert!(approx_eq(Oklch::new(0.5, 0.1, 720.0).h, 0.0, 1e-9));
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        // Chroma far beyond the sRGB gamut: negative linear red and blue
        // clamp to 0 instead of wrapping
        let lab = Oklab::from(Oklch::new(0.7, 0.6, 140.0));
        let linear = LinearRgb::from(lab);
        assert!(linear.r < 0.0 && linear.b < 0.0);
        assert_eq!(Rgb::from(Oklch::new(0.7, 0.6, 140.0)), Rgb::new(0, 219, 0));
        assert_eq!(Rgb::from(Oklch::new(1.5, 0.0, 0.0)), Rgb::WHITE);
        assert_eq!(Rgb::from(Oklch::new(-0.2, 0.0, 0.0)), Rgb::BLACK);
    }

    #[test]
    fn test_achromatic_no_nan() {
        let gray = Oklch::from(Rgb::GRAY);
        assert!(!gray.h.is_nan());
        assert!(gray.c < 1e-6);
    }
}
