//! HWB (hue, whiteness, blackness) as used by CSS Color 4

use serde::{Deserialize, Serialize};

use super::hsl::{from_hue_chroma, hue_degrees};
use super::normalize_hue;
use super::rgb::Rgb;

/// Hue in degrees with whiteness and blackness in percent (0.0..=100.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hwb {
    /// Hue in degrees
    pub h: f64,
    /// Whiteness percent
    pub w: f64,
    /// Blackness percent
    pub b: f64,
}

impl Hwb {
    /// Create an HWB color. Hue wraps modulo 360, `w` and `b` are clamped.
    #[inline]
    pub fn new(h: f64, w: f64, b: f64) -> Self {
        Self {
            h: normalize_hue(h),
            w: w.clamp(0.0, 100.0),
            b: b.clamp(0.0, 100.0),
        }
    }
}

impl From<Rgb> for Hwb {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Self {
            h: hue_degrees(r, g, b, max, max - min),
            w: min * 100.0,
            b: (1.0 - max) * 100.0,
        }
    }
}

impl From<Hwb> for Rgb {
    /// Whiteness + blackness >= 100% normalizes to a gray.
    fn from(hwb: Hwb) -> Self {
        let w = hwb.w.clamp(0.0, 100.0) / 100.0;
        let b = hwb.b.clamp(0.0, 100.0) / 100.0;
        if w + b >= 1.0 {
            let gray = w / (w + b);
            return Rgb::from_unit(gray, gray, gray);
        }

        // Pure hue scaled into the remaining range, lifted by whiteness
        let v = 1.0 - b;
        let c = v - w;
        from_hue_chroma(hwb.h, c, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let red = Hwb::from(Rgb::new(255, 0, 0));
        assert_eq!((red.h, red.w, red.b), (0.0, 0.0, 0.0));

        let white = Hwb::from(Rgb::WHITE);
        assert_eq!((white.w, white.b), (100.0, 0.0));

        let black = Hwb::from(Rgb::BLACK);
        assert_eq!((black.w, black.b), (0.0, 100.0));
    }

    #[test]
    fn test_round_trip() {
        for rgb in [
            Rgb::new(139, 92, 246),
            Rgb::new(12, 200, 90),
            Rgb::new(255, 0, 128),
            Rgb::gray(77),
        ] {
            assert_eq!(Rgb::from(Hwb::from(rgb)), rgb);
        }
    }

    #[test]
    fn test_excess_whiteness_blackness_is_gray() {
        // 60 + 60 normalizes to 50/50: mid gray regardless of hue
        assert_eq!(Rgb::from(Hwb::new(120.0, 60.0, 60.0)), Rgb::gray(128));
        assert_eq!(Rgb::from(Hwb::new(0.0, 100.0, 0.0)), Rgb::WHITE);
    }
}
