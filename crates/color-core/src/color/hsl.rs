//! Cylindrical sRGB models: HSL and HSB (a.k.a. HSV)

use serde::{Deserialize, Serialize};

use super::normalize_hue;
use super::rgb::Rgb;

/// Hue, saturation and lightness.
///
/// `h` is in degrees (0.0..360.0), `s` and `l` in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Lightness (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. Hue wraps modulo 360, `s` and `l` are clamped.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }
}

/// Hue, saturation and brightness (value).
///
/// `h` is in degrees (0.0..360.0), `s` and `b` in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Brightness (0.0..=1.0)
    pub b: f64,
}

impl Hsb {
    /// Create an HSB color. Hue wraps modulo 360, `s` and `b` are clamped.
    #[inline]
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

/// Hue in degrees from normalized channels, given the max channel and chroma.
///
/// The red-max case adds a full turn (6 sextants) when green < blue.
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(sextant * 60.0)
}

/// Build an RGB color from hue, chroma and the per-channel offset `m`.
pub(crate) fn from_hue_chroma(h: f64, c: f64, m: f64) -> Rgb {
    let h = normalize_hue(h) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::from_unit(r + m, g + m, b + m)
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Self {
            h: hue_degrees(r, g, b, max, delta),
            s,
            l,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        from_hue_chroma(hsl.h, c, l - c / 2.0)
    }
}

impl From<Rgb> for Hsb {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        Self {
            h: hue_degrees(r, g, b, max, delta),
            s: if max == 0.0 { 0.0 } else { delta / max },
            b: max,
        }
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        let s = hsb.s.clamp(0.0, 1.0);
        let v = hsb.b.clamp(0.0, 1.0);
        let c = v * s;
        from_hue_chroma(hsb.h, c, v - c)
    }
}
