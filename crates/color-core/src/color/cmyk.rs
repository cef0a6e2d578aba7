//! Print-oriented CMYK model

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// Cyan, magenta, yellow and key (black) as whole percentages (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan percent
    pub c: u8,
    /// Magenta percent
    pub m: u8,
    /// Yellow percent
    pub y: u8,
    /// Key (black) percent
    pub k: u8,
}

impl Cmyk {
    /// Create a CMYK color; each component is clamped to 0..=100.
    #[inline]
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            c: c.min(100),
            m: m.min(100),
            y: y.min(100),
            k: k.min(100),
        }
    }
}

#[inline]
fn percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        // Pure black would divide by zero below
        if rgb == Rgb::BLACK {
            return Self::new(0, 0, 0, 100);
        }

        let [r, g, b] = rgb.to_unit();
        let k = 1.0 - r.max(g).max(b);
        Self {
            c: percent((1.0 - r - k) / (1.0 - k)),
            m: percent((1.0 - g - k) / (1.0 - k)),
            y: percent((1.0 - b - k) / (1.0 - k)),
            k: percent(k),
        }
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        let k = 1.0 - cmyk.k.min(100) as f64 / 100.0;
        Rgb::from_unit(
            (1.0 - cmyk.c.min(100) as f64 / 100.0) * k,
            (1.0 - cmyk.m.min(100) as f64 / 100.0) * k,
            (1.0 - cmyk.y.min(100) as f64 / 100.0) * k,
        )
    }
}
