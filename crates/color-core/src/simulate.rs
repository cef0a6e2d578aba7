//! Color-vision-deficiency simulation
//!
//! Dichromacy is simulated in linear RGB with the single-plane projection
//! matrices of Viénot, Brettel & Mollon (1999) for protanopia and
//! deuteranopia, and the matching linear-RGB approximation for tritanopia.
//! Achromatopsia collapses each color to its relative luminance, written
//! directly into the 8-bit channels (pure red becomes `#363636`).
//!
//! # References
//!
//! F. Viénot, H. Brettel, J. D. Mollon, "Digital video colourmaps for
//! checking the legibility of displays by dichromats", Color Research &
//! Application 24(4), 1999.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{LinearRgb, Rgb};
use crate::error::ParseVariantError;

/// A simulated color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// L-cone (red) deficiency
    Protanopia,
    /// M-cone (green) deficiency
    Deuteranopia,
    /// S-cone (blue) deficiency
    Tritanopia,
    /// Total color blindness
    Achromatopsia,
}

const PROTANOPIA: [[f64; 3]; 3] = [
    [0.11238, 0.88762, 0.0],
    [0.11238, 0.88762, 0.0],
    [0.00401, -0.00401, 1.0],
];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.29275, 0.70725, 0.0],
    [0.29275, 0.70725, 0.0],
    [-0.02234, 0.02234, 1.0],
];

const TRITANOPIA: [[f64; 3]; 3] = [
    [1.0, 0.14461, -0.14461],
    [0.0, 0.85924, 0.14076],
    [0.0, 0.85924, 0.14076],
];

impl Deficiency {
    /// Every variant, in display order.
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        }
    }

    /// Linear-RGB projection matrix; `None` for achromatopsia.
    fn matrix(self) -> Option<&'static [[f64; 3]; 3]> {
        match self {
            Deficiency::Protanopia => Some(&PROTANOPIA),
            Deficiency::Deuteranopia => Some(&DEUTERANOPIA),
            Deficiency::Tritanopia => Some(&TRITANOPIA),
            Deficiency::Achromatopsia => None,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Deficiency::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVariantError::new("deficiency", s))
    }
}

/// Simulate how `rgb` appears to a viewer with the given deficiency.
///
/// # Example
/// ```
/// use color_core::{simulate_color_blind, Deficiency, Rgb};
///
/// let gray = simulate_color_blind(Rgb::new(255, 0, 0), Deficiency::Achromatopsia);
/// assert_eq!(gray.r, gray.g);
/// assert_eq!(gray.g, gray.b);
/// ```
pub fn simulate_color_blind(rgb: Rgb, deficiency: Deficiency) -> Rgb {
    let linear = LinearRgb::from(rgb);
    match deficiency.matrix() {
        // Projection can leave the unit cube near the gamut corners
        Some(matrix) => Rgb::from(linear.transform(matrix).clamped()),
        None => {
            let y = linear.luminance();
            Rgb::from_unit(y, y, y)
        }
    }
}

/// Element-wise [`simulate_color_blind`] over a palette.
pub fn simulate_palette(palette: &[Rgb], deficiency: Deficiency) -> Vec<Rgb> {
    palette
        .iter()
        .map(|&rgb| simulate_color_blind(rgb, deficiency))
        .collect()
}
