//! Color harmonies: fixed hue offsets from a base color in HSL

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};
use crate::error::ParseVariantError;

/// Lightness offsets of the monochromatic ladder, darkest first.
const MONOCHROMATIC_STEPS: [f64; 5] = [-0.30, -0.15, 0.0, 0.15, 0.30];
/// Lightness bounds of the monochromatic ladder.
const MONOCHROMATIC_BOUNDS: (f64, f64) = (0.15, 0.95);

/// Geometric relationship between palette hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    /// Base and +180
    Complementary,
    /// Base, +30 and -30
    Analogous,
    /// Base, +120 and +240
    Triadic,
    /// Base, +150 and +210
    SplitComplementary,
    /// Base, +90, +180 and +270
    Tetradic,
    /// Five lightness steps around the base, same hue and saturation
    Monochromatic,
}

impl Harmony {
    /// Every harmony, in display order.
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::SplitComplementary,
        Harmony::Tetradic,
        Harmony::Monochromatic,
    ];

    /// Kebab-case name as accepted by [`FromStr`](std::str::FromStr).
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Tetradic => "tetradic",
            Harmony::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees, base first. Empty for [`Harmony::Monochromatic`].
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            Harmony::Complementary => &[0.0, 180.0],
            Harmony::Analogous => &[0.0, 30.0, -30.0],
            Harmony::Triadic => &[0.0, 120.0, 240.0],
            Harmony::SplitComplementary => &[0.0, 150.0, 210.0],
            Harmony::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Harmony::Monochromatic => &[],
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ParseVariantError;

    /// Case-insensitive; `split_complementary` is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Harmony::ALL
            .into_iter()
            .find(|h| h.name() == wanted)
            .ok_or_else(|| ParseVariantError::new("harmony", s))
    }
}

/// Colors in `kind` relation to `base`.
///
/// Hue harmonies return `base` unchanged first, followed by the offset hues
/// with saturation and lightness held fixed. The monochromatic ladder runs
/// dark to light with `base` itself as the middle rung. Only the four
/// derived rungs are clamped to `[0.15, 0.95]` lightness, so a base outside
/// that band is still returned as is.
///
/// # Example
/// ```
/// use color_core::generate::{generate_harmony, Harmony};
/// use color_core::Rgb;
///
/// let red = Rgb::new(255, 0, 0);
/// let pair = generate_harmony(red, Harmony::Complementary);
/// assert_eq!(pair, vec![red, Rgb::new(0, 255, 255)]);
/// ```
pub fn generate_harmony(base: Rgb, kind: Harmony) -> Vec<Rgb> {
    let hsl = Hsl::from(base);

    if kind == Harmony::Monochromatic {
        return MONOCHROMATIC_STEPS
            .iter()
            .map(|&delta| {
                if delta == 0.0 {
                    return base;
                }
                let l = (hsl.l + delta).clamp(MONOCHROMATIC_BOUNDS.0, MONOCHROMATIC_BOUNDS.1);
                Rgb::from(Hsl::new(hsl.h, hsl.s, l))
            })
            .collect();
    }

    kind.hue_offsets()
        .iter()
        .map(|&offset| {
            if offset == 0.0 {
                base
            } else {
                Rgb::from(Hsl::new(hsl.h + offset, hsl.s, hsl.l))
            }
        })
        .collect()
}
