//! WCAG 2.x contrast evaluation and accessible-color suggestions
//!
//! All luminance math goes through [`relative_luminance`], the same
//! function the achromatopsia simulation uses.

use serde::{Deserialize, Serialize};

use crate::color::{relative_luminance, Hsl, Rgb};

/// Minimum ratio for normal text at level AA (and large text at AAA).
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Which WCAG success criteria a contrast ratio satisfies.
///
/// A record rather than an enum: one pair can pass several levels at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagLevel {
    /// Normal text, level AA (>= 4.5)
    pub aa: bool,
    /// Large text, level AA (>= 3.0)
    pub aa_large: bool,
    /// Normal text, level AAA (>= 7.0)
    pub aaa: bool,
    /// Large text, level AAA (>= 4.5)
    pub aaa_large: bool,
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0.
///
/// Symmetric in its arguments.
///
/// # Example
/// ```
/// use color_core::{contrast_ratio, Rgb};
/// assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Classify a contrast ratio against the four WCAG thresholds.
pub fn wcag_level(ratio: f64) -> WcagLevel {
    WcagLevel {
        aa: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Black or white for a background whose lightness search found nothing.
fn extreme_for(bg: Rgb) -> Rgb {
    if relative_luminance(bg) > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Find the darkest variant of `fg` that reaches `target_ratio` against `bg`.
///
/// Hue and saturation of `fg` are held fixed while HSL lightness is scanned
/// from 0% to 100% in whole-percent steps; the first passing lightness wins.
/// Because 0% lightness is black, a light background usually yields a very
/// dark shade. Use [`suggest_nearest_accessible_color`] to stay close to
/// the original lightness instead.
///
/// Falls back to black (light backgrounds) or white (dark backgrounds)
/// when no lightness passes.
pub fn suggest_accessible_color(fg: Rgb, bg: Rgb, target_ratio: f64) -> Rgb {
    let hsl = Hsl::from(fg);
    for step in 0..=100u32 {
        let candidate = Rgb::from(Hsl::new(hsl.h, hsl.s, step as f64 / 100.0));
        if contrast_ratio(candidate, bg) >= target_ratio {
            return candidate;
        }
    }

    tracing::debug!(
        fg = %fg,
        bg = %bg,
        target_ratio,
        "no lightness reaches target, falling back to black/white"
    );
    extreme_for(bg)
}

/// Find the variant of `fg` closest in lightness that reaches `target_ratio`.
///
/// Searches outward from the original lightness in whole-percent steps,
/// trying the darker candidate before the lighter one at equal distance.
/// Returns `fg` unchanged when it already passes, and falls back to
/// black/white exactly like [`suggest_accessible_color`].
pub fn suggest_nearest_accessible_color(fg: Rgb, bg: Rgb, target_ratio: f64) -> Rgb {
    if contrast_ratio(fg, bg) >= target_ratio {
        return fg;
    }

    let hsl = Hsl::from(fg);
    let origin = (hsl.l * 100.0).round() as i32;
    for distance in 1..=100 {
        for step in [origin - distance, origin + distance] {
            if !(0..=100).contains(&step) {
                continue;
            }
            let candidate = Rgb::from(Hsl::new(hsl.h, hsl.s, step as f64 / 100.0));
            if contrast_ratio(candidate, bg) >= target_ratio {
                return candidate;
            }
        }
    }

    extreme_for(bg)
}

/// Black or white, whichever contrasts more with `bg`.
///
/// # Example
/// ```
/// use color_core::{readable_text_color, Rgb};
/// assert_eq!(readable_text_color("#FFEB3B".parse().unwrap()), Rgb::BLACK);
/// assert_eq!(readable_text_color("#1E1B4B".parse().unwrap()), Rgb::WHITE);
/// ```
pub fn readable_text_color(bg: Rgb) -> Rgb {
    if contrast_ratio(Rgb::BLACK, bg) >= contrast_ratio(Rgb::WHITE, bg) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
