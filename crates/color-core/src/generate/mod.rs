//! Palette generation
//!
//! - [`generate_random_palette`]: golden-ratio hue stepping in Oklch
//! - [`generate_smart_palette`]: hue arcs and L/C bands per [`Mood`]
//! - [`generate_harmony`]: exact hue offsets in HSL
//! - [`shades`], [`mix_colors`] and the `adjust_*` helpers
//! - [`Gradient`]: sorted stops sampled with [`mix_colors`]
//!
//! Random operations take the generator as a parameter, so a seeded
//! [`rand::rngs::StdRng`] makes every palette reproducible.
//!
//! Locks are one `Option<Rgb>` per slot. A `Some` slot is returned as-is;
//! a lock slice shorter than the palette leaves the remaining slots free.

mod adjust;
mod gradient;
mod harmony;
mod mood;
mod random;

pub use adjust::{adjust_hue, adjust_lightness, adjust_saturation, mix_colors, shades};
pub use gradient::{Gradient, GradientStop};
pub use harmony::{generate_harmony, Harmony};
pub use mood::{generate_smart_palette, Mood, MoodProfile};
pub use random::{
    generate_random_palette, random_color, HueStepper, GOLDEN_ANGLE, GOLDEN_RATIO_CONJUGATE,
};

use crate::color::Rgb;

/// The locked color for slot `i`, if any.
#[inline]
pub(crate) fn locked(locks: &[Option<Rgb>], i: usize) -> Option<Rgb> {
    locks.get(i).copied().flatten()
}
