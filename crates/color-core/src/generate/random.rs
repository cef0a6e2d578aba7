//! Random palettes with golden-ratio hue spacing

use rand::Rng;

use super::locked;
use crate::color::{normalize_hue, Oklch, Rgb};

/// The golden ratio conjugate, (sqrt(5) - 1) / 2.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// Hue step between consecutive swatches: 360 * conjugate, ~222.49 degrees.
pub const GOLDEN_ANGLE: f64 = 360.0 * GOLDEN_RATIO_CONJUGATE;

/// Band the per-palette base lightness is drawn from (Oklch L).
const BASE_LIGHTNESS: (f64, f64) = (0.55, 0.75);
/// Band the per-palette base chroma is drawn from (Oklch C).
const BASE_CHROMA: (f64, f64) = (0.10, 0.22);
/// Per-swatch jitter around the base values.
const LIGHTNESS_JITTER: f64 = 0.08;
const CHROMA_JITTER: f64 = 0.04;
/// Hard bounds after jitter.
const LIGHTNESS_BOUNDS: (f64, f64) = (0.4, 0.9);
const CHROMA_BOUNDS: (f64, f64) = (0.05, 0.25);

/// Infinite sequence of hues spaced by [`GOLDEN_ANGLE`].
///
/// No prefix of the sequence clusters, so hues stay well spread whatever
/// the eventual palette length.
///
/// # Example
/// ```
/// use color_core::generate::HueStepper;
///
/// let hues: Vec<f64> = HueStepper::new(0.0).take(3).collect();
/// assert_eq!(hues[0], 0.0);
/// assert!((hues[1] - 222.4922).abs() < 1e-3);
/// assert!((hues[2] - 84.9845).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct HueStepper {
    next: f64,
}

impl HueStepper {
    /// Start the sequence at `start` degrees.
    pub fn new(start: f64) -> Self {
        Self {
            next: normalize_hue(start),
        }
    }
}

impl Iterator for HueStepper {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let hue = self.next;
        self.next = normalize_hue(hue + GOLDEN_ANGLE);
        Some(hue)
    }
}

/// Oklch targets for a random palette, one per slot.
///
/// Jitter is drawn for every slot, so the values of one slot never depend
/// on which other slots end up locked.
pub(crate) fn random_targets<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Oklch> {
    let base_l = rng.gen_range(BASE_LIGHTNESS.0..=BASE_LIGHTNESS.1);
    let base_c = rng.gen_range(BASE_CHROMA.0..=BASE_CHROMA.1);
    let hues = HueStepper::new(rng.gen_range(0.0..360.0));

    hues.take(count)
        .map(|hue| {
            let l = (base_l + rng.gen_range(-LIGHTNESS_JITTER..=LIGHTNESS_JITTER))
                .clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1);
            let c = (base_c + rng.gen_range(-CHROMA_JITTER..=CHROMA_JITTER))
                .clamp(CHROMA_BOUNDS.0, CHROMA_BOUNDS.1);
            Oklch::new(l, c, hue)
        })
        .collect()
}

/// Generate `count` colors with golden-ratio hue spacing in Oklch.
///
/// Locked slots (`Some` in `locks`) are returned unchanged. The hue stepper
/// still advances through them, so locking a slot does not shift the hues
/// of the others.
///
/// # Example
/// ```
/// use color_core::generate::generate_random_palette;
/// use color_core::Rgb;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let brand = Rgb::new(139, 92, 246);
/// let palette = generate_random_palette(&mut rng, 5, &[None, Some(brand)]);
/// assert_eq!(palette.len(), 5);
/// assert_eq!(palette[1], brand);
/// ```
pub fn generate_random_palette<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    locks: &[Option<Rgb>],
) -> Vec<Rgb> {
    random_targets(rng, count)
        .into_iter()
        .enumerate()
        .map(|(i, target)| locked(locks, i).unwrap_or_else(|| Rgb::from(target)))
        .collect()
}

/// A single random color from the same bands as [`generate_random_palette`].
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let target = random_targets(rng, 1)[0];
    Rgb::from(target)
}
