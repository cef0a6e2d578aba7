//! Mood-constrained palettes
//!
//! Each [`Mood`] is a declarative [`MoodProfile`]: a hue arc plus lightness
//! and chroma bands in Oklch. Generation spreads hues evenly over the arc
//! and draws lightness and chroma uniformly inside the bands.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locked;
use super::random::generate_random_palette;
use crate::color::{normalize_hue, Oklch, Rgb};
use crate::error::ParseVariantError;

/// Fraction of one hue bucket a swatch may drift from the bucket center.
const HUE_JITTER: f64 = 0.25;

/// Constraint record for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodProfile {
    /// Hue arc `(start, end)` in degrees
    pub hue: (f64, f64),
    /// The arc runs from `start` past 360 to `end`
    pub wraps: bool,
    /// Oklch lightness band
    pub lightness: (f64, f64),
    /// Oklch chroma band
    pub chroma: (f64, f64),
}

impl MoodProfile {
    /// Angular length of the hue arc in degrees.
    pub fn hue_span(&self) -> f64 {
        if self.wraps {
            self.hue.1 + 360.0 - self.hue.0
        } else {
            self.hue.1 - self.hue.0
        }
    }

    /// Whether `hue` lies on the arc (inclusive).
    pub fn contains_hue(&self, hue: f64) -> bool {
        let offset = normalize_hue(hue - self.hue.0);
        offset <= self.hue_span() || self.hue_span() >= 360.0
    }
}

/// Named palette moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Pastel,
    Vibrant,
    Dark,
    Earthy,
    Ocean,
    Sunset,
    Forest,
    Neon,
    Warm,
    Cool,
    /// Grays only: zero chroma, lightness laddered across the band
    Monochrome,
}

impl Mood {
    /// Every mood, in display order.
    pub const ALL: [Mood; 11] = [
        Mood::Pastel,
        Mood::Vibrant,
        Mood::Dark,
        Mood::Earthy,
        Mood::Ocean,
        Mood::Sunset,
        Mood::Forest,
        Mood::Neon,
        Mood::Warm,
        Mood::Cool,
        Mood::Monochrome,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Mood::Pastel => "pastel",
            Mood::Vibrant => "vibrant",
            Mood::Dark => "dark",
            Mood::Earthy => "earthy",
            Mood::Ocean => "ocean",
            Mood::Sunset => "sunset",
            Mood::Forest => "forest",
            Mood::Neon => "neon",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
            Mood::Monochrome => "monochrome",
        }
    }

    /// The constraint record for this mood.
    pub fn profile(self) -> MoodProfile {
        let (hue, wraps, lightness, chroma) = match self {
            Mood::Pastel => ((0.0, 360.0), false, (0.82, 0.92), (0.04, 0.09)),
            Mood::Vibrant => ((0.0, 360.0), false, (0.60, 0.75), (0.17, 0.25)),
            Mood::Dark => ((0.0, 360.0), false, (0.22, 0.40), (0.05, 0.14)),
            Mood::Earthy => ((30.0, 100.0), false, (0.40, 0.65), (0.05, 0.12)),
            Mood::Ocean => ((180.0, 260.0), false, (0.45, 0.80), (0.07, 0.16)),
            Mood::Sunset => ((330.0, 60.0), true, (0.55, 0.80), (0.12, 0.20)),
            Mood::Forest => ((100.0, 160.0), false, (0.35, 0.65), (0.07, 0.16)),
            Mood::Neon => ((0.0, 360.0), false, (0.75, 0.90), (0.22, 0.32)),
            Mood::Warm => ((340.0, 70.0), true, (0.55, 0.80), (0.10, 0.20)),
            Mood::Cool => ((170.0, 290.0), false, (0.50, 0.80), (0.08, 0.16)),
            Mood::Monochrome => ((0.0, 360.0), false, (0.20, 0.90), (0.0, 0.0)),
        };
        MoodProfile {
            hue,
            wraps,
            lightness,
            chroma,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVariantError::new("mood", s))
    }
}

/// Oklch targets for a mood palette, one per slot.
pub(crate) fn mood_targets<R: Rng + ?Sized>(rng: &mut R, count: usize, mood: Mood) -> Vec<Oklch> {
    let profile = mood.profile();
    let (l_lo, l_hi) = profile.lightness;

    if mood == Mood::Monochrome {
        let hue = rng.gen_range(0.0..360.0);
        let last = count.saturating_sub(1).max(1) as f64;
        return (0..count)
            .map(|i| Oklch::new(l_lo + (l_hi - l_lo) * i as f64 / last, 0.0, hue))
            .collect();
    }

    let bucket = profile.hue_span() / count as f64;
    (0..count)
        .map(|i| {
            let jitter = rng.gen_range(-HUE_JITTER..=HUE_JITTER) * bucket;
            let hue = profile.hue.0 + bucket * (i as f64 + 0.5) + jitter;
            let l = rng.gen_range(l_lo..=l_hi);
            let c = rng.gen_range(profile.chroma.0..=profile.chroma.1);
            Oklch::new(l, c, hue)
        })
        .collect()
}

/// Generate `count` colors constrained by `mood`.
///
/// `None` and counts below 2 fall back to [`generate_random_palette`].
/// Locked slots are returned unchanged.
///
/// # Example
/// ```
/// use color_core::generate::{generate_smart_palette, Mood};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let grays = generate_smart_palette(&mut rng, 5, Some(Mood::Monochrome), &[]);
/// assert!(grays.iter().all(|c| c.r == c.g && c.g == c.b));
/// ```
pub fn generate_smart_palette<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    mood: Option<Mood>,
    locks: &[Option<Rgb>],
) -> Vec<Rgb> {
    let mood = match mood {
        Some(mood) if count >= 2 => mood,
        _ => {
            tracing::debug!(?mood, count, "falling back to random palette");
            return generate_random_palette(rng, count, locks);
        }
    };

    mood_targets(rng, count, mood)
        .into_iter()
        .enumerate()
        .map(|(i, target)| locked(locks, i).unwrap_or_else(|| Rgb::from(target)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_targets_respect_profile() {
        let mut rng = StdRng::seed_from_u64(8);
        for mood in Mood::ALL {
            let profile = mood.profile();
            for count in [2, 5, 10] {
                for t in mood_targets(&mut rng, count, mood) {
                    assert!(profile.contains_hue(t.h), "{mood}: hue {}", t.h);
                    assert!(
                        t.l >= profile.lightness.0 - 1e-12 && t.l <= profile.lightness.1 + 1e-12,
                        "{mood}: L {}",
                        t.l
                    );
                    assert!(
                        t.c >= profile.chroma.0 && t.c <= profile.chroma.1,
                        "{mood}: C {}",
                        t.c
                    );
                }
            }
        }
    }

    #[test]
    fn test_wrapping_arc() {
        let sunset = Mood::Sunset.profile();
        assert_eq!(sunset.hue_span(), 90.0);
        assert!(sunset.contains_hue(350.0));
        assert!(sunset.contains_hue(10.0));
        assert!(!sunset.contains_hue(180.0));

        // Hues land on both sides of 0 degrees
        let mut rng = StdRng::seed_from_u64(2);
        let hues: Vec<f64> = mood_targets(&mut rng, 6, Mood::Sunset)
            .iter()
            .map(|t| t.h)
            .collect();
        assert!(hues.iter().any(|&h| h > 300.0));
        assert!(hues.iter().any(|&h| h < 60.0));
    }

    #[test]
    fn test_hues_are_evenly_bucketed() {
        let mut rng = StdRng::seed_from_u64(4);
        let count = 4;
        let targets = mood_targets(&mut rng, count, Mood::Ocean);
        let bucket = Mood::Ocean.profile().hue_span() / count as f64;
        for (i, t) in targets.iter().enumerate() {
            let center = 180.0 + bucket * (i as f64 + 0.5);
            assert!((t.h - center).abs() <= HUE_JITTER * bucket + 1e-9);
        }
    }

    #[test]
    fn test_monochrome_ladder() {
        let mut rng = StdRng::seed_from_u64(6);
        let targets = mood_targets(&mut rng, 5, Mood::Monochrome);
        let expected = [0.20, 0.375, 0.55, 0.725, 0.90];
        for (t, want) in targets.iter().zip(expected) {
            assert_eq!(t.c, 0.0);
            assert!((t.l - want).abs() < 1e-9, "L {} != {want}", t.l);
        }
        // One shared base hue
        assert!(targets.windows(2).all(|w| w[0].h == w[1].h));

        let grays = generate_smart_palette(&mut rng, 5, Some(Mood::Monochrome), &[]);
        assert!(grays.windows(2).all(|w| w[0].r < w[1].r), "{grays:?}");
    }

    #[test]
    fn test_fallback_to_random() {
        let mood_none = generate_smart_palette(&mut StdRng::seed_from_u64(12), 5, None, &[]);
        let random = generate_random_palette(&mut StdRng::seed_from_u64(12), 5, &[]);
        assert_eq!(mood_none, random);

        let tiny = generate_smart_palette(&mut StdRng::seed_from_u64(12), 1, Some(Mood::Neon), &[]);
        let random = generate_random_palette(&mut StdRng::seed_from_u64(12), 1, &[]);
        assert_eq!(tiny, random);
    }

    #[test]
    fn test_locks_pass_through_for_every_mood() {
        let lock = Rgb::new(10, 20, 30);
        let locks = [Some(lock), None, None, Some(Rgb::WHITE)];
        for mood in Mood::ALL.map(Some).into_iter().chain([None]) {
            let mut rng = StdRng::seed_from_u64(21);
            let palette = generate_smart_palette(&mut rng, 4, mood, &locks);
            assert_eq!(palette[0], lock, "{mood:?}");
            assert_eq!(palette[3], Rgb::WHITE, "{mood:?}");
        }
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!("OCEAN".parse::<Mood>().unwrap(), Mood::Ocean);
        assert!("gloomy".parse::<Mood>().is_err());
        for mood in Mood::ALL {
            assert_eq!(mood.name().parse::<Mood>().unwrap(), mood);
        }
    }
}
