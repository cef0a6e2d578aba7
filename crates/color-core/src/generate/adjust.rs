//! HSL adjustments, shade ladders and mixing

use crate::color::{Hsl, Rgb};

/// Lightness of the first and last rungs of [`shades`].
const SHADE_RANGE: (f64, f64) = (0.95, 0.10);

/// `count` shades of `rgb` from light to dark.
///
/// Hue and saturation are held fixed while lightness steps linearly from
/// 0.95 to 0.10. A single shade sits at the light end.
pub fn shades(rgb: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = Hsl::from(rgb);
    let (start, end) = SHADE_RANGE;
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let l = start + (end - start) * i as f64 / last;
            Rgb::from(Hsl::new(hsl.h, hsl.s, l))
        })
        .collect()
}

/// Rotate the hue by `degrees` (wraps modulo 360).
pub fn adjust_hue(rgb: Rgb, degrees: f64) -> Rgb {
    let hsl = Hsl::from(rgb);
    Rgb::from(Hsl::new(hsl.h + degrees, hsl.s, hsl.l))
}

/// Shift HSL saturation by `delta`, clamped to 0.0..=1.0.
pub fn adjust_saturation(rgb: Rgb, delta: f64) -> Rgb {
    let hsl = Hsl::from(rgb);
    Rgb::from(Hsl::new(hsl.h, hsl.s + delta, hsl.l))
}

/// Shift HSL lightness by `delta`, clamped to 0.0..=1.0.
pub fn adjust_lightness(rgb: Rgb, delta: f64) -> Rgb {
    let hsl = Hsl::from(rgb);
    Rgb::from(Hsl::new(hsl.h, hsl.s, hsl.l + delta))
}

/// Blend `a` toward `b` in HSL. `ratio` 0.0 is `a`, 1.0 is `b`.
///
/// Hue travels the shorter arc, so 10 and 350 degrees meet at 0 rather
/// than at 180. The ratio is clamped and the endpoints are exact.
///
/// # Example
/// ```
/// use color_core::generate::mix_colors;
/// use color_core::{Hsl, Rgb};
///
/// let a = Rgb::from(Hsl::new(10.0, 1.0, 0.5));
/// let b = Rgb::from(Hsl::new(350.0, 1.0, 0.5));
/// let mid = Hsl::from(mix_colors(a, b, 0.5));
/// assert!(mid.h < 1.0 || mid.h > 359.0);
/// ```
pub fn mix_colors(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    let t = ratio.clamp(0.0, 1.0);
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }

    let (x, y) = (Hsl::from(a), Hsl::from(b));
    let mut delta = y.h - x.h;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    Rgb::from(Hsl::new(
        x.h + delta * t,
        x.s + (y.s - x.s) * t,
        x.l + (y.l - x.l) * t,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shades_ladder() {
        let base = Rgb::new(139, 92, 246);
        let ladder = shades(base, 10);
        assert_eq!(ladder.len(), 10);

        let first = Hsl::from(ladder[0]);
        let last = Hsl::from(ladder[9]);
        assert!((first.l - 0.95).abs() < 0.01);
        assert!((last.l - 0.10).abs() < 0.01);

        // Strictly darker at each step
        let lightness: Vec<f64> = ladder.iter().map(|c| Hsl::from(*c).l).collect();
        assert!(lightness.windows(2).all(|w| w[0] > w[1]), "{lightness:?}");

        // Hue held
        let hue = Hsl::from(base).h;
        for c in &ladder[1..9] {
            assert!((Hsl::from(*c).h - hue).abs() < 2.0);
        }
    }

    #[test]
    fn test_shades_edge_counts() {
        assert!(shades(Rgb::BLACK, 0).is_empty());
        let single = shades(Rgb::new(255, 0, 0), 1);
        assert_eq!(single.len(), 1);
        assert!((Hsl::from(single[0]).l - 0.95).abs() < 0.01);
    }

    #[test]
    fn test_adjust_hue_wraps() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(adjust_hue(red, 120.0), Rgb::new(0, 255, 0));
        assert_eq!(adjust_hue(red, -120.0), Rgb::new(0, 0, 255));
        assert_eq!(adjust_hue(red, 720.0), red);
    }

    #[test]
    fn test_adjust_saturation_and_lightness_clamp() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(adjust_saturation(red, -2.0), Rgb::new(128, 128, 128));
        assert_eq!(adjust_saturation(red, 0.5), red);
        assert_eq!(adjust_lightness(red, 1.0), Rgb::WHITE);
        assert_eq!(adjust_lightness(red, -1.0), Rgb::BLACK);
        assert_eq!(adjust_lightness(red, 0.25), Rgb::new(255, 128, 128));
    }

    #[test]
    fn test_mix_shortest_arc() {
        let a = Rgb::from(Hsl::new(10.0, 1.0, 0.5));
        let b = Rgb::from(Hsl::new(350.0, 1.0, 0.5));
        let mid = mix_colors(a, b, 0.5);
        // Red, not cyan
        assert_eq!(mid, Rgb::new(255, 0, 0));

        // Same arc the other way round
        assert_eq!(mix_colors(b, a, 0.5), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_mix_endpoints_and_clamp() {
        let a = Rgb::new(139, 92, 246);
        let b = Rgb::new(16, 185, 129);
        assert_eq!(mix_colors(a, b, 0.0), a);
        assert_eq!(mix_colors(a, b, 1.0), b);
        assert_eq!(mix_colors(a, b, -3.0), a);
        assert_eq!(mix_colors(a, b, 7.0), b);
    }

    #[test]
    fn test_mix_interpolates_lightness() {
        let mid = mix_colors(Rgb::BLACK, Rgb::WHITE, 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
        let quarter = Hsl::from(mix_colors(Rgb::BLACK, Rgb::WHITE, 0.25));
        assert!((quarter.l - 0.25).abs() < 0.01);
    }
}
