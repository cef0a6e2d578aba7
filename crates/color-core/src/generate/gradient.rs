//! Multi-stop gradients

use serde::{Deserialize, Serialize};

use super::adjust::mix_colors;
use crate::color::Rgb;

/// A color pinned at a position in percent (0.0..=100.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    /// Percent along the gradient. [`Gradient::new`] clamps it to 0..=100.
    pub position: f64,
}

impl GradientStop {
    /// A stop with `position` taken as given.
    pub fn new(color: Rgb, position: f64) -> Self {
        Self { color, position }
    }
}

/// Stops kept sorted by position.
///
/// Callers are expected to supply at least two stops. With one stop the
/// gradient is flat; with none there is nothing to sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Clamp every position to 0..=100 and sort. Stops sharing a position
    /// keep their input order.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: Vec<GradientStop> = stops
            .into_iter()
            .map(|s| GradientStop::new(s.color, s.position.clamp(0.0, 100.0)))
            .collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `position` percent.
    ///
    /// Positions outside the outermost stops take the nearest stop's color.
    /// Between stops the two neighbours are blended with [`mix_colors`].
    pub fn color_at(&self, position: f64) -> Option<Rgb> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        if position <= first.position {
            return Some(first.color);
        }
        if position >= last.position {
            return Some(last.color);
        }

        let upper = self.stops.iter().position(|s| s.position > position)?;
        let (a, b) = (self.stops[upper - 1], self.stops[upper]);
        let t = (position - a.position) / (b.position - a.position);
        Some(mix_colors(a.color, b.color, t))
    }

    /// `steps` colors evenly spaced over 0..=100.
    pub fn sample(&self, steps: usize) -> Vec<Rgb> {
        let last = steps.saturating_sub(1).max(1) as f64;
        (0..steps)
            .filter_map(|i| self.color_at(100.0 * i as f64 / last))
            .collect()
    }
}
