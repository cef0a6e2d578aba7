//! Extraction options

use serde::{Deserialize, Serialize};

/// Order of the returned clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterOrder {
    /// The order the centroids were seeded in
    #[default]
    Initialization,
    /// Most populated cluster first
    Population,
}

/// Configuration for dominant-color extraction.
///
/// # Defaults
///
/// - Max dimension: 150 (longest side after downsampling)
/// - Sample step: 5 (every fifth pixel of the downsampled image)
/// - Alpha threshold: 125 (pixels below are ignored)
/// - Max iterations: 20
/// - Order: [`ClusterOrder::Initialization`]
///
/// # Example
///
/// ```
/// use color_core::extract::{ClusterOrder, ExtractOptions};
///
/// let options = ExtractOptions::new()
///     .sample_step(1)
///     .order(ClusterOrder::Population);
/// assert_eq!(options.max_dimension, 150);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Longest side of the image after nearest-neighbour downsampling.
    pub max_dimension: usize,
    /// Stride through the downsampled pixels.
    pub sample_step: usize,
    /// Minimum alpha for a pixel to count.
    pub alpha_threshold: u8,
    /// Upper bound on Lloyd iterations.
    pub max_iterations: usize,
    pub order: ClusterOrder,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_dimension: 150,
            sample_step: 5,
            alpha_threshold: 125,
            max_iterations: 20,
            order: ClusterOrder::Initialization,
        }
    }
}

impl ExtractOptions {
    /// Same as [`ExtractOptions::default`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero is treated as 1.
    #[inline]
    pub fn max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension.max(1);
        self
    }

    /// Zero is treated as 1.
    #[inline]
    pub fn sample_step(mut self, step: usize) -> Self {
        self.sample_step = step.max(1);
        self
    }

    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    #[inline]
    pub fn order(mut self, order: ClusterOrder) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.max_dimension, 150);
        assert_eq!(opts.sample_step, 5);
        assert_eq!(opts.alpha_threshold, 125);
        assert_eq!(opts.max_iterations, 20);
        assert_eq!(opts.order, ClusterOrder::Initialization);
        assert_eq!(ExtractOptions::new(), opts);
    }

    #[test]
    fn test_builder_chaining() {
        let opts = ExtractOptions::new()
            .max_dimension(64)
            .sample_step(2)
            .alpha_threshold(0)
            .max_iterations(5)
            .order(ClusterOrder::Population);
        assert_eq!(opts.max_dimension, 64);
        assert_eq!(opts.sample_step, 2);
        assert_eq!(opts.alpha_threshold, 0);
        assert_eq!(opts.max_iterations, 5);
        assert_eq!(opts.order, ClusterOrder::Population);
    }

    #[test]
    fn test_zero_step_and_dimension() {
        let opts = ExtractOptions::new().sample_step(0).max_dimension(0);
        assert_eq!(opts.sample_step, 1);
        assert_eq!(opts.max_dimension, 1);
    }
}
