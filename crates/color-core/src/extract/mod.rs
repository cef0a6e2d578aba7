//! Dominant-color extraction
//!
//! Pipeline:
//!
//! 1. Downsample the [`PixelSource`] so its longest side is at most
//!    [`ExtractOptions::max_dimension`] (nearest neighbour)
//! 2. Stride through the pixels by [`ExtractOptions::sample_step`], dropping
//!    any below [`ExtractOptions::alpha_threshold`]
//! 3. Run Lloyd's k-means in RGB, seeded from distinct sample points
//! 4. Round the centroids to [`Rgb`]
//!
//! When fewer usable pixels than clusters remain, a neutral gray ramp of the
//! requested length is returned instead.
//!
//! # Example
//!
//! ```
//! use color_core::extract::{extract, ExtractOptions, PixelBuffer};
//! use color_core::Rgb;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let red = PixelBuffer::from_rgba(10, 10, [255, 0, 0, 255].repeat(100)).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let colors = extract(&red, 3, &ExtractOptions::default(), &mut rng);
//! assert_eq!(colors, vec![Rgb::new(255, 0, 0); 3]);
//! ```

mod kmeans;
mod options;
mod source;

pub use options::{ClusterOrder, ExtractOptions};
pub use source::{PixelBuffer, PixelSource};

use rand::Rng;
use serde::Serialize;

use crate::color::Rgb;
use kmeans::{kmeans, Point};
use source::Downsampled;

/// One extracted color and the number of sample points assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub color: Rgb,
    /// Zero for gray fallback entries
    pub population: usize,
}

/// Sample points used for clustering.
pub(crate) fn sample_points<S: PixelSource + ?Sized>(source: &S, options: &ExtractOptions) -> Vec<Point> {
    let view = Downsampled::new(source, options.max_dimension.max(1));
    view.pixels()
        .step_by(options.sample_step.max(1))
        .filter(|px| px[3] >= options.alpha_threshold)
        .map(|px| [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])])
        .collect()
}

/// `k` evenly spaced grays strictly between black and white.
fn gray_fallback(k: usize) -> Vec<Cluster> {
    (1..=k)
        .map(|i| {
            let v = (255.0 * i as f64 / (k + 1) as f64).round() as u8;
            Cluster {
                color: Rgb::gray(v),
                population: 0,
            }
        })
        .collect()
}

#[inline]
fn centroid_to_rgb(c: &Point) -> Rgb {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(c[0]), channel(c[1]), channel(c[2]))
}

/// Extract `k` dominant colors with their populations.
///
/// Always returns exactly `k` clusters.
pub fn extract_clusters<S, R>(
    source: &S,
    k: usize,
    options: &ExtractOptions,
    rng: &mut R,
) -> Vec<Cluster>
where
    S: PixelSource + ?Sized,
    R: Rng + ?Sized,
{
    let points = sample_points(source, options);
    let Some(result) = kmeans(rng, &points, k, options.max_iterations) else {
        tracing::debug!(k, points = points.len(), "too few usable pixels, gray fallback");
        return gray_fallback(k);
    };

    let mut clusters: Vec<Cluster> = result
        .centroids
        .iter()
        .zip(result.populations)
        .map(|(c, population)| Cluster {
            color: centroid_to_rgb(c),
            population,
        })
        .collect();

    if options.order == ClusterOrder::Population {
        clusters.sort_by(|a, b| b.population.cmp(&a.population));
    }
    clusters
}

/// Extract `k` dominant colors.
///
/// See [`extract_clusters`] for populations.
pub fn extract<S, R>(source: &S, k: usize, options: &ExtractOptions, rng: &mut R) -> Vec<Rgb>
where
    S: PixelSource + ?Sized,
    R: Rng + ?Sized,
{
    extract_clusters(source, k, options, rng)
        .into_iter()
        .map(|c| c.color)
        .collect()
}
