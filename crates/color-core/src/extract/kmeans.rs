//! Lloyd's k-means over RGB points

use std::collections::HashSet;

use rand::Rng;

pub(crate) type Point = [f64; 3];

/// Centroids and their final populations.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KMeans {
    pub centroids: Vec<Point>,
    pub populations: Vec<usize>,
}

#[inline]
fn distance_sq(a: &Point, b: &Point) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Index of the nearest centroid. Ties go to the lower index.
fn nearest(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(point, c);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Seed `k` centroids from distinct point indices.
///
/// Requires `k <= points.len()`.
fn seed<R: Rng + ?Sized>(rng: &mut R, points: &[Point], k: usize) -> Vec<Point> {
    let mut used = HashSet::with_capacity(k);
    let mut centroids = Vec::with_capacity(k);
    while centroids.len() < k {
        let i = rng.gen_range(0..points.len());
        if used.insert(i) {
            centroids.push(points[i]);
        }
    }
    centroids
}

/// Cluster `points` into `k` groups.
///
/// Returns `None` when there are fewer than `k` points. Stops early once no
/// centroid moves by a full unit on any channel. An empty cluster keeps its
/// previous centroid.
pub(crate) fn kmeans<R: Rng + ?Sized>(
    rng: &mut R,
    points: &[Point],
    k: usize,
    max_iterations: usize,
) -> Option<KMeans> {
    if k == 0 || points.len() < k {
        return None;
    }

    let mut centroids = seed(rng, points, k);
    let mut populations = vec![0usize; k];

    for iteration in 0..max_iterations {
        let mut sums = vec![[0.0f64; 3]; k];
        populations.fill(0);
        for p in points {
            let i = nearest(p, &centroids);
            populations[i] += 1;
            for ch in 0..3 {
                sums[i][ch] += p[ch];
            }
        }

        let mut converged = true;
        for (i, centroid) in centroids.iter_mut().enumerate() {
            if populations[i] == 0 {
                continue;
            }
            let n = populations[i] as f64;
            let next = [sums[i][0] / n, sums[i][1] / n, sums[i][2] / n];
            if (0..3).any(|ch| (next[ch] - centroid[ch]).abs() >= 1.0) {
                converged = false;
            }
            *centroid = next;
        }

        if converged {
            tracing::debug!(iteration, k, points = points.len(), "k-means converged");
            break;
        }
    }

    Some(KMeans {
        centroids,
        populations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_too_few_points() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(kmeans(&mut rng, &[[1.0, 2.0, 3.0]], 2, 10).is_none());
        assert!(kmeans(&mut rng, &[[1.0, 2.0, 3.0]], 0, 10).is_none());
    }

    #[test]
    fn test_seed_indices_are_distinct() {
        let points: Vec<Point> = (0..5).map(|i| [i as f64, 0.0, 0.0]).collect();
        for s in 0..20 {
            let mut rng = StdRng::seed_from_u64(s);
            let mut seeded: Vec<f64> = seed(&mut rng, &points, 5).iter().map(|p| p[0]).collect();
            seeded.sort_by(f64::total_cmp);
            assert_eq!(seeded, [0.0, 1.0, 2.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn test_separates_two_groups() {
        let mut points = vec![[250.0, 0.0, 0.0]; 30];
        points.extend(vec![[0.0, 0.0, 250.0]; 10]);
        for s in 0..10 {
            let mut rng = StdRng::seed_from_u64(s);
            let result = kmeans(&mut rng, &points, 2, 20).unwrap();
            let mut found: Vec<(Point, usize)> = result
                .centroids
                .into_iter()
                .zip(result.populations)
                .collect();
            found.sort_by_key(|(_, n)| *n);
            assert_eq!(found, vec![([0.0, 0.0, 250.0], 10), ([250.0, 0.0, 0.0], 30)]);
        }
    }

    #[test]
    fn test_empty_cluster_keeps_centroid() {
        // Three identical points and k = 3: everything lands in cluster 0
        let points = vec![[7.0, 7.0, 7.0]; 3];
        let mut rng = StdRng::seed_from_u64(3);
        let result = kmeans(&mut rng, &points, 3, 20).unwrap();
        assert_eq!(result.populations, vec![3, 0, 0]);
        assert!(result.centroids.iter().all(|c| *c == [7.0, 7.0, 7.0]));
    }

    #[test]
    fn test_zero_iterations_returns_seeds() {
        let points = vec![[1.0, 1.0, 1.0], [200.0, 200.0, 200.0]];
        let mut rng = StdRng::seed_from_u64(1);
        let result = kmeans(&mut rng, &points, 2, 0).unwrap();
        let mut centroids = result.centroids.clone();
        centroids.sort_by(|a, b| a[0].total_cmp(&b[0]));
        assert_eq!(centroids, points);
    }
}
