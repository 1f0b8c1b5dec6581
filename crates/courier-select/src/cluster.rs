//! Seeded k-means clustering over pickup points.
//!
//! Used by the two-phase selection strategy to find spatially coherent
//! package groups.  The iteration count is fixed and the RNG is seeded by
//! the caller, so clustering is fully deterministic per seed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use courier_catalog::Package;
use courier_core::Point;

/// Refinement passes.  Pickup sets are small (≤ 40 packages), so a handful
/// of Lloyd iterations converges in practice.
const KMEANS_ITERATIONS: usize = 5;

/// Partition `packages` into up to `k` clusters by pickup proximity.
///
/// Fewer packages than clusters degenerates to singleton clusters.  Empty
/// clusters are dropped from the result.
pub fn cluster_pickups(packages: &[Package], k: usize, rng: &mut SmallRng) -> Vec<Vec<Package>> {
    if packages.len() <= k {
        return packages.iter().map(|p| vec![p.clone()]).collect();
    }

    // Initial centroids: k distinct pickup positions, chosen by the seeded RNG.
    let mut centroids: Vec<Point> = packages
        .choose_multiple(rng, k)
        .map(|p| p.pickup)
        .collect();

    let mut clusters: Vec<Vec<Package>> = Vec::new();
    for _ in 0..KMEANS_ITERATIONS {
        clusters = vec![Vec::new(); centroids.len()];

        for pkg in packages {
            let nearest = centroids
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    pkg.pickup.distance(**a).total_cmp(&pkg.pickup.distance(**b))
                })
                .map(|(i, _)| i)
                .unwrap_or(0);
            clusters[nearest].push(pkg.clone());
        }

        // Move each centroid to its cluster mean; empty clusters keep theirs.
        centroids = clusters
            .iter()
            .zip(&centroids)
            .map(|(cluster, &old)| {
                if cluster.is_empty() {
                    old
                } else {
                    let n = cluster.len() as f64;
                    let (sx, sy) = cluster
                        .iter()
                        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.pickup.x, sy + p.pickup.y));
                    Point::new(sx / n, sy / n)
                }
            })
            .collect();
    }

    clusters.into_iter().filter(|c| !c.is_empty()).collect()
}
