//! The `PackageSelector` — profit scoring and selection strategies.
//!
//! # Profit model
//!
//! ```text
//! profit = reward · reward_weight − (leg(pos → pickup) + leg(pickup → dropoff)) · distance_weight
//! ```
//!
//! Legs use the graph path when one exists and degrade per leg to the
//! straight-line distance.  Delivered packages and packages with an
//! undisclosed dropoff score `-∞` and are never selected.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use courier_catalog::{Catalog, Package};
use courier_core::{Algorithm, PlannerConfig, Point};
use courier_graph::RoadGraph;

use crate::cluster::cluster_pickups;

/// Scores packages against the road graph and picks profitable subsets.
///
/// Holds only borrowed, read-only state; every method takes the catalog
/// explicitly so no selection ever depends on ambient state.
pub struct PackageSelector<'g> {
    graph:           &'g RoadGraph,
    algorithm:       Algorithm,
    reward_weight:   f64,
    distance_weight: f64,
    seed:            u64,
}

impl<'g> PackageSelector<'g> {
    pub fn new(graph: &'g RoadGraph, config: &PlannerConfig) -> Self {
        Self {
            graph,
            algorithm:       config.algorithm,
            reward_weight:   config.reward_weight,
            distance_weight: config.distance_weight,
            seed:            config.seed,
        }
    }

    // ── Profit model ──────────────────────────────────────────────────────

    /// Profit of servicing `pkg` from `pos`, or `-∞` if the package is not
    /// eligible for scoring.
    pub fn profit(&self, pkg: &Package, pos: Point) -> f64 {
        let Some(dropoff) = pkg.dropoff else {
            return f64::NEG_INFINITY;
        };
        if pkg.delivered {
            return f64::NEG_INFINITY;
        }

        let distance = self.graph.leg_distance(pos, pkg.pickup, self.algorithm)
            + self.graph.leg_distance(pkg.pickup, dropoff, self.algorithm);
        pkg.reward * self.reward_weight - distance * self.distance_weight
    }

    // ── Strategies ────────────────────────────────────────────────────────

    /// The single most profitable eligible package, if any.
    ///
    /// Ties break to the first candidate in catalog (ascending id) order.
    pub fn select_best(&self, catalog: &Catalog, pos: Point) -> Option<Package> {
        let mut best: Option<(&Package, f64)> = None;
        for pkg in catalog.eligible() {
            let profit = self.profit(pkg, pos);
            if best.is_none_or(|(_, p)| profit > p) {
                best = Some((pkg, profit));
            }
        }
        best.map(|(pkg, _)| pkg.clone())
    }

    /// Greedy position-updating selection: up to `max_count` times, pick
    /// the unselected candidate with the highest *strictly positive*
    /// profit, then score the rest as if standing at its dropoff.
    ///
    /// Locally optimal at each step; stops early once nothing profitable
    /// remains.
    pub fn select_greedy(&self, catalog: &Catalog, pos: Point, max_count: usize) -> Vec<Package> {
        let mut selected: Vec<Package> = Vec::new();
        let mut cursor = pos;

        for _ in 0..max_count {
            let mut best: Option<(&Package, f64)> = None;
            for pkg in catalog.eligible() {
                if selected.iter().any(|s| s.id == pkg.id) {
                    continue;
                }
                let profit = self.profit(pkg, cursor);
                debug!("greedy candidate {}: profit {profit:.2}", pkg.id);
                if profit > 0.0 && best.is_none_or(|(_, p)| profit > p) {
                    best = Some((pkg, profit));
                }
            }

            let Some((pkg, _)) = best else { break };
            // The agent will stand at this dropoff when scoring the next pick.
            cursor = pkg.dropoff.unwrap_or(pkg.pickup);
            selected.push(pkg.clone());
        }

        selected
    }

    /// Cluster-first selection: seed with the package whose pickup is
    /// nearest (straight-line), then grow toward the centroid of the
    /// selected pickups.  If the group is not profitable as a whole, fall
    /// back to the single best package.
    pub fn select_by_density(
        &self,
        catalog: &Catalog,
        pos: Point,
        max_count: usize,
    ) -> Vec<Package> {
        let available: Vec<&Package> = catalog.eligible().collect();
        if available.is_empty() || max_count == 0 {
            return Vec::new();
        }

        let seed = available
            .iter()
            .min_by(|a, b| pos.distance(a.pickup).total_cmp(&pos.distance(b.pickup)))
            .copied();
        let Some(seed) = seed else { return Vec::new() };
        let mut selected = vec![seed.clone()];

        while selected.len() < max_count && selected.len() < available.len() {
            let centroid = pickup_centroid(&selected);
            let next = available
                .iter()
                .filter(|p| !selected.iter().any(|s| s.id == p.id))
                .min_by(|a, b| {
                    centroid
                        .distance(a.pickup)
                        .total_cmp(&centroid.distance(b.pickup))
                })
                .copied();
            match next {
                Some(pkg) => selected.push(pkg.clone()),
                None => break,
            }
        }

        let group_profit: f64 = selected.iter().map(|p| self.profit(p, pos)).sum();
        if group_profit > 0.0 {
            selected
        } else {
            self.select_best(catalog, pos).into_iter().collect()
        }
    }

    /// Rank eligible packages by profit per unit of travel distance and
    /// keep the top `max_count` that are profitable outright.
    pub fn select_by_profit_density(
        &self,
        catalog: &Catalog,
        pos: Point,
        max_count: usize,
    ) -> Vec<Package> {
        let mut scored: Vec<(&Package, f64, f64)> = catalog
            .eligible()
            .map(|pkg| {
                let profit = self.profit(pkg, pos);
                let distance = self.graph.leg_distance(pos, pkg.pickup, self.algorithm)
                    + self
                        .graph
                        .leg_distance(pkg.pickup, pkg.dropoff.unwrap_or(pkg.pickup), self.algorithm);
                let density = if distance > 0.0 { profit / distance } else { profit };
                (pkg, profit, density)
            })
            .collect();

        scored.sort_by(|a, b| b.2.total_cmp(&a.2));
        scored
            .into_iter()
            .take(max_count)
            .filter(|&(_, profit, _)| profit > 0.0)
            .map(|(pkg, _, _)| pkg.clone())
            .collect()
    }

    /// Two-phase selection: cluster the eligible pickups with seeded
    /// k-means, pick the cluster with the highest total profit from `pos`,
    /// and return its top profitable members.
    ///
    /// Deterministic for a given config seed.
    pub fn select_two_phase(&self, catalog: &Catalog, pos: Point, max_count: usize) -> Vec<Package> {
        let available: Vec<Package> = catalog.eligible().cloned().collect();
        if available.is_empty() {
            return Vec::new();
        }
        if available.len() <= max_count {
            return available;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let clusters = cluster_pickups(&available, 3, &mut rng);

        let best_cluster = clusters.into_iter().max_by(|a, b| {
            let pa: f64 = a.iter().map(|p| self.profit(p, pos)).sum();
            let pb: f64 = b.iter().map(|p| self.profit(p, pos)).sum();
            pa.total_cmp(&pb)
        });
        let Some(mut cluster) = best_cluster else {
            return Vec::new();
        };

        cluster.sort_by(|a, b| self.profit(b, pos).total_cmp(&self.profit(a, pos)));
        cluster
            .into_iter()
            .take(max_count)
            .filter(|pkg| self.profit(pkg, pos) > 0.0)
            .collect()
    }
}

/// Mean of the selected packages' pickup coordinates.
fn pickup_centroid(packages: &[Package]) -> Point {
    let n = packages.len() as f64;
    let (sx, sy) = packages
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.pickup.x, sy + p.pickup.y));
    Point::new(sx / n, sy / n)
}
