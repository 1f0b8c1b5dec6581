//! The `RouteOptimizer` — orders a package set and builds its path.

use itertools::Itertools;
use log::debug;

use courier_catalog::Package;
use courier_core::{Algorithm, PlannerConfig, Point};
use courier_graph::{PointPath, RoadGraph};

use crate::RoutePlan;

/// Package counts above this always use the nearest-neighbor heuristic:
/// 7! permutations and beyond cost more than the ordering is worth.
pub const EXACT_ORDER_LIMIT: usize = 6;

/// Orders selected packages and produces waypoint paths with cost/profit
/// accounting.  Pure: never mutates the graph or the packages.
pub struct RouteOptimizer<'g> {
    graph:           &'g RoadGraph,
    algorithm:       Algorithm,
    exact_threshold: usize,
}

impl<'g> RouteOptimizer<'g> {
    pub fn new(graph: &'g RoadGraph, config: &PlannerConfig) -> Self {
        Self {
            graph,
            algorithm: config.algorithm,
            exact_threshold: config.exact_order_threshold,
        }
    }

    // ── Ordering ──────────────────────────────────────────────────────────

    /// Nearest-neighbor tour: repeatedly visit the unvisited package whose
    /// pickup is closest to the current position (graph distance, falling
    /// back to straight-line), then stand at its dropoff.
    pub fn order_heuristic(&self, packages: &[Package], start: Point) -> Vec<Package> {
        let mut unvisited: Vec<Package> = packages.to_vec();
        let mut ordered = Vec::with_capacity(unvisited.len());
        let mut cursor = start;

        while !unvisited.is_empty() {
            let nearest = unvisited
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    self.graph
                        .leg_distance(cursor, a.pickup, self.algorithm)
                        .total_cmp(&self.graph.leg_distance(cursor, b.pickup, self.algorithm))
                })
                .map(|(i, _)| i)
                .unwrap_or(0);
            let pkg = unvisited.swap_remove(nearest);
            cursor = pkg.dropoff.unwrap_or(pkg.pickup);
            ordered.push(pkg);
        }

        ordered
    }

    /// Exhaustive permutation search for the minimum-distance order.
    ///
    /// Valid up to [`EXACT_ORDER_LIMIT`] packages; beyond that it silently
    /// delegates to [`order_heuristic`].  The first permutation attaining
    /// the minimum wins (strict comparison).
    pub fn order_exact(&self, packages: &[Package], start: Point) -> Vec<Package> {
        if packages.len() <= 1 {
            return packages.to_vec();
        }
        if packages.len() > EXACT_ORDER_LIMIT {
            return self.order_heuristic(packages, start);
        }

        let mut best: Option<(Vec<Package>, f64)> = None;
        for perm in packages.iter().cloned().permutations(packages.len()) {
            let distance = self.leg_sum(&perm, start);
            if best.as_ref().is_none_or(|&(_, d)| distance < d) {
                best = Some((perm, distance));
            }
        }
        best.map(|(order, _)| order).unwrap_or_default()
    }

    // ── Distance accounting ───────────────────────────────────────────────

    /// Leg-sum route distance: for each package in order, the leg to its
    /// pickup plus the delivery leg, each degrading to straight-line.
    pub fn leg_sum(&self, ordered: &[Package], start: Point) -> f64 {
        let mut total = 0.0;
        let mut cursor = start;
        for pkg in ordered {
            let dropoff = pkg.dropoff.unwrap_or(pkg.pickup);
            total += self.graph.leg_distance(cursor, pkg.pickup, self.algorithm);
            total += self.graph.leg_distance(pkg.pickup, dropoff, self.algorithm);
            cursor = dropoff;
        }
        total
    }

    // ── Path construction ─────────────────────────────────────────────────

    /// Expand an ordered package sequence into the full node-by-node path.
    ///
    /// Graph legs are concatenated with their duplicate joints dropped:
    /// every leg after the first drops its leading point (it equals the
    /// previous leg's end), and each delivery leg drops the pickup.  Legs
    /// without a graph path contribute a straight two-point segment.
    pub fn build_path(&self, ordered: &[Package], start: Point) -> PointPath {
        let mut points: Vec<Point> = Vec::new();
        let mut distance = 0.0;
        let mut cursor = start;

        for pkg in ordered {
            let dropoff = pkg.dropoff.unwrap_or(pkg.pickup);

            match self.graph.find_path(cursor, pkg.pickup, self.algorithm) {
                Ok(leg) => {
                    let skip = usize::from(!points.is_empty());
                    points.extend(leg.points.into_iter().skip(skip));
                    distance += leg.distance;
                }
                Err(_) => {
                    if points.is_empty() {
                        points.push(cursor);
                    }
                    points.push(pkg.pickup);
                    distance += cursor.distance(pkg.pickup);
                }
            }

            match self.graph.find_path(pkg.pickup, dropoff, self.algorithm) {
                Ok(leg) => {
                    points.extend(leg.points.into_iter().skip(1));
                    distance += leg.distance;
                }
                Err(_) => {
                    points.push(dropoff);
                    distance += pkg.pickup.distance(dropoff);
                }
            }

            cursor = dropoff;
        }

        PointPath { points, distance }
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Order `packages`, compute the plan summary, and emit the waypoint
    /// sequence.  Small sets (≤ the configured threshold) are ordered
    /// exactly; larger sets use the heuristic.
    pub fn evaluate(&self, packages: &[Package], start: Point) -> RoutePlan {
        if packages.is_empty() {
            return RoutePlan::empty(start);
        }

        let ordered = if packages.len() <= self.exact_threshold {
            self.order_exact(packages, start)
        } else {
            self.order_heuristic(packages, start)
        };

        let total_reward: f64 = ordered.iter().map(|p| p.reward).sum();
        let total_distance = self.leg_sum(&ordered, start);
        debug!(
            "route evaluated: {} packages, distance {total_distance:.2}, reward {total_reward:.2}",
            ordered.len()
        );

        let mut waypoints = Vec::with_capacity(1 + 2 * ordered.len());
        waypoints.push(start);
        for pkg in &ordered {
            waypoints.push(pkg.pickup);
            waypoints.push(pkg.dropoff.unwrap_or(pkg.pickup));
        }

        RoutePlan {
            net_profit: total_reward - total_distance,
            packages: ordered,
            waypoints,
            total_reward,
            total_distance,
        }
    }
}
