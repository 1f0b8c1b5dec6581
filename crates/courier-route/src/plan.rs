//! The per-cycle route evaluation result.

use courier_catalog::Package;
use courier_core::Point;

/// An ordered delivery plan with its cost/profit summary.
///
/// Derived per decision cycle and handed to the transport layer; never
/// stored.  `waypoints` is the logical visit sequence (start, then each
/// pickup and dropoff in order) — the fully expanded node-by-node path
/// comes from [`RouteOptimizer::build_path`][crate::RouteOptimizer::build_path].
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Packages in delivery order.
    pub packages: Vec<Package>,

    /// Start position followed by each package's pickup and dropoff.
    pub waypoints: Vec<Point>,

    /// Sum of the packages' rewards.
    pub total_reward: f64,

    /// Leg-sum travel distance (see the crate docs on the two figures).
    pub total_distance: f64,

    /// `total_reward − total_distance`.
    pub net_profit: f64,
}

impl RoutePlan {
    /// The trivial plan for an empty selection: stay at `start`.
    pub fn empty(start: Point) -> Self {
        Self {
            packages:       Vec::new(),
            waypoints:      vec![start],
            total_reward:   0.0,
            total_distance: 0.0,
            net_profit:     0.0,
        }
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
