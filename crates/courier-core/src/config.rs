//! Planner configuration.

use crate::Algorithm;

/// Which package-selection strategy the engine runs each cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum SelectionStrategy {
    /// Position-updating greedy arg-max over per-package profit.
    #[default]
    Greedy,
    /// Cluster-first: seed with the nearest pickup, grow toward the centroid.
    Density,
    /// Rank by profit per unit of travel distance.
    ProfitDensity,
    /// k-means over pickups, then best-profit members of the best cluster.
    TwoPhase,
}

/// Top-level planner configuration.
///
/// Typically loaded from a JSON/TOML file by the application crate and
/// passed into `DeliveryPlanner`.  All fields have sensible defaults.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Multiplier on package reward in the profit score.
    pub reward_weight: f64,

    /// Multiplier on travel distance in the profit score.  The default is
    /// tuned for map scales where rewards run in the hundreds and legs in
    /// the thousands of units.
    pub distance_weight: f64,

    /// Per-trip package-count cap imposed by the competition rules.
    pub max_packages_per_trip: usize,

    /// Shortest-path search used by every graph query.
    pub algorithm: Algorithm,

    /// Selection strategy run by the engine each decision cycle.
    pub strategy: SelectionStrategy,

    /// Package counts up to this bound are ordered by exhaustive
    /// permutation search; larger sets use the nearest-neighbor heuristic.
    pub exact_order_threshold: usize,

    /// Seed for the clustering RNG.  The same seed always produces
    /// identical two-phase selections.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reward_weight:         1.0,
            distance_weight:       0.1,
            max_packages_per_trip: 3,
            algorithm:             Algorithm::AStar,
            strategy:              SelectionStrategy::Greedy,
            exact_order_threshold: 3,
            seed:                  0,
        }
    }
}
