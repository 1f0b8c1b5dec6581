//! The `DeliveryPlanner` — one decision cycle end to end.

use log::{debug, info};

use courier_catalog::Catalog;
use courier_core::{PlannerConfig, SelectionStrategy, VehicleSnapshot};
use courier_graph::RoadGraph;
use courier_route::{RouteOptimizer, RoutePlan};
use courier_select::PackageSelector;

use crate::{CycleObserver, CyclePhase, DeliveryStats, EngineResult};

/// The final state of one decision cycle.
///
/// Every variant except `Dispatched` is a normal, expected outcome of a
/// healthy session; none of them is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The vehicle has not come to a stop; no decision is due yet.
    VehicleMoving,
    /// Every package in the catalog has been delivered.
    AllDelivered,
    /// Packages remain but no selection clears the profit gate.
    NothingProfitable,
    /// A priced, ordered trip is ready for the transport layer.
    Dispatched(RoutePlan),
}

/// Owns the graph, the catalog, the configuration, and the session stats.
///
/// The decision loop is: poll the vehicle, call [`run_cycle`], hand a
/// `Dispatched` plan to the transport layer, and once that layer confirms
/// the trip completed, call [`confirm_delivered`] with the same plan.
///
/// [`run_cycle`]: DeliveryPlanner::run_cycle
/// [`confirm_delivered`]: DeliveryPlanner::confirm_delivered
pub struct DeliveryPlanner {
    graph:   RoadGraph,
    catalog: Catalog,
    config:  PlannerConfig,
    stats:   DeliveryStats,
}

impl DeliveryPlanner {
    pub fn new(graph: RoadGraph, catalog: Catalog, config: PlannerConfig) -> Self {
        Self { graph, catalog, config, stats: DeliveryStats::default() }
    }

    // ── The decision cycle ────────────────────────────────────────────────

    /// Run one decision cycle from the vehicle's reported state.
    ///
    /// Reads only; the catalog changes exclusively through
    /// [`confirm_delivered`][Self::confirm_delivered] and
    /// [`Catalog::set_dropoff`] via [`catalog_mut`][Self::catalog_mut].
    pub fn run_cycle<O: CycleObserver>(
        &self,
        vehicle: &VehicleSnapshot,
        observer: &mut O,
    ) -> CycleOutcome {
        if !vehicle.is_stopped() {
            debug!("vehicle still moving; cycle gated");
            return self.finish(CycleOutcome::VehicleMoving, observer);
        }
        if self.catalog.undelivered_count() == 0 {
            info!("all packages delivered; session complete");
            return self.finish(CycleOutcome::AllDelivered, observer);
        }

        let position = vehicle.position_point();
        observer.on_phase(CyclePhase::Selecting);
        let selector = PackageSelector::new(&self.graph, &self.config);
        let max = self.config.max_packages_per_trip;
        let selected = match self.config.strategy {
            SelectionStrategy::Greedy => selector.select_greedy(&self.catalog, position, max),
            SelectionStrategy::Density => selector.select_by_density(&self.catalog, position, max),
            SelectionStrategy::ProfitDensity => {
                selector.select_by_profit_density(&self.catalog, position, max)
            }
            SelectionStrategy::TwoPhase => selector.select_two_phase(&self.catalog, position, max),
        };
        if selected.is_empty() {
            info!("no profitable selection this cycle");
            return self.finish(CycleOutcome::NothingProfitable, observer);
        }
        observer.on_selected(&selected);

        observer.on_phase(CyclePhase::Ordering);
        let optimizer = RouteOptimizer::new(&self.graph, &self.config);
        let plan = optimizer.evaluate(&selected, position);
        observer.on_planned(&plan);
        info!(
            "dispatching {} packages: distance {:.2}, reward {:.2}, net {:.2}",
            plan.package_count(),
            plan.total_distance,
            plan.total_reward,
            plan.net_profit
        );

        observer.on_phase(CyclePhase::Dispatched);
        self.finish(CycleOutcome::Dispatched(plan), observer)
    }

    /// Emit the outcome and return the machine to idle.
    fn finish<O: CycleObserver>(&self, outcome: CycleOutcome, observer: &mut O) -> CycleOutcome {
        observer.on_outcome(&outcome);
        observer.on_phase(CyclePhase::Idle);
        outcome
    }

    // ── Delivery confirmation ─────────────────────────────────────────────

    /// Record a trip the transport layer has confirmed complete: mark each
    /// package delivered and fold the plan into the session stats.
    pub fn confirm_delivered(&mut self, plan: &RoutePlan) -> EngineResult<()> {
        for pkg in &plan.packages {
            self.catalog.mark_delivered(pkg.id)?;
        }
        self.stats.record(plan);
        info!("trip confirmed; session totals: {}", self.stats);
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access, for dropoff disclosures from the transport
    /// layer.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn stats(&self) -> DeliveryStats {
        self.stats
    }
}
