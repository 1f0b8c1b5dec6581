//! Decision-cycle observer trait for progress reporting and data collection.

use courier_catalog::Package;
use courier_route::RoutePlan;

use crate::CycleOutcome;

/// Where the decision machine currently stands.
///
/// Each cycle walks `Selecting → Ordering → Dispatched` and returns to
/// `Idle`; gated cycles (vehicle still moving) never leave `Idle`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Selecting,
    Ordering,
    Dispatched,
}

/// Callbacks invoked by
/// [`DeliveryPlanner::run_cycle`][crate::DeliveryPlanner::run_cycle] at key
/// points in the decision cycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — selection printer
///
/// ```rust,ignore
/// struct SelectionPrinter;
///
/// impl CycleObserver for SelectionPrinter {
///     fn on_selected(&mut self, packages: &[Package]) {
///         println!("carrying {} packages this trip", packages.len());
///     }
/// }
/// ```
pub trait CycleObserver {
    /// Called on every phase transition.
    fn on_phase(&mut self, _phase: CyclePhase) {}

    /// Called once a non-empty package selection has been made.
    fn on_selected(&mut self, _packages: &[Package]) {}

    /// Called once the selection has been ordered and priced.
    fn on_planned(&mut self, _plan: &RoutePlan) {}

    /// Called with the cycle's final outcome, gated cycles included.
    fn on_outcome(&mut self, _outcome: &CycleOutcome) {}
}

/// A [`CycleObserver`] that does nothing.  Use when you need to call
/// `run_cycle` but don't want progress callbacks.
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}
