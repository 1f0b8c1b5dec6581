//! `courier-route` — delivery-order optimization.
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`optimizer`] | `RouteOptimizer` — ordering and path construction  |
//! | [`plan`]      | `RoutePlan` — the per-cycle evaluation result      |
//!
//! # Two distance figures
//!
//! A route has two defensible total distances: the *leg sum* (consecutive
//! pickup/dropoff legs) and the *detailed path* distance (every graph node
//! traversed, including node-snapping overhead).  Profit reporting uses
//! the leg sum; path rendering uses the detailed figure.  Both are
//! exposed and differ by at most the snapping tolerance per leg.

pub mod optimizer;
pub mod plan;


pub use optimizer::{RouteOptimizer, EXACT_ORDER_LIMIT};
pub use plan::RoutePlan;
