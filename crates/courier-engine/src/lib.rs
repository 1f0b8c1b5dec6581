//! `courier-engine` — the decision loop tying the planner together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`planner`]  | `DeliveryPlanner`, `CycleOutcome` — the cycle machine |
//! | [`observer`] | `CycleObserver` trait, `CyclePhase`, `NoopObserver`   |
//! | [`stats`]    | `DeliveryStats` — session accounting                  |
//! | [`error`]    | `EngineError` and the crate `Result` alias            |
//!
//! The engine owns the graph and the catalog and runs one decision cycle
//! per vehicle stop: select a profitable package subset, order it into a
//! trip, and hand the plan to whatever transport layer sits above.  That
//! layer reports back through [`DeliveryPlanner::confirm_delivered`].

pub mod error;
pub mod observer;
pub mod planner;
pub mod stats;


pub use error::{EngineError, EngineResult};
pub use observer::{CycleObserver, CyclePhase, NoopObserver};
pub use planner::{CycleOutcome, DeliveryPlanner};
pub use stats::DeliveryStats;
