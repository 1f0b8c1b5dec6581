//! `courier-core` — foundational types for the courier delivery planner.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (`thiserror`, `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`point`]     | `Point`, distance and angle helpers                 |
//! | [`ids`]       | `NodeId`, `PackageId`                               |
//! | [`algorithm`] | `Algorithm` — shortest-path search selector         |
//! | [`config`]    | `PlannerConfig`, `SelectionStrategy`                |
//! | [`snapshot`]  | Boundary DTOs: road / package / vehicle snapshots   |

pub mod algorithm;
pub mod config;
pub mod ids;
pub mod point;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::Algorithm;
pub use config::{PlannerConfig, SelectionStrategy};
pub use ids::{NodeId, PackageId};
pub use point::{Point, MERGE_TOLERANCE};
pub use point::path_length;
pub use snapshot::{
    parse_packages, PackageRecord, RoadSnapshot, SnapshotError, SnapshotResult, Street,
    VehicleSnapshot, VehicleState,
};
