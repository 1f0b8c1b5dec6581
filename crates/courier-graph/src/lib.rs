//! `courier-graph` — road network graph and shortest-path queries.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `RoadGraph` — construction, nearest-node, accessors       |
//! | [`search`] | `shortest_path` (A* / Dijkstra), `NodePath`               |
//! | [`path`]   | `find_path`, `route_distance`, `leg_distance`, `PointPath`|
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Failure semantics
//!
//! Absence of a path and an empty graph are *expected* outcomes, surfaced
//! as [`GraphError::NoRoute`] / [`GraphError::EmptyGraph`] for the caller
//! to match and fall back on (typically to straight-line distance).  They
//! are never fatal.

pub mod error;
pub mod graph;
pub mod path;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::RoadGraph;
pub use path::PointPath;
pub use search::NodePath;
