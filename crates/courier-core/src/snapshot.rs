//! Boundary snapshot types.
//!
//! The planner core accepts and emits plain data, independent of the
//! network transport.  Everything the server sends is validated here into
//! typed records; the rest of the workspace never touches raw JSON.
//!
//! # Wire shapes
//!
//! - Road network: `{"points": [[x,y], ...], "streets": [{"start": [x,y],
//!   "end": [x,y]}, ...]}`
//! - Packages: `{"7": {"position": [x,y], "dropoff": [x,y], "reward": n},
//!   ...}` — `dropoff` and `reward` are optional.
//! - Vehicle: `{"position": [x,y], "state": "STOP" | other}` — the core
//!   only consumes the position and whether the vehicle has stopped.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::{PackageId, Point};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors produced while validating a boundary snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("package id {0:?} is not a non-negative integer")]
    InvalidPackageId(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

// ── Road network ──────────────────────────────────────────────────────────────

/// One street segment between two map coordinates.
#[derive(Clone, Debug, Deserialize)]
pub struct Street {
    pub start: [f64; 2],
    pub end:   [f64; 2],
}

/// A road-network snapshot: the raw material for graph construction.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RoadSnapshot {
    #[serde(default)]
    pub points:  Vec<[f64; 2]>,
    #[serde(default)]
    pub streets: Vec<Street>,
}

impl RoadSnapshot {
    /// Parse a road-information response body.
    pub fn from_json(body: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

impl Street {
    #[inline]
    pub fn start_point(&self) -> Point {
        self.start.into()
    }

    #[inline]
    pub fn end_point(&self) -> Point {
        self.end.into()
    }
}

// ── Packages ──────────────────────────────────────────────────────────────────

/// One package entry from the packages snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct PackageRecord {
    /// Pickup location.  Always known at load time.
    pub position: [f64; 2],

    /// Dropoff location.  Absent until the server discloses it; the
    /// package is ineligible for scoring until then.
    #[serde(default)]
    pub dropoff: Option<[f64; 2]>,

    /// Delivery reward.  Absent entries default to 100.0 at catalog load.
    #[serde(default)]
    pub reward: Option<f64>,
}

/// Parse a packages response body into `(id, record)` pairs.
///
/// The wire format keys packages by decimal id strings; a non-numeric key
/// is a protocol violation and fails the whole parse.
pub fn parse_packages(body: &str) -> SnapshotResult<Vec<(PackageId, PackageRecord)>> {
    let raw: BTreeMap<String, PackageRecord> = serde_json::from_str(body)?;
    raw.into_iter()
        .map(|(key, record)| {
            let id = key
                .parse::<u32>()
                .map_err(|_| SnapshotError::InvalidPackageId(key))?;
            Ok((PackageId(id), record))
        })
        .collect()
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// Vehicle motion state as reported by the server.
///
/// The server distinguishes several running-state tags; the planner only
/// cares whether the vehicle has come to a stop, so everything else
/// collapses into [`VehicleState::Running`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum VehicleState {
    #[serde(rename = "STOP")]
    Stop,
    #[serde(other)]
    Running,
}

/// A vehicle-state snapshot: current position plus motion state.
#[derive(Clone, Debug, Deserialize)]
pub struct VehicleSnapshot {
    pub position: [f64; 2],
    pub state:    VehicleState,
}

impl VehicleSnapshot {
    /// Parse a car-state response body.
    pub fn from_json(body: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    #[inline]
    pub fn position_point(&self) -> Point {
        self.position.into()
    }

    /// `true` when a new decision cycle may start.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == VehicleState::Stop
    }
}
