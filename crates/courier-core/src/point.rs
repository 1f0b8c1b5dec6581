//! Planar coordinate type and scalar geometry helpers.
//!
//! `Point` uses `f64` throughout: map coordinates arrive as JSON doubles and
//! the profit model compares accumulated distances, so single-precision
//! rounding is not worth the memory it would save on graphs of this size.

use std::f64::consts::PI;

/// Per-axis tolerance below which two points are considered the same
/// road-network location.  Used when deduplicating street endpoints during
/// graph construction and when splicing literal endpoints back into a path.
pub const MERGE_TOLERANCE: f64 = 0.1;

/// An (x, y) coordinate pair on the 2-D road map.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Manhattan (taxicab) distance to `other`.
    #[inline]
    pub fn manhattan_distance(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Heading from `self` to `other` in radians, per `atan2`.
    #[inline]
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// `true` when both axes differ by less than [`MERGE_TOLERANCE`].
    ///
    /// This is the graph-construction notion of equality; use `==` for
    /// exact comparison.
    #[inline]
    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() < MERGE_TOLERANCE && (self.y - other.y).abs() < MERGE_TOLERANCE
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Self { x: xy[0], y: xy[1] }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────────

/// Normalize an angle to the `[-π, π]` range.
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Sum of consecutive straight-line segment lengths along `path`.
///
/// Returns `0.0` for paths with fewer than two points.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}
