//! One deliverable package.

use courier_core::{PackageId, Point};

/// A deliverable unit: pickup, optional dropoff, reward, delivered flag.
///
/// The dropoff is unknown until the server discloses it; until then the
/// package exists in the catalog but is ineligible for scoring.  The
/// delivered flag flips irreversibly once the agent is credited — the
/// package is never removed, so reward accounting keeps its history.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id:        PackageId,
    pub pickup:    Point,
    pub dropoff:   Option<Point>,
    pub reward:    f64,
    pub delivered: bool,
}

impl Package {
    pub fn new(id: PackageId, pickup: Point, dropoff: Option<Point>, reward: f64) -> Self {
        Self { id, pickup, dropoff, reward, delivered: false }
    }

    /// Not yet delivered and the dropoff is known.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        !self.delivered && self.dropoff.is_some()
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "package {} (pickup {}, reward {:.2})", self.id.0, self.pickup, self.reward)
    }
}
