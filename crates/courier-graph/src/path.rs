//! Point-level path queries.
//!
//! Callers think in map coordinates, not node ids.  `find_path` snaps both
//! endpoints to their nearest nodes, searches at the node level, and then
//! splices the literal endpoints back in when they sit more than the merge
//! tolerance away from the snapped nodes — so the returned path always
//! starts and ends at the caller's exact coordinates.

use courier_core::{Algorithm, Point, MERGE_TOLERANCE};

use crate::{GraphError, GraphResult, RoadGraph};

/// The result of a point-level query: map coordinates and total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPath {
    /// Waypoints from the literal start to the literal goal.
    pub points: Vec<Point>,
    /// Total distance, including any spliced snap legs.
    pub distance: f64,
}

impl RoadGraph {
    /// Find a path between two map positions.
    ///
    /// Start and goal within the merge tolerance of each other return a
    /// zero-distance single-point path immediately, before any snapping —
    /// otherwise the splice below would produce an out-and-back detour
    /// through the nearest node.
    pub fn find_path(
        &self,
        start: Point,
        goal: Point,
        algorithm: Algorithm,
    ) -> GraphResult<PointPath> {
        if start.approx_eq(goal) {
            return Ok(PointPath { points: vec![start], distance: 0.0 });
        }

        let start_node = self.nearest_node(start)?;
        let goal_node = self.nearest_node(goal)?;
        let node_path = self.shortest_path(start_node, goal_node, algorithm)?;

        let mut points: Vec<Point> = node_path
            .nodes
            .iter()
            .map(|&n| self.node_pos(n))
            .collect::<GraphResult<_>>()?;
        let mut distance = node_path.distance;

        // Splice the literal endpoints back in when snapping moved them.
        if start.distance(points[0]) > MERGE_TOLERANCE {
            distance += start.distance(points[0]);
            points.insert(0, start);
        }
        if let Some(&last) = points.last() {
            if goal.distance(last) > MERGE_TOLERANCE {
                distance += last.distance(goal);
                points.push(goal);
            }
        }

        Ok(PointPath { points, distance })
    }

    /// Graph-path distance between two positions, falling back to the
    /// straight-line distance when no path exists.
    ///
    /// This is the shared degradation used by every profit and ordering
    /// computation: a missing route never aborts a scoring pass.
    pub fn leg_distance(&self, from: Point, to: Point, algorithm: Algorithm) -> f64 {
        match self.find_path(from, to, algorithm) {
            Ok(path) => path.distance,
            Err(GraphError::EmptyGraph | GraphError::NoRoute { .. }) => from.distance(to),
            Err(GraphError::NodeNotFound(_)) => from.distance(to),
        }
    }

    /// Total distance of a route through `waypoints` in order.
    ///
    /// Each leg uses `find_path`; legs with no graph path degrade to the
    /// straight-line distance individually, so one disconnected leg never
    /// poisons the whole route.
    pub fn route_distance(&self, waypoints: &[Point], algorithm: Algorithm) -> f64 {
        waypoints
            .windows(2)
            .map(|leg| self.leg_distance(leg[0], leg[1], algorithm))
            .sum()
    }
}
