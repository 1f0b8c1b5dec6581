//! Road graph representation and construction.
//!
//! # Data layout
//!
//! The graph is a plain adjacency list: `node_pos[n]` is the coordinate of
//! node `n` and `adjacency[n]` its outgoing `(neighbor, weight)` arcs.
//! Every street contributes a symmetric pair of arcs, so the adjacency
//! relation is always symmetric with equal weights.  Edge weight is the
//! straight-line distance between the endpoints, never a custom road cost.
//!
//! # Endpoint deduplication
//!
//! Street endpoints rarely coincide exactly with the input point list, so
//! construction resolves each endpoint with a tolerance-based linear scan
//! ([`courier_core::MERGE_TOLERANCE`] per axis) and appends a fresh node
//! on a miss.  The
//! graphs observed in competition are tens to low hundreds of nodes, so
//! the O(n) scan per insertion is not worth a spatial index.
//!
//! Once built, the graph is immutable for the lifetime of the snapshot.

use log::info;

use courier_core::{NodeId, Point, RoadSnapshot};

use crate::{GraphError, GraphResult};

/// Weighted road graph over 2-D map points.
#[derive(Debug, Default)]
pub struct RoadGraph {
    node_pos:  Vec<Point>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
}

impl RoadGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any path query against it reports [`GraphError::EmptyGraph`], which
    /// callers degrade to straight-line distance.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from a road-network snapshot.
    ///
    /// One node is created per input point, at its index in the list.
    /// Each street resolves its endpoints via tolerance-based dedup and
    /// adds a bidirectional edge weighted by the endpoints' Euclidean
    /// distance.  Streets repeating an identical endpoint pair merely add
    /// a redundant equal-weight parallel arc, which is harmless to
    /// shortest-path correctness.
    pub fn build(snapshot: &RoadSnapshot) -> Self {
        let mut graph = Self {
            node_pos:  snapshot.points.iter().map(|&p| Point::from(p)).collect(),
            adjacency: vec![Vec::new(); snapshot.points.len()],
        };

        for street in &snapshot.streets {
            let start = graph.find_or_add_node(street.start_point());
            let end = graph.find_or_add_node(street.end_point());
            let weight = graph.node_pos[start.index()].distance(graph.node_pos[end.index()]);
            graph.adjacency[start.index()].push((end, weight));
            graph.adjacency[end.index()].push((start, weight));
        }

        info!(
            "road graph built: {} nodes, {} arcs from {} streets",
            graph.node_count(),
            graph.edge_count(),
            snapshot.streets.len()
        );
        graph
    }

    /// Resolve `point` to an existing node within
    /// [`courier_core::MERGE_TOLERANCE`] on both axes, or append a fresh
    /// node for it.
    fn find_or_add_node(&mut self, point: Point) -> NodeId {
        for (i, &pos) in self.node_pos.iter().enumerate() {
            if pos.approx_eq(point) {
                return NodeId(i as u32);
            }
        }
        let id = NodeId(self.node_pos.len() as u32);
        self.node_pos.push(point);
        self.adjacency.push(Vec::new());
        id
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed arcs (twice the street count, plus parallels).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Coordinate of `node`, or `NodeNotFound` for an out-of-range id.
    pub fn node_pos(&self, node: NodeId) -> GraphResult<Point> {
        self.node_pos
            .get(node.index())
            .copied()
            .ok_or(GraphError::NodeNotFound(node))
    }

    /// Outgoing `(neighbor, weight)` arcs of `node`.
    pub(crate) fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        &self.adjacency[node.index()]
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `point` by straight-line distance.
    ///
    /// Linear scan with a strict comparison, so ties resolve to the lowest
    /// node id.  Fails with `EmptyGraph` when no nodes exist.
    pub fn nearest_node(&self, point: Point) -> GraphResult<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for (i, &pos) in self.node_pos.iter().enumerate() {
            let dist = point.distance(pos);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((NodeId(i as u32), dist));
            }
        }
        best.map(|(id, _)| id).ok_or(GraphError::EmptyGraph)
    }
}
