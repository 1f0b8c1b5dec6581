//! Node-level shortest-path search.
//!
//! A* and Dijkstra share one search body: Dijkstra is A* with a zero
//! heuristic.  The A* heuristic is the Euclidean distance to the goal,
//! which is admissible here because every edge weight *is* a Euclidean
//! distance — so both algorithms return the same optimal distance.
//!
//! The priority queue uses lazy deletion: decreasing a node's cost pushes
//! a fresh entry instead of updating the old one, and stale entries are
//! skipped on pop.  A node is finalized (closed) the first time it pops
//! with the minimum `f`, and is never re-expanded afterwards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::{Algorithm, NodeId, Point};

use crate::{GraphError, GraphResult, RoadGraph};

/// The result of a node-level query: visited node ids and total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath {
    /// Node ids from source to goal, inclusive.
    pub nodes: Vec<NodeId>,
    /// Sum of traversed edge weights.
    pub distance: f64,
}

impl NodePath {
    /// `true` if the source and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Priority-queue entry ──────────────────────────────────────────────────────

/// Heap entry keyed by `f = g + h`.  `BinaryHeap` is a max-heap, so the
/// comparison is reversed to pop the smallest `f` first; the node id is a
/// secondary key for deterministic tie-breaking.
#[derive(Debug, PartialEq)]
struct QueueEntry {
    f:    f64,
    node: NodeId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.0.cmp(&self.node.0))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

impl RoadGraph {
    /// Shortest path from `from` to `to` by summed edge weight.
    ///
    /// `from == to` returns the trivial single-node, zero-distance path
    /// without searching.  An unreachable goal reports
    /// [`GraphError::NoRoute`] — an expected outcome, not a failure.
    pub fn shortest_path(
        &self,
        from: NodeId,
        to: NodeId,
        algorithm: Algorithm,
    ) -> GraphResult<NodePath> {
        let n = self.node_count();
        if from.index() >= n {
            return Err(GraphError::NodeNotFound(from));
        }
        if to.index() >= n {
            return Err(GraphError::NodeNotFound(to));
        }
        if from == to {
            return Ok(NodePath { nodes: vec![from], distance: 0.0 });
        }

        let goal_pos = self.node_pos(to)?;
        let heuristic = |p: Point| -> f64 {
            match algorithm {
                Algorithm::AStar => p.distance(goal_pos),
                Algorithm::Dijkstra => 0.0,
            }
        };

        // g[v] = best known cost to reach v; prev[v] = predecessor on that path.
        let mut g      = vec![f64::INFINITY; n];
        let mut prev   = vec![NodeId::INVALID; n];
        let mut closed = vec![false; n];

        let mut heap = BinaryHeap::new();
        g[from.index()] = 0.0;
        heap.push(QueueEntry {
            f:    heuristic(self.node_pos(from)?),
            node: from,
        });

        while let Some(QueueEntry { node, .. }) = heap.pop() {
            if closed[node.index()] {
                continue; // stale entry — a cheaper one was finalized earlier
            }
            if node == to {
                return Ok(self.reconstruct(&prev, from, to, g[to.index()]));
            }
            closed[node.index()] = true;

            for &(neighbor, weight) in self.neighbors(node) {
                if closed[neighbor.index()] {
                    continue;
                }
                let tentative = g[node.index()] + weight;
                if tentative < g[neighbor.index()] {
                    g[neighbor.index()] = tentative;
                    prev[neighbor.index()] = node;
                    let pos = self.node_pos(neighbor)?;
                    heap.push(QueueEntry {
                        f:    tentative + heuristic(pos),
                        node: neighbor,
                    });
                }
            }
        }

        Err(GraphError::NoRoute { from, to })
    }

    fn reconstruct(&self, prev: &[NodeId], from: NodeId, to: NodeId, distance: f64) -> NodePath {
        let mut nodes = vec![to];
        let mut cur = to;
        while cur != from {
            cur = prev[cur.index()];
            nodes.push(cur);
        }
        nodes.reverse();
        NodePath { nodes, distance }
    }
}
