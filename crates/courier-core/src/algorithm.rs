//! Shortest-path algorithm selector.

/// Which search the graph runs for a shortest-path query.
///
/// Both algorithms return identical distances on this graph: edge weights
/// are straight-line distances, so the A* heuristic (Euclidean distance to
/// the goal) is admissible.  A* simply expands fewer nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Algorithm {
    /// Informed search with the Euclidean-to-goal heuristic.
    #[default]
    AStar,
    /// Uninformed search (the same machinery with a zero heuristic).
    Dijkstra,
}
