//! Graph-subsystem error type.

use thiserror::Error;

use courier_core::NodeId;

/// Errors produced by `courier-graph`.
///
/// `EmptyGraph` and `NoRoute` are ordinary outcomes of degenerate input —
/// callers fall back to straight-line distance rather than aborting.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
