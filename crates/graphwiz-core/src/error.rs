use crate::{EdgeId, NodeId};
use thiserror::Error;

/// Reasons a construction request is refused. Callers at the interaction
/// layer swallow these; they only surface in logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} cannot be connected to itself")]
    SelfLoop(NodeId),
    #[error("nodes {0} and {1} are already connected")]
    DuplicateEdge(NodeId, NodeId),
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),
}
