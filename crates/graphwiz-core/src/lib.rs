use serde::{Deserialize, Serialize};
use std::fmt;

pub mod algorithm;
pub mod error;
pub mod visual_state;

pub use algorithm::Algorithm;
pub use error::GraphError;
pub use visual_state::VisualState;

/// Identity of a node. Rendered as its decimal creation number ("0", "1", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Position,
    pub visited: bool,
    pub state: VisualState,
}

impl Node {
    pub fn new(id: NodeId, position: Position) -> Self {
        Self {
            id,
            position,
            visited: false,
            state: VisualState::Unvisited,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Fixed at creation; nodes never move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Label drawn at the node centre.
    pub fn label(&self) -> String {
        self.id.to_string()
    }

    pub fn reset(&mut self) {
        self.visited = false;
        self.state = VisualState::Unvisited;
    }
}

/// Undirected edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// True if this edge joins `u` and `v` in either orientation.
    pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}
