use crate::graph::Graph;
use graphwiz_core::{EdgeId, NodeId};

/// One reversible construction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    AddNode(NodeId),
    AddEdge(EdgeId),
}

impl HistoryAction {
    pub fn description(&self) -> String {
        match self {
            Self::AddNode(id) => format!("Add node {}", id),
            Self::AddEdge(id) => format!("Add edge {}", id),
        }
    }
}

/// Single LIFO shared by node and edge additions. Undo is one-way: there is
/// no redo stack and undoing records nothing.
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    actions: Vec<HistoryAction>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: HistoryAction) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<HistoryAction> {
        self.actions.pop()
    }

    /// Pops the newest action and reverts it on `graph`. Removing a node
    /// also drops any edge still attached to it, even though strict LIFO
    /// order means its edges were already undone.
    pub fn undo(&mut self, graph: &mut Graph) -> Option<HistoryAction> {
        let Some(action) = self.pop() else {
            tracing::debug!("Nothing to undo");
            return None;
        };

        let result = match action {
            HistoryAction::AddNode(id) => graph.remove_node(id).map(|_| ()),
            HistoryAction::AddEdge(id) => graph.remove_edge(id).map(|_| ()),
        };
        if let Err(e) = result {
            // Target was already removed outside of history.
            tracing::debug!("Undo of '{}' found nothing to remove: {}", action.description(), e);
        }
        Some(action)
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryAction> {
        self.actions.iter()
    }
}
