use crate::history::{HistoryAction, HistoryStack};
use graphwiz_core::{Edge, EdgeId, GraphError, Node, NodeId, Position, VisualState};

/// Node and edge storage. Both sequences keep insertion order, which
/// drives traversal start and neighbour order.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_edge_id: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next node id: the node count while ids are contiguous, otherwise one
    /// past the largest live id so a removed id in the middle is never shared.
    fn next_node_id(&self) -> NodeId {
        let next = self
            .nodes
            .iter()
            .map(|n| n.id().0 + 1)
            .max()
            .unwrap_or(0);
        NodeId(next)
    }

    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = self.next_node_id();
        self.nodes.push(Node::new(id, position));
        id
    }

    pub fn try_add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        for id in [u, v] {
            if !self.contains_node(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if self.edges.iter().any(|e| e.connects(u, v)) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge { id, a: u, b: v });
        Ok(id)
    }

    /// Removes the node together with every edge that references it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let idx = self
            .nodes
            .iter()
            .position(|n| n.id() == id)
            .ok_or(GraphError::UnknownNode(id))?;
        let node = self.nodes.remove(idx);

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        let cascaded = before - self.edges.len();
        if cascaded > 0 {
            tracing::debug!("Removing node {} also removed {} edge(s)", id, cascaded);
        }
        Ok(node)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, GraphError> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(GraphError::UnknownEdge(id))?;
        Ok(self.edges.remove(idx))
    }

    /// Opposite endpoints of every edge touching `id`, in edge insertion order.
    pub fn neighbors_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |e| e.opposite(id))
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id() == id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_edge_id = 0;
    }
}

/// The editable graph: storage, undo history and the pending edge source.
///
/// Single-writer. The owner (the UI context) is the only code that mutates
/// it; traversals work from a plan computed up front and hand state changes
/// back to the owner.
#[derive(Debug, Default)]
pub struct GraphModel {
    graph: Graph,
    history: HistoryStack,
    selection: Option<NodeId>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, x: f32, y: f32) -> NodeId {
        let id = self.graph.add_node(Position::new(x, y));
        self.history.push(HistoryAction::AddNode(id));
        tracing::debug!("Added node {} at ({}, {})", id, x, y);
        id
    }

    /// Connects `u` and `v`. Self-loops, unknown endpoints and duplicates
    /// (either orientation) are refused without touching the graph or history.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        match self.try_add_edge(u, v) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("Edge rejected: {}", e);
                None
            }
        }
    }

    pub fn try_add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId, GraphError> {
        let id = self.graph.try_add_edge(u, v)?;
        self.history.push(HistoryAction::AddEdge(id));
        Ok(id)
    }

    /// Removes a node and its edges. Does not record history.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let removed = self.graph.remove_node(id).is_ok();
        if removed && self.selection == Some(id) {
            self.selection = None;
        }
        removed
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        self.graph.remove_edge(id).is_ok()
    }

    /// Reverts the most recent construction step, if any.
    pub fn undo(&mut self) -> Option<HistoryAction> {
        let action = self.history.undo(&mut self.graph)?;
        if let HistoryAction::AddNode(id) = action
            && self.selection == Some(id)
        {
            self.selection = None;
        }
        Some(action)
    }

    pub fn neighbors_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_of(id)
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.history.clear();
        self.selection = None;
    }

    /// Every node back to `Unvisited`, not visited, and nothing selected.
    pub fn reset_visual_state(&mut self) {
        self.selection = None;
        self.graph.nodes.iter_mut().for_each(Node::reset);
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Marks `id` as the pending edge source, replacing any previous one.
    pub fn select(&mut self, id: NodeId) -> bool {
        if !self.graph.contains_node(id) {
            return false;
        }
        self.deselect();
        if let Some(node) = self.graph.node_mut(id) {
            node.state = VisualState::Selected;
        }
        self.selection = Some(id);
        true
    }

    /// Drops the selection; the node goes back to `Unvisited`.
    pub fn deselect(&mut self) -> Option<NodeId> {
        let id = self.selection.take()?;
        if let Some(node) = self.graph.node_mut(id) {
            node.state = VisualState::Unvisited;
        }
        Some(id)
    }

    /// Applies a traversal transition. Any state other than `Unvisited`
    /// also marks the node visited.
    pub fn set_visual_state(&mut self, id: NodeId, state: VisualState) -> bool {
        match self.graph.node_mut(id) {
            Some(node) => {
                node.state = state;
                if state.is_traversal_state() {
                    node.visited = true;
                }
                true
            }
            None => false,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node(id)
    }

    /// Start node for traversals: the oldest live node.
    pub fn first_node(&self) -> Option<NodeId> {
        self.graph.nodes().first().map(Node::id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_nodes(count: usize) -> (GraphModel, Vec<NodeId>) {
        let mut model = GraphModel::new();
        let ids = (0..count)
            .map(|i| model.add_node(i as f32 * 50.0, 10.0))
            .collect();
        (model, ids)
    }

    #[test]
    fn test_node_ids_follow_creation_count() {
        let (model, ids) = model_with_nodes(3);
        assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(model.node_count(), 3);
        assert_eq!(model.history().len(), 3);
    }

    #[test]
    fn test_removed_middle_id_is_not_shared() {
        let (mut model, ids) = model_with_nodes(3);
        assert!(model.remove_node(ids[1]));
        let next = model.add_node(0.0, 0.0);
        assert_eq!(next, NodeId(3));
    }

    #[test]
    fn test_undo_then_add_reuses_creation_number() {
        let (mut model, _) = model_with_nodes(2);
        model.undo();
        assert_eq!(model.add_node(5.0, 5.0), NodeId(1));
    }

    #[test]
    fn test_rejects_self_edge() {
        let (mut model, ids) = model_with_nodes(1);
        assert_eq!(model.add_edge(ids[0], ids[0]), None);
        assert_eq!(
            model.try_add_edge(ids[0], ids[0]),
            Err(GraphError::SelfLoop(ids[0]))
        );
        assert_eq!(model.edge_count(), 0);
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_edge_in_both_orientations() {
        let (mut model, ids) = model_with_nodes(2);
        assert!(model.add_edge(ids[0], ids[1]).is_some());
        assert_eq!(model.add_edge(ids[0], ids[1]), None);
        assert_eq!(
            model.try_add_edge(ids[1], ids[0]),
            Err(GraphError::DuplicateEdge(ids[1], ids[0]))
        );
        assert_eq!(model.edge_count(), 1);
        assert_eq!(model.history().len(), 3);
    }

    #[test]
    fn test_rejects_unknown_endpoint() {
        let (mut model, ids) = model_with_nodes(1);
        assert_eq!(
            model.try_add_edge(ids[0], NodeId(9)),
            Err(GraphError::UnknownNode(NodeId(9)))
        );
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_follow_edge_insertion_order() {
        let (mut model, ids) = model_with_nodes(4);
        model.add_edge(ids[3], ids[0]);
        model.add_edge(ids[0], ids[2]);
        model.add_edge(ids[1], ids[0]);
        let neighbors: Vec<_> = model.neighbors_of(ids[0]).collect();
        assert_eq!(neighbors, vec![ids[3], ids[2], ids[1]]);
    }

    #[test]
    fn test_remove_node_cascades_edges() {
        let (mut model, ids) = model_with_nodes(3);
        model.add_edge(ids[0], ids[1]);
        model.add_edge(ids[1], ids[2]);
        model.add_edge(ids[0], ids[2]);
        assert!(model.remove_node(ids[1]));
        assert_eq!(model.edge_count(), 1);
        assert!(model.edges()[0].connects(ids[0], ids[2]));
    }

    #[test]
    fn test_remove_edge_keeps_nodes() {
        let (mut model, ids) = model_with_nodes(2);
        let edge = model.add_edge(ids[0], ids[1]).unwrap();
        assert!(model.remove_edge(edge));
        assert!(!model.remove_edge(edge));
        assert_eq!(model.node_count(), 2);
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn test_add_node_then_undo_restores_counts() {
        let (mut model, ids) = model_with_nodes(2);
        model.add_edge(ids[0], ids[1]);
        let (nodes, edges) = (model.node_count(), model.edge_count());

        model.add_node(99.0, 99.0);
        assert_eq!(model.undo(), Some(HistoryAction::AddNode(NodeId(2))));
        assert_eq!(model.node_count(), nodes);
        assert_eq!(model.edge_count(), edges);
    }

    #[test]
    fn test_undo_edge_then_nodes() {
        let mut model = GraphModel::new();
        let a = model.add_node(0.0, 0.0);
        let b = model.add_node(100.0, 0.0);
        model.add_edge(a, b);

        model.undo();
        assert_eq!(model.node_count(), 2);
        assert_eq!(model.edge_count(), 0);

        model.undo();
        model.undo();
        assert_eq!(model.node_count(), 0);
        assert_eq!(model.edge_count(), 0);
        assert!(model.history().is_empty());
    }

    #[test]
    fn test_undo_of_selected_node_clears_selection() {
        let (mut model, ids) = model_with_nodes(2);
        model.select(ids[1]);
        model.undo();
        assert_eq!(model.selection(), None);
    }

    #[test]
    fn test_select_and_deselect_update_visual_state() {
        let (mut model, ids) = model_with_nodes(2);
        assert!(model.select(ids[0]));
        assert_eq!(model.node(ids[0]).unwrap().state, VisualState::Selected);

        assert!(model.select(ids[1]));
        assert_eq!(model.node(ids[0]).unwrap().state, VisualState::Unvisited);
        assert_eq!(model.selection(), Some(ids[1]));

        assert_eq!(model.deselect(), Some(ids[1]));
        assert_eq!(model.node(ids[1]).unwrap().state, VisualState::Unvisited);
        assert!(!model.select(NodeId(42)));
    }

    #[test]
    fn test_reset_visual_state_is_idempotent() {
        let (mut model, ids) = model_with_nodes(3);
        model.set_visual_state(ids[0], VisualState::Done);
        model.set_visual_state(ids[1], VisualState::Processing);
        model.select(ids[2]);

        model.reset_visual_state();
        let once: Vec<_> = model.nodes().to_vec();
        model.reset_visual_state();

        assert_eq!(model.nodes(), once.as_slice());
        assert_eq!(model.selection(), None);
        assert!(
            model
                .nodes()
                .iter()
                .all(|n| !n.visited && n.state == VisualState::Unvisited)
        );
    }

    #[test]
    fn test_set_visual_state_marks_visited() {
        let (mut model, ids) = model_with_nodes(1);
        assert!(model.set_visual_state(ids[0], VisualState::Enqueued));
        assert!(model.node(ids[0]).unwrap().visited);
        assert!(!model.set_visual_state(NodeId(5), VisualState::Done));
    }

    #[test]
    fn test_clear_empties_everything() {
        let (mut model, ids) = model_with_nodes(3);
        model.add_edge(ids[0], ids[1]);
        model.select(ids[2]);

        model.clear();
        assert_eq!(model.node_count(), 0);
        assert_eq!(model.edge_count(), 0);
        assert!(model.history().is_empty());
        assert_eq!(model.selection(), None);
        assert_eq!(model.undo(), None);
        assert_eq!(model.first_node(), None);
    }
}
