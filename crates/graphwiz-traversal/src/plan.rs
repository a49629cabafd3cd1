use graphwiz_core::{Algorithm, NodeId, VisualState};
use graphwiz_graph::GraphModel;
use std::collections::{HashSet, VecDeque};

/// Pause the runner takes after applying a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    None,
    /// After a breadth-first discovery.
    Short,
    /// After a node enters expansion.
    Long,
}

/// One visual-state change in a planned walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub node: NodeId,
    pub state: VisualState,
    pub pause: Pause,
    /// First time this node is reached; its id joins the path here.
    pub discovers: bool,
}

impl Transition {
    fn discover(node: NodeId, state: VisualState, pause: Pause) -> Self {
        Self {
            node,
            state,
            pause,
            discovers: true,
        }
    }

    fn change(node: NodeId, state: VisualState, pause: Pause) -> Self {
        Self {
            node,
            state,
            pause,
            discovers: false,
        }
    }
}

/// A transition together with the path accumulated up to and including it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStep {
    pub node: NodeId,
    pub state: VisualState,
    pub pause: Pause,
    pub discovered: bool,
    pub path: String,
}

/// The full, ordered list of transitions for one run, computed from the
/// model as it was when the run started. Later edits to the model do not
/// affect a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPlan {
    algorithm: Algorithm,
    start: NodeId,
    transitions: Vec<Transition>,
}

impl TraversalPlan {
    /// Plans a walk from the oldest node. `None` for an empty graph.
    pub fn build(model: &GraphModel, algorithm: Algorithm) -> Option<Self> {
        let start = model.first_node()?;
        let transitions = match algorithm {
            Algorithm::BreadthFirst => breadth_first(model, start),
            Algorithm::DepthFirst => depth_first(model, start),
        };
        Some(Self {
            algorithm,
            start,
            transitions,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Nodes in first-visit order.
    pub fn visit_order(&self) -> Vec<NodeId> {
        self.transitions
            .iter()
            .filter(|t| t.discovers)
            .map(|t| t.node)
            .collect()
    }

    /// Final dash-joined path, e.g. `"0-1-2-3"`.
    pub fn path(&self) -> String {
        join_path(&self.visit_order())
    }

    /// Lazily replays the plan from the beginning, accumulating the path.
    /// Each call starts a fresh replay.
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            transitions: self.transitions.iter(),
            path: String::new(),
        }
    }
}

pub fn join_path(ids: &[NodeId]) -> String {
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

pub struct Steps<'a> {
    transitions: std::slice::Iter<'a, Transition>,
    path: String,
}

impl Iterator for Steps<'_> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.transitions.next()?;
        if t.discovers {
            if !self.path.is_empty() {
                self.path.push('-');
            }
            self.path.push_str(&t.node.to_string());
        }
        Some(TraversalStep {
            node: t.node,
            state: t.state,
            pause: t.pause,
            discovered: t.discovers,
            path: self.path.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.transitions.size_hint()
    }
}

/// FIFO walk. The start node is shown as `Frontier` and never as
/// `Processing`; every other node goes `Enqueued` -> `Processing` -> `Done`.
fn breadth_first(model: &GraphModel, start: NodeId) -> Vec<Transition> {
    let mut transitions = Vec::with_capacity(model.node_count() * 3);
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    // The long pause belongs to the start node's dequeue.
    transitions.push(Transition::discover(start, VisualState::Frontier, Pause::Long));

    while let Some(current) = queue.pop_front() {
        if current != start {
            transitions.push(Transition::change(current, VisualState::Processing, Pause::Long));
        }
        for neighbor in model.neighbors_of(current) {
            if visited.insert(neighbor) {
                transitions.push(Transition::discover(neighbor, VisualState::Enqueued, Pause::Short));
                queue.push_back(neighbor);
            }
        }
        transitions.push(Transition::change(current, VisualState::Done, Pause::None));
    }
    transitions
}

fn depth_first(model: &GraphModel, start: NodeId) -> Vec<Transition> {
    let mut transitions = Vec::with_capacity(model.node_count() * 2);
    let mut visited = HashSet::new();
    visit(model, start, &mut visited, &mut transitions);
    transitions
}

fn visit(
    model: &GraphModel,
    current: NodeId,
    visited: &mut HashSet<NodeId>,
    transitions: &mut Vec<Transition>,
) {
    visited.insert(current);
    transitions.push(Transition::discover(current, VisualState::Processing, Pause::Long));

    for neighbor in model.neighbors_of(current) {
        if !visited.contains(&neighbor) {
            visit(model, neighbor, visited, transitions);
        }
    }

    transitions.push(Transition::change(current, VisualState::Done, Pause::None));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes 0..=3 with edges (0,1), (0,2), (1,3) in that order.
    fn diamond() -> GraphModel {
        let mut model = GraphModel::new();
        let ids: Vec<_> = (0..4).map(|i| model.add_node(i as f32 * 60.0, 0.0)).collect();
        model.add_edge(ids[0], ids[1]);
        model.add_edge(ids[0], ids[2]);
        model.add_edge(ids[1], ids[3]);
        model
    }

    fn states_for(plan: &TraversalPlan, node: NodeId) -> Vec<VisualState> {
        plan.transitions()
            .iter()
            .filter(|t| t.node == node)
            .map(|t| t.state)
            .collect()
    }

    #[test]
    fn test_bfs_path() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::BreadthFirst).unwrap();
        assert_eq!(plan.path(), "0-1-2-3");
        assert_eq!(plan.start(), NodeId(0));
    }

    #[test]
    fn test_dfs_path() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::DepthFirst).unwrap();
        assert_eq!(plan.path(), "0-1-3-2");
    }

    #[test]
    fn test_bfs_state_protocol() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::BreadthFirst).unwrap();
        assert_eq!(
            states_for(&plan, NodeId(0)),
            vec![VisualState::Frontier, VisualState::Done]
        );
        assert_eq!(
            states_for(&plan, NodeId(3)),
            vec![VisualState::Enqueued, VisualState::Processing, VisualState::Done]
        );
    }

    #[test]
    fn test_bfs_transition_sequence() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::BreadthFirst).unwrap();
        let seq: Vec<_> = plan
            .transitions()
            .iter()
            .map(|t| (t.node.0, t.state, t.pause))
            .collect();
        use Pause::*;
        use VisualState::*;
        assert_eq!(
            seq,
            vec![
                (0, Frontier, Long),
                (1, Enqueued, Short),
                (2, Enqueued, Short),
                (0, Done, None),
                (1, Processing, Long),
                (3, Enqueued, Short),
                (1, Done, None),
                (2, Processing, Long),
                (2, Done, None),
                (3, Processing, Long),
                (3, Done, None),
            ]
        );
    }

    #[test]
    fn test_dfs_transition_sequence() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::DepthFirst).unwrap();
        let seq: Vec<_> = plan
            .transitions()
            .iter()
            .map(|t| (t.node.0, t.state))
            .collect();
        use VisualState::*;
        assert_eq!(
            seq,
            vec![
                (0, Processing),
                (1, Processing),
                (3, Processing),
                (3, Done),
                (1, Done),
                (2, Processing),
                (2, Done),
                (0, Done),
            ]
        );
    }

    #[test]
    fn test_neighbor_order_follows_edge_insertion_not_ids() {
        let mut model = GraphModel::new();
        let ids: Vec<_> = (0..3).map(|_| model.add_node(0.0, 0.0)).collect();
        model.add_edge(ids[0], ids[2]);
        model.add_edge(ids[0], ids[1]);

        let bfs = TraversalPlan::build(&model, Algorithm::BreadthFirst).unwrap();
        let dfs = TraversalPlan::build(&model, Algorithm::DepthFirst).unwrap();
        assert_eq!(bfs.path(), "0-2-1");
        assert_eq!(dfs.path(), "0-2-1");
    }

    #[test]
    fn test_disconnected_nodes_are_not_reached() {
        let mut model = GraphModel::new();
        model.add_node(0.0, 0.0);
        model.add_node(100.0, 0.0);

        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let plan = TraversalPlan::build(&model, algorithm).unwrap();
            assert_eq!(plan.path(), "0");
            assert!(states_for(&plan, NodeId(1)).is_empty());
        }
    }

    #[test]
    fn test_empty_graph_has_no_plan() {
        let model = GraphModel::new();
        assert!(TraversalPlan::build(&model, Algorithm::BreadthFirst).is_none());
        assert!(TraversalPlan::build(&model, Algorithm::DepthFirst).is_none());
    }

    #[test]
    fn test_steps_accumulate_path_and_restart() {
        let plan = TraversalPlan::build(&diamond(), Algorithm::DepthFirst).unwrap();
        let first: Vec<_> = plan.steps().collect();
        let paths: Vec<_> = first
            .iter()
            .filter(|s| s.discovered)
            .map(|s| s.path.as_str())
            .collect();
        assert_eq!(paths, vec!["0", "0-1", "0-1-3", "0-1-3-2"]);
        assert_eq!(first.last().unwrap().path, "0-1-3-2");

        let again: Vec<_> = plan.steps().collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_start_is_oldest_live_node() {
        let mut model = GraphModel::new();
        let a = model.add_node(0.0, 0.0);
        let b = model.add_node(50.0, 0.0);
        model.add_edge(a, b);
        model.remove_node(a);
        model.add_node(90.0, 0.0);

        let plan = TraversalPlan::build(&model, Algorithm::BreadthFirst).unwrap();
        assert_eq!(plan.start(), b);
        assert_eq!(plan.path(), "1");
    }
}
