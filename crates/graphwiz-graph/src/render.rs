//! Drawing contract between the model and whatever paints it.

use crate::graph::GraphModel;
use crate::style::{Color, NodePalette};
use graphwiz_core::{EdgeId, NodeId, Position, VisualState};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub label: String,
    pub center: Position,
    pub state: VisualState,
    pub fill: Color,
    pub label_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    pub id: EdgeId,
    pub from: Position,
    pub to: Position,
}

/// Everything a renderer needs for one frame, already resolved to
/// positions and colours. Edges come first in draw order so nodes cover
/// the line ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    pub node_radius: f32,
    pub outline: Color,
    pub edge_color: Color,
}

impl Scene {
    pub fn capture(model: &GraphModel, palette: NodePalette, node_radius: f32) -> Self {
        let positions: HashMap<NodeId, Position> = model
            .nodes()
            .iter()
            .map(|n| (n.id(), n.position()))
            .collect();

        let nodes = model
            .nodes()
            .iter()
            .map(|n| SceneNode {
                id: n.id(),
                label: n.label(),
                center: n.position(),
                state: n.state,
                fill: palette.fill(n.state),
                label_color: palette.label(n.state),
            })
            .collect();

        let edges = model
            .edges()
            .iter()
            .filter_map(|e| {
                let from = *positions.get(&e.a)?;
                let to = *positions.get(&e.b)?;
                Some(SceneEdge { id: e.id, from, to })
            })
            .collect();

        Self {
            nodes,
            edges,
            node_radius,
            outline: palette.outline(),
            edge_color: palette.edge(),
        }
    }
}

/// Paints a [`Scene`]. Called after every state-affecting change.
pub trait Renderer {
    fn render(&mut self, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Scene>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, scene: &Scene) {
            self.frames.push(scene.clone());
        }
    }

    #[test]
    fn test_capture_resolves_positions_and_colours() {
        let mut model = GraphModel::new();
        let a = model.add_node(10.0, 20.0);
        let b = model.add_node(110.0, 20.0);
        model.add_edge(a, b);
        model.set_visual_state(b, VisualState::Done);

        let scene = Scene::capture(&model, NodePalette::Classic, 20.0);
        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.nodes[0].label, "0");
        assert_eq!(scene.nodes[1].fill, NodePalette::Classic.fill(VisualState::Done));
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.edges[0].from, Position::new(10.0, 20.0));
        assert_eq!(scene.edges[0].to, Position::new(110.0, 20.0));
    }

    #[test]
    fn test_capture_resolves_edges_by_node_id() {
        let mut model = GraphModel::new();
        let ids: Vec<_> = (0..3).map(|i| model.add_node(i as f32 * 50.0, 0.0)).collect();
        model.add_edge(ids[0], ids[1]);
        model.add_edge(ids[1], ids[2]);
        model.undo();
        model.undo();
        model.add_edge(ids[0], ids[2]);

        let scene = Scene::capture(&model, NodePalette::Classic, 20.0);
        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.edges[0].from, Position::new(0.0, 0.0));
        assert_eq!(scene.edges[0].to, Position::new(100.0, 0.0));
    }

    #[test]
    fn test_renderer_receives_each_frame() {
        let mut model = GraphModel::new();
        let mut renderer = RecordingRenderer::default();

        model.add_node(0.0, 0.0);
        renderer.render(&Scene::capture(&model, NodePalette::Pastel, 24.0));
        model.add_node(60.0, 0.0);
        renderer.render(&Scene::capture(&model, NodePalette::Pastel, 24.0));

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[1].nodes.len(), 2);
        assert_eq!(renderer.frames[1].node_radius, 24.0);
    }
}
