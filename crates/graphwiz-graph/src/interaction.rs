use crate::graph::GraphModel;
use crate::hit_tester::HitTester;
use graphwiz_core::{EdgeId, NodeId, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A click on the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub position: Position,
}

impl PointerEvent {
    pub fn new(button: PointerButton, x: f32, y: f32) -> Self {
        Self {
            button,
            position: Position::new(x, y),
        }
    }

    pub fn primary(x: f32, y: f32) -> Self {
        Self::new(PointerButton::Primary, x, y)
    }

    pub fn secondary(x: f32, y: f32) -> Self {
        Self::new(PointerButton::Secondary, x, y)
    }

    pub fn middle(x: f32, y: f32) -> Self {
        Self::new(PointerButton::Middle, x, y)
    }
}

/// What a click did to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    NodeAdded(NodeId),
    NodeSelected(NodeId),
    EdgeAdded { id: EdgeId, a: NodeId, b: NodeId },
    /// Edge attempt refused (duplicate); the source was still deselected.
    EdgeRejected { a: NodeId, b: NodeId },
    Deselected(NodeId),
    Ignored,
}

impl Interaction {
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::NodeAdded(id) => Some(format!("Added node {}", id)),
            Self::NodeSelected(id) => Some(format!("Selected node {}", id)),
            Self::EdgeAdded { a, b, .. } => Some(format!("Connected {} - {}", a, b)),
            Self::EdgeRejected { a, b } => Some(format!("{} and {} are already connected", a, b)),
            Self::Deselected(_) => Some("Deselected".to_string()),
            Self::Ignored => None,
        }
    }
}

/// Turns canvas clicks into model mutations.
///
/// Primary click on empty space adds a node. Primary click on a node picks
/// it as edge source, or, with a source already picked, connects the two
/// and drops the selection. Clicking the source again only deselects.
/// Secondary and middle clicks drop the selection anywhere.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    hit_tester: HitTester,
}

impl InteractionController {
    pub fn new(hit_tester: HitTester) -> Self {
        Self { hit_tester }
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    pub fn handle(&self, model: &mut GraphModel, event: PointerEvent) -> Interaction {
        match event.button {
            PointerButton::Primary => self.primary_click(model, event.position),
            PointerButton::Secondary | PointerButton::Middle => model
                .deselect()
                .map_or(Interaction::Ignored, Interaction::Deselected),
        }
    }

    fn primary_click(&self, model: &mut GraphModel, pos: Position) -> Interaction {
        let Some(hit) = self.hit_tester.hit_test(model.nodes(), pos) else {
            return Interaction::NodeAdded(model.add_node(pos.x, pos.y));
        };

        let Some(source) = model.selection() else {
            model.select(hit);
            return Interaction::NodeSelected(hit);
        };

        model.deselect();
        if source == hit {
            return Interaction::Deselected(hit);
        }
        match model.add_edge(source, hit) {
            Some(id) => Interaction::EdgeAdded { id, a: source, b: hit },
            None => Interaction::EdgeRejected { a: source, b: hit },
        }
    }
}
