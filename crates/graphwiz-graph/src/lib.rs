pub mod graph;
pub mod history;
pub mod hit_tester;
pub mod interaction;
pub mod render;
pub mod style;

pub use graph::{Graph, GraphModel};
pub use history::{HistoryAction, HistoryStack};
pub use hit_tester::HitTester;
pub use interaction::{Interaction, InteractionController, PointerButton, PointerEvent};
pub use render::{Renderer, Scene, SceneEdge, SceneNode};
pub use style::{Color, NodePalette};
