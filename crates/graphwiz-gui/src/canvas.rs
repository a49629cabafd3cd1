use eframe::egui;
use graphwiz_graph::{PointerEvent, Renderer, Scene};

use crate::theme::to_egui_color;

const EDGE_WIDTH: f32 = 2.0;
const OUTLINE_WIDTH: f32 = 1.5;

/// Paints a [`Scene`] with an egui painter. Scene coordinates are relative
/// to `origin`, the top-left corner of the canvas.
pub struct CanvasRenderer<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    font: egui::FontId,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            font: egui::FontId::proportional(14.0),
        }
    }

    fn to_screen(&self, p: graphwiz_core::Position) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, scene: &Scene) {
        let edge_stroke = egui::Stroke::new(EDGE_WIDTH, to_egui_color(scene.edge_color));
        for edge in &scene.edges {
            self.painter.line_segment(
                [self.to_screen(edge.from), self.to_screen(edge.to)],
                edge_stroke,
            );
        }

        let outline = egui::Stroke::new(OUTLINE_WIDTH, to_egui_color(scene.outline));
        for node in &scene.nodes {
            let center = self.to_screen(node.center);
            self.painter
                .circle_filled(center, scene.node_radius, to_egui_color(node.fill));
            self.painter.circle_stroke(center, scene.node_radius, outline);
            self.painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &node.label,
                self.font.clone(),
                to_egui_color(node.label_color),
            );
        }
    }
}

/// Draws the scene into the remaining space and reports a click, if any,
/// in canvas coordinates. Clicks are not reported while `interactive` is
/// false.
pub fn show(
    ui: &mut egui::Ui,
    scene: &Scene,
    background: egui::Color32,
    interactive: bool,
) -> Option<PointerEvent> {
    let sense = if interactive {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (response, painter) = ui.allocate_painter(ui.available_size(), sense);
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, background);

    CanvasRenderer::new(&painter, rect.min).render(scene);

    if !interactive {
        return None;
    }
    let pos = response.interact_pointer_pos()? - rect.min;
    if response.clicked() {
        Some(PointerEvent::primary(pos.x, pos.y))
    } else if response.secondary_clicked() {
        Some(PointerEvent::secondary(pos.x, pos.y))
    } else if response.middle_clicked() {
        Some(PointerEvent::middle(pos.x, pos.y))
    } else {
        None
    }
}
