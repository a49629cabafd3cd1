use eframe::egui;
use graphwiz_app::Session;

use crate::theme::badge;

/// Bottom strip: run indicator, path line, last action, graph size.
pub fn ui(ui: &mut egui::Ui, session: &Session) {
    let status = session.status();
    ui.horizontal(|ui| {
        match session.running_algorithm() {
            Some(algorithm) => {
                ui.add(egui::Spinner::new());
                ui.label(
                    egui::RichText::new(format!("{}...", algorithm.short_name()))
                        .color(ui.visuals().warn_fg_color),
                );
            }
            None => badge(ui, "Ready", egui::Color32::LIGHT_GREEN),
        }

        ui.separator();
        ui.label(egui::RichText::new(status.text()).monospace().strong());

        if !status.message().is_empty() {
            ui.separator();
            ui.label(status.message());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let model = session.model();
            badge(
                ui,
                &format!("{} edges", model.edge_count()),
                ui.visuals().faint_bg_color,
            );
            badge(
                ui,
                &format!("{} nodes", model.node_count()),
                ui.visuals().selection.bg_fill,
            );
        });
    });
}
