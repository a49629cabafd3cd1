use eframe::egui;
use egui_phosphor::regular as ph;
use graphwiz_app::Command;
use graphwiz_graph::NodePalette;

use crate::settings::{AppSettings, ThemeMode};
use crate::theme::icon_text;

/// What the user did in the top bar this frame.
#[derive(Debug, Default)]
pub struct ControlsOutput {
    pub command: Option<Command>,
    /// Animation settings changed; pacing must be rebuilt.
    pub pacing_changed: bool,
}

fn icon(command: Command) -> &'static str {
    match command {
        Command::RunBfs => ph::TREE_STRUCTURE,
        Command::RunDfs => ph::GIT_BRANCH,
        Command::Undo => ph::ARROW_U_UP_LEFT,
        Command::Reset => ph::ARROW_COUNTER_CLOCKWISE,
        Command::Clear => ph::TRASH,
        Command::Stop => ph::STOP,
    }
}

pub fn ui(ui: &mut egui::Ui, settings: &mut AppSettings, traversing: bool) -> ControlsOutput {
    let mut output = ControlsOutput::default();

    ui.horizontal(|ui| {
        for command in [
            Command::RunBfs,
            Command::RunDfs,
            Command::Undo,
            Command::Reset,
            Command::Clear,
        ] {
            let button = egui::Button::new(icon_text(icon(command), command.label()));
            if ui.add_enabled(!traversing, button).clicked() {
                output.command = Some(command);
            }
        }

        ui.separator();
        let stop = egui::Button::new(icon_text(icon(Command::Stop), Command::Stop.label()));
        if ui.add_enabled(traversing, stop).clicked() {
            output.command = Some(Command::Stop);
        }

        ui.separator();
        ui.menu_button(icon_text(ph::GEAR, "View"), |ui| {
            ui.label("Theme");
            for mode in ThemeMode::ALL {
                ui.radio_value(&mut settings.theme, mode, mode.label());
            }
            ui.separator();
            ui.label("Palette");
            ui.radio_value(&mut settings.palette, NodePalette::Classic, "Classic");
            ui.radio_value(&mut settings.palette, NodePalette::Pastel, "Pastel");
        });

        ui.separator();
        let speed = ui.add(
            egui::Slider::new(&mut settings.animation.animation_speed, 0.25..=4.0)
                .logarithmic(true)
                .text("Speed"),
        );
        output.pacing_changed = speed.changed();
    });

    output
}
