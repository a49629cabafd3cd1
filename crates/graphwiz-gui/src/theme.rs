//! Catppuccin visuals, phosphor icon font and a few shared widgets.

use eframe::egui::{self, Color32, Vec2};

use crate::settings::ThemeMode;

pub mod spacing {
    pub const PANEL_PADDING: f32 = 8.0;
    pub const ITEM_SPACING: f32 = 6.0;
    pub const BUTTON_PADDING: f32 = 8.0;
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub flavor: catppuccin_egui::Theme,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let flavor = match mode {
            ThemeMode::Latte => catppuccin_egui::LATTE,
            ThemeMode::Frappe => catppuccin_egui::FRAPPE,
            ThemeMode::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeMode::Mocha => catppuccin_egui::MOCHA,
        };
        Self { mode, flavor }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        catppuccin_egui::set_theme(ctx, self.flavor);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(spacing::ITEM_SPACING);
        style.spacing.button_padding =
            Vec2::new(spacing::BUTTON_PADDING, spacing::BUTTON_PADDING / 2.0);
        style.spacing.window_margin = egui::Margin::same(spacing::PANEL_PADDING as i8);
        ctx.set_style(style);
    }

    /// Canvas background. Nodes keep their palette colours on every flavour,
    /// so the canvas stays light.
    pub fn canvas_fill(&self) -> Color32 {
        match self.mode {
            ThemeMode::Latte => self.flavor.base,
            _ => self.flavor.text,
        }
    }
}

pub fn to_egui_color(color: graphwiz_graph::Color) -> Color32 {
    let (r, g, b, a) = color.to_tuple();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Small rounded label, used in the status bar.
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::default()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .small()
                    .color(ui.visuals().strong_text_color()),
            );
        });
}

/// Icon followed by text, for toolbar buttons.
pub fn icon_text(icon: &str, text: &str) -> String {
    format!("{} {}", icon, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_keeps_channels() {
        let color = to_egui_color(graphwiz_graph::Color::rgb(12, 34, 56));
        assert_eq!(color, Color32::from_rgb(12, 34, 56));
    }

    #[test]
    fn test_every_mode_has_a_flavor() {
        for mode in ThemeMode::ALL {
            assert_eq!(Theme::new(mode).mode, mode);
        }
    }
}
