use eframe::egui;
use graphwiz_app::{Command, Session, SessionError};
use std::time::Duration;

use crate::settings::AppSettings;
use crate::theme::Theme;
use crate::{canvas, controls, status_bar};

/// Repaint interval while a traversal animates.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

pub struct GraphWizApp {
    session: Session,
    settings: AppSettings,
    theme: Theme,
    needs_theme_apply: bool,
}

impl GraphWizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self {
            session: Session::new(settings.session_config()),
            theme: Theme::new(settings.theme),
            settings,
            needs_theme_apply: true,
        }
    }

    fn execute(&mut self, command: Command) {
        match self.session.execute(command) {
            Ok(()) => {}
            // Controls are disabled while busy, so this only races with the
            // run finishing in the same frame.
            Err(SessionError::TraversalActive) => {
                tracing::debug!("{} ignored while traversing", command);
            }
            Err(e) => tracing::error!("{} failed: {}", command, e),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z)) {
            self.execute(Command::Undo);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.execute(Command::Stop);
        }
    }
}

impl eframe::App for GraphWizApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session.stop();
        self.settings.save();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_theme_apply || self.theme.mode != self.settings.theme {
            tracing::info!("Applying theme {:?}", self.settings.theme);
            self.theme = Theme::new(self.settings.theme);
            self.theme.apply(ctx);
            ctx.set_pixels_per_point(self.settings.ui_scale);
            self.needs_theme_apply = false;
        }

        self.session.pump();
        let dirty = self
            .session
            .events()
            .drain()
            .iter()
            .any(|event| event.affects_canvas());
        if dirty {
            ctx.request_repaint();
        }
        if self.session.is_traversing() {
            ctx.request_repaint_after(ANIMATION_FRAME);
        }

        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            let traversing = self.session.is_traversing();
            let output = controls::ui(ui, &mut self.settings, traversing);
            if output.pacing_changed {
                self.session.set_pacing(self.settings.animation.pacing());
            }
            if let Some(command) = output.command {
                self.execute(command);
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::ui(ui, &self.session);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let scene = self.session.scene(self.settings.palette);
                let interactive = !self.session.is_traversing();
                if let Some(event) =
                    canvas::show(ui, &scene, self.theme.canvas_fill(), interactive)
                    && let Err(e) = self.session.pointer(event)
                {
                    tracing::debug!("Click ignored: {}", e);
                }
            });
    }
}
