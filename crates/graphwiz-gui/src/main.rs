#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod canvas;
mod controls;
mod settings;
mod status_bar;
mod theme;

use app::GraphWizApp;
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    // RUST_LOG=graphwiz_traversal=debug etc.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("GraphWiz"),
        ..Default::default()
    };

    eframe::run_native(
        "GraphWiz",
        options,
        Box::new(|cc| Ok(Box::new(GraphWizApp::new(cc, settings)))),
    )
}
