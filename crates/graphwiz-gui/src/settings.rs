use anyhow::Context;
use graphwiz_app::SessionConfig;
use graphwiz_graph::{NodePalette, hit_tester::DEFAULT_NODE_RADIUS};
use graphwiz_traversal::Pacing;
use graphwiz_traversal::pacing::{DEFAULT_DISCOVERY_PAUSE_MS, DEFAULT_PROCESSING_PAUSE_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MIN_UI_SCALE: f32 = 0.5;
const MAX_UI_SCALE: f32 = 4.0;
const MIN_NODE_RADIUS: f32 = 4.0;
const MIN_ANIMATION_SPEED: f32 = 0.05;

/// `value` clamped to `min..=max`; non-finite values become `fallback`.
fn bounded(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemeMode,
    pub ui_scale: f32,
    pub node_radius: f32,
    pub hit_tolerance: f32,
    pub palette: NodePalette,
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[serde(alias = "Light")]
    Latte,
    Frappe,
    Macchiato,
    #[default]
    #[serde(alias = "Dark")]
    Mocha,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 4] = [
        ThemeMode::Latte,
        ThemeMode::Frappe,
        ThemeMode::Macchiato,
        ThemeMode::Mocha,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latte => "Latte",
            Self::Frappe => "Frappé",
            Self::Macchiato => "Macchiato",
            Self::Mocha => "Mocha",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub processing_pause_ms: u64,
    pub discovery_pause_ms: u64,
    /// Divides both pauses; 2.0 runs twice as fast.
    pub animation_speed: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            processing_pause_ms: DEFAULT_PROCESSING_PAUSE_MS,
            discovery_pause_ms: DEFAULT_DISCOVERY_PAUSE_MS,
            animation_speed: 1.0,
        }
    }
}

impl AnimationSettings {
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.processing_pause_ms, self.discovery_pause_ms)
            .with_speed(self.animation_speed)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Mocha,
            ui_scale: 1.0,
            node_radius: DEFAULT_NODE_RADIUS,
            hit_tolerance: 0.0,
            palette: NodePalette::Classic,
            animation: AnimationSettings::default(),
        }
    }
}

impl AppSettings {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            node_radius: self.node_radius,
            hit_tolerance: self.hit_tolerance,
            pacing: self.animation.pacing(),
        }
    }

    /// `<config_dir>/graphwiz/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("graphwiz").join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("No config directory on this platform, using default settings");
                Self::default()
            }
        }
    }

    /// Reads settings from `path`. A missing file gives defaults; an
    /// unreadable or malformed one gives defaults and a warning.
    pub fn load_from(path: &Path) -> Self {
        tracing::info!("Loading settings from {:?}", path);
        if !path.exists() {
            tracing::info!("Settings file not found, using defaults");
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!("Falling back to default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Pulls hand-edited values back into a usable range.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.ui_scale = bounded(self.ui_scale, MIN_UI_SCALE, MAX_UI_SCALE, defaults.ui_scale);
        self.node_radius = bounded(
            self.node_radius,
            MIN_NODE_RADIUS,
            f32::MAX,
            defaults.node_radius,
        );
        self.hit_tolerance = bounded(self.hit_tolerance, 0.0, f32::MAX, defaults.hit_tolerance);
        self.animation.animation_speed = bounded(
            self.animation.animation_speed,
            MIN_ANIMATION_SPEED,
            f32::MAX,
            defaults.animation.animation_speed,
        );
        self
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::error!("Failed to save settings: {:#}", e);
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
