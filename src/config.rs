//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperwire_core::{GeometryError, RotationState, TickControls, Vec3};
use hyperwire_render::{ColorScheme, TubeSettings};
use crate::input::{InputAction, ScriptedAction};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tick rate and freezing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rotation toggles
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Scene file
    #[serde(default)]
    pub scene: SceneConfig,
    /// Edge and vertex colors
    #[serde(default)]
    pub colors: ColorsConfig,
    /// Scripted toggles
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional user overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HW_ANIMATION__FROZEN=true -> animation.frozen = true
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Per-tick controls from the animation and rotation sections
    pub fn tick_controls(&self) -> Result<TickControls, GeometryError> {
        Ok(TickControls {
            angle: self.animation.angle_per_tick,
            frozen: self.animation.frozen,
            toggles: self.rotation.toggles()?,
        })
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation per tick in radians
    pub angle_per_tick: f64,
    /// Start with rotation stopped
    pub frozen: bool,
    /// Number of ticks the headless driver runs
    pub ticks: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_per_tick: 0.005,
            frozen: false,
            ticks: 600,
        }
    }
}

/// Rotation toggles for shapes that follow them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Active plane labels (`"xy"`, `"xz"`, `"xw"`, `"yz"`, `"yw"`, `"zw"`)
    pub planes: Vec<String>,
}

impl RotationConfig {
    /// Parse the plane labels into a toggle set
    pub fn toggles(&self) -> Result<RotationState, GeometryError> {
        RotationState::from_labels(self.planes.as_slice())
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            planes: RotationState::default()
                .labels()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Path to the scene RON file
    pub path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: "scenes/default.ron".to_string(),
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Actions replayed by the headless driver, in any order
    pub script: Vec<ScriptedAction>,
}

impl InputConfig {
    /// Actions scheduled for `tick`, in script order
    pub fn actions_at(&self, tick: u64) -> impl Iterator<Item = InputAction> + '_ {
        self.script
            .iter()
            .filter(move |s| s.tick == tick)
            .map(|s| s.action)
    }
}

/// Color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Front face/cell color [r, g, b, a]
    pub front: [f32; 4],
    /// Back face/cell color [r, g, b, a]
    pub back: [f32; 4],
    /// Connecting edge color, and the only color when coding is off
    pub connector: [f32; 4],
    /// Color front and back differently
    pub color_coding: bool,
}

impl ColorsConfig {
    /// Build the render color scheme
    pub fn to_scheme(&self) -> ColorScheme {
        ColorScheme {
            front: self.front,
            back: self.back,
            connector: self.connector,
            color_coding: self.color_coding,
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        let scheme = ColorScheme::default();
        Self {
            front: scheme.front,
            back: scheme.back,
            connector: scheme.connector,
            color_coding: scheme.color_coding,
        }
    }
}

/// How wireframes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Colored line list
    #[default]
    Lines,
    /// Vertex spheres and edge cylinders
    Tubes,
}

impl RenderMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Lines => RenderMode::Tubes,
            RenderMode::Tubes => RenderMode::Lines,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Flat lines or solid tubes
    pub mode: RenderMode,
    /// Vertex sphere scale in tube mode
    pub vertex_scale: f64,
    /// Edge cylinder radius in tube mode
    pub edge_radius: f64,
    /// Axis the cylinder mesh is modelled along [x, y, z]
    pub cylinder_axis: [f64; 3],
}

impl RenderingConfig {
    /// Tube settings for the render crate
    ///
    /// # Errors
    /// [`ConfigError`] if a size is not a positive number, or the cylinder
    /// axis is zero or not finite.
    pub fn tube_settings(&self) -> Result<TubeSettings, ConfigError> {
        for (field, value) in [
            ("rendering.vertex_scale", self.vertex_scale),
            ("rendering.edge_radius", self.edge_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{} is not a positive number", value)));
            }
        }

        let settings = TubeSettings {
            vertex_scale: self.vertex_scale,
            edge_radius: self.edge_radius,
            cylinder_axis: Vec3::from(self.cylinder_axis),
        };
        settings
            .mesh_alignment()
            .map_err(|e| ConfigError::invalid("rendering.cylinder_axis", format!("{:?}: {}", self.cylinder_axis, e)))?;
        Ok(settings)
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let tubes = TubeSettings::default();
        Self {
            mode: RenderMode::Lines,
            vertex_scale: tubes.vertex_scale,
            edge_radius: tubes.edge_radius,
            cylinder_axis: tubes.cylinder_axis.to_array(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log a progress line every this many ticks (0 disables)
    pub report_every: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_every: 100,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("invalid {}: {}", field, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
