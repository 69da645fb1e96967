//! Headless application driver
//!
//! Wires config, scene, simulation and frame building together and runs a
//! fixed number of ticks.

use hyperwire_core::{GeometryError, Scene, SceneLoadError, World};
use crate::config::{AppConfig, ConfigError};
use crate::input::InputAction;
use crate::scene::SceneBuilder;
use crate::systems::{RenderSystem, SimulationSystem};

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// The configured scene file exists but is invalid
    Scene(SceneLoadError),
    /// A shape or rotation label in the config is invalid
    Geometry(GeometryError),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<SceneLoadError> for AppError {
    fn from(e: SceneLoadError) -> Self {
        AppError::Scene(e)
    }
}

impl From<GeometryError> for AppError {
    fn from(e: GeometryError) -> Self {
        AppError::Geometry(e)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Scene(e) => write!(f, "Scene error: {}", e),
            AppError::Geometry(e) => write!(f, "Geometry error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Scene(e) => Some(e),
            AppError::Geometry(e) => Some(e),
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks that rotated the world
    pub ticks: u64,
    /// Times frame data was rebuilt
    pub rebuilds: u64,
    /// Primitives in the last frame
    pub primitives: usize,
}

/// Main application state
pub struct App {
    config: AppConfig,
    world: World,
    simulation: SimulationSystem,
    render: RenderSystem,
}

impl App {
    /// Build the application from config
    ///
    /// A missing scene file falls back to the built-in demo; a scene file
    /// that exists but fails to parse or validate is an error.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let scene = Self::load_scene(&config.scene.path)?;
        let world = scene.instantiate()?;
        let simulation = SimulationSystem::from_config(&config)?;
        let render = RenderSystem::from_config(&config)?;

        log::info!(
            "Loaded scene '{}' with {} shapes ({} edges)",
            scene.name,
            world.shape_count(),
            world.iter().map(|s| s.cube().edge_count()).sum::<usize>()
        );

        Ok(Self {
            config,
            world,
            simulation,
            render,
        })
    }

    fn load_scene(path: &str) -> Result<Scene, SceneLoadError> {
        match Scene::load(path) {
            Ok(scene) => Ok(scene),
            Err(SceneLoadError::Io(e)) => {
                log::warn!("Failed to read scene '{}': {}. Using the built-in demo.", path, e);
                Ok(SceneBuilder::demo().into_scene())
            }
            Err(e) => Err(e),
        }
    }

    /// The live world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Apply a toggle
    pub fn apply(&mut self, action: InputAction) {
        if !self.simulation.handle_action(action) {
            self.render.handle_action(action, &mut self.world);
        }
    }

    /// Advance one tick and rebuild frame data if anything moved
    pub fn step(&mut self) -> usize {
        let result = self.simulation.update(&mut self.world);
        if result.geometry_dirty {
            log::trace!("Geometry dirty after tick {}", self.simulation.tick_count());
        }
        self.render.prepare(&mut self.world).primitive_count()
    }

    /// Run the configured number of ticks, replaying scripted actions
    pub fn run(&mut self) -> RunStats {
        let ticks = self.config.animation.ticks;
        let report_every = self.config.debug.report_every;
        let mut primitives = self.render.prepare(&mut self.world).primitive_count();

        for tick in 0..ticks {
            let actions: Vec<InputAction> = self.config.input.actions_at(tick).collect();
            for action in actions {
                self.apply(action);
            }

            primitives = self.step();

            if report_every > 0 && (tick + 1) % report_every == 0 {
                log::info!(
                    "Tick {}/{}: {} primitives, {} rebuilds",
                    tick + 1,
                    ticks,
                    primitives,
                    self.render.rebuild_count()
                );
            }
        }

        RunStats {
            ticks: self.simulation.tick_count(),
            rebuilds: self.render.rebuild_count(),
            primitives,
        }
    }
}
