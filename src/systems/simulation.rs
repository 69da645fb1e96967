//! Rotation simulation system
//!
//! Owns the per-tick controls (angle, freeze, toggles) and advances the world.

use hyperwire_core::{GeometryError, TickControls, World};
use crate::config::AppConfig;
use crate::input::InputAction;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether geometry needs to be rebuilt and re-uploaded
    pub geometry_dirty: bool,
}

/// Advances every shape in the world one tick at a time
pub struct SimulationSystem {
    controls: TickControls,
    tick_count: u64,
}

impl SimulationSystem {
    /// Create a simulation with the given controls
    pub fn new(controls: TickControls) -> Self {
        Self {
            controls,
            tick_count: 0,
        }
    }

    /// Create from the animation and rotation config sections
    pub fn from_config(config: &AppConfig) -> Result<Self, GeometryError> {
        Ok(Self::new(config.tick_controls()?))
    }

    /// Current controls
    pub fn controls(&self) -> &TickControls {
        &self.controls
    }

    /// Number of ticks that actually rotated something
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// React to an action; returns false for actions this system ignores
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleRotation => {
                self.controls.frozen = !self.controls.frozen;
                log::info!("Rotation: {}", if self.controls.frozen { "OFF" } else { "ON" });
                true
            }
            InputAction::TogglePlane(plane) => {
                let active = self.controls.toggles.toggle_plane(plane);
                log::info!("Plane {}: {}", plane.label(), if active { "ON" } else { "OFF" });
                true
            }
            InputAction::ToggleColorCoding | InputAction::ToggleRenderMode => false,
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self, world: &mut World) -> SimulationResult {
        if !self.controls.frozen {
            world.tick(&self.controls);
            self.tick_count += 1;
        }

        SimulationResult {
            geometry_dirty: world.has_dirty_shapes(),
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(TickControls::default())
    }
}
