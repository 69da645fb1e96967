//! Frame data system
//!
//! Turns the world into GPU-ready buffers in the configured mode and caches
//! them until a shape moves or a color/mode setting changes.

use hyperwire_core::{DirtyFlags, World};
use hyperwire_render::{ColorScheme, LineGeometry, TubeGeometry, TubeSettings};
use crate::config::{AppConfig, ConfigError, RenderMode};
use crate::input::InputAction;

/// Buffers for one frame
pub enum FrameData {
    /// Flat wireframe line list
    Lines(LineGeometry),
    /// Sphere and cylinder instances
    Tubes(TubeGeometry),
}

impl FrameData {
    /// Number of primitives (lines, or sphere + cylinder instances)
    pub fn primitive_count(&self) -> usize {
        match self {
            FrameData::Lines(lines) => lines.line_count(),
            FrameData::Tubes(tubes) => tubes.instance_count(),
        }
    }

    /// Total bytes to upload
    pub fn byte_len(&self) -> usize {
        match self {
            FrameData::Lines(lines) => lines.as_bytes().len(),
            FrameData::Tubes(tubes) => tubes.sphere_bytes().len() + tubes.cylinder_bytes().len(),
        }
    }
}

/// Builds frame data from the world
pub struct RenderSystem {
    mode: RenderMode,
    colors: ColorScheme,
    tubes: TubeSettings,
    frame: Option<FrameData>,
    rebuilds: u64,
}

impl RenderSystem {
    /// Create a render system
    pub fn new(mode: RenderMode, colors: ColorScheme, tubes: TubeSettings) -> Self {
        Self {
            mode,
            colors,
            tubes,
            frame: None,
            rebuilds: 0,
        }
    }

    /// Create from the colors and rendering config sections
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.rendering.mode,
            config.colors.to_scheme(),
            config.rendering.tube_settings()?,
        ))
    }

    /// Current render mode
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Current color scheme
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// How many times frame data has been rebuilt
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// React to an action; returns false for actions this system ignores
    ///
    /// Color and mode changes mark every shape dirty so the next
    /// [`prepare`](Self::prepare) rebuilds.
    pub fn handle_action(&mut self, action: InputAction, world: &mut World) -> bool {
        match action {
            InputAction::ToggleColorCoding => {
                self.colors = self.colors.toggled();
                log::info!("Color coding: {}", if self.colors.color_coding { "ON" } else { "OFF" });
                for shape in world.iter_mut() {
                    shape.mark_dirty(DirtyFlags::COLORS);
                }
                true
            }
            InputAction::ToggleRenderMode => {
                self.mode = self.mode.toggled();
                log::info!("Render mode: {:?}", self.mode);
                for shape in world.iter_mut() {
                    shape.mark_dirty(DirtyFlags::ALL);
                }
                true
            }
            InputAction::ToggleRotation | InputAction::TogglePlane(_) => false,
        }
    }

    /// Frame data for the current world, rebuilt only if something changed
    pub fn prepare(&mut self, world: &mut World) -> &FrameData {
        let stale = self.frame.is_none() || world.has_dirty_shapes();
        if stale {
            self.rebuilds += 1;
            world.clear_all_dirty();
        }
        let (mode, colors, tubes) = (self.mode, self.colors, self.tubes);
        let frame = match self.frame.take() {
            Some(frame) if !stale => frame,
            _ => match mode {
                RenderMode::Lines => FrameData::Lines(LineGeometry::from_world(world, &colors)),
                RenderMode::Tubes => FrameData::Tubes(TubeGeometry::from_world(world, &colors, &tubes)),
            },
        };
        self.frame.insert(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneBuilder;
    use hyperwire_core::TickControls;

    fn system() -> RenderSystem {
        RenderSystem::from_config(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_lines_frame() {
        let mut world = SceneBuilder::demo().build().unwrap();
        let mut render = system();
        let frame = render.prepare(&mut world);
        assert!(matches!(frame, FrameData::Lines(_)));
        assert_eq!(frame.primitive_count(), 12 + 32);
        assert!(frame.byte_len() > 0);
        assert!(!world.has_dirty_shapes());
    }

    #[test]
    fn test_cached_until_dirty() {
        let mut world = SceneBuilder::demo().build().unwrap();
        let mut render = system();
        render.prepare(&mut world);
        render.prepare(&mut world);
        assert_eq!(render.rebuild_count(), 1);

        world.tick(&TickControls::default());
        render.prepare(&mut world);
        assert_eq!(render.rebuild_count(), 2);
    }

    #[test]
    fn test_toggle_render_mode() {
        let mut world = SceneBuilder::demo().build().unwrap();
        let mut render = system();
        render.prepare(&mut world);

        assert!(render.handle_action(InputAction::ToggleRenderMode, &mut world));
        assert_eq!(render.mode(), RenderMode::Tubes);
        let frame = render.prepare(&mut world);
        // 8 + 16 spheres, 12 cylinders, 24 of 32 hypercube edges (w-edges collapse)
        assert!(matches!(frame, FrameData::Tubes(_)));
        assert_eq!(frame.primitive_count(), 8 + 12 + 16 + 24);
    }

    #[test]
    fn test_toggle_color_coding_rebuilds() {
        let mut world = SceneBuilder::demo().build().unwrap();
        let mut render = system();
        render.prepare(&mut world);

        assert!(render.handle_action(InputAction::ToggleColorCoding, &mut world));
        assert!(!render.colors().color_coding);
        render.prepare(&mut world);
        assert_eq!(render.rebuild_count(), 2);
    }

    #[test]
    fn test_from_config_rejects_zero_cylinder_axis() {
        let mut config = AppConfig::default();
        config.rendering.cylinder_axis = [0.0; 3];
        assert!(RenderSystem::from_config(&config).is_err());
    }

    #[test]
    fn test_simulation_actions_ignored() {
        let mut world = World::new();
        let mut render = system();
        assert!(!render.handle_action(InputAction::ToggleRotation, &mut world));
    }
}
