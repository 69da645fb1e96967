//! World container for wireframe shapes
//!
//! The World owns every shape in the scene and advances them one tick at a time.

use std::collections::HashMap;
use crate::rotation::{RotationState, Spin};
use crate::wireframe::{TickControls, Wireframe};

/// A handle to a shape in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireframeHandle(usize);

impl WireframeHandle {
    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The scene's collection of wireframe shapes
pub struct World {
    /// All shapes in the world
    shapes: Vec<Wireframe>,
    /// Toggle state the cached spins were resolved for
    resolved_toggles: Option<RotationState>,
    /// Toggle spins per dimension, resolved when the toggles change
    toggle_spins: HashMap<usize, Spin>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            resolved_toggles: None,
            toggle_spins: HashMap::new(),
        }
    }

    /// Create a world with pre-allocated capacity for shapes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Add a shape to the world, returning its handle
    pub fn add_shape(&mut self, shape: Wireframe) -> WireframeHandle {
        let handle = WireframeHandle(self.shapes.len());
        self.shapes.push(shape);
        // A new dimension may need resolving
        self.resolved_toggles = None;
        handle
    }

    /// Get a reference to a shape by handle
    pub fn get_shape(&self, handle: WireframeHandle) -> Option<&Wireframe> {
        self.shapes.get(handle.0)
    }

    /// Get a mutable reference to a shape by handle
    pub fn get_shape_mut(&mut self, handle: WireframeHandle) -> Option<&mut Wireframe> {
        self.shapes.get_mut(handle.0)
    }

    /// Find a shape by name
    pub fn get_by_name(&self, name: &str) -> Option<(WireframeHandle, &Wireframe)> {
        self.iter_with_handles()
            .find(|(_, shape)| shape.name.as_deref() == Some(name))
    }

    /// Get all shapes as a slice
    pub fn shapes(&self) -> &[Wireframe] {
        &self.shapes
    }

    /// Get the number of shapes
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Advance every shape by one tick
    ///
    /// Rotates each shape by `controls.angle` (its own spin, plus the toggles
    /// if it follows them) and re-projects it. Does nothing when frozen.
    pub fn tick(&mut self, controls: &TickControls) {
        if controls.frozen {
            return;
        }

        if self.resolved_toggles != Some(controls.toggles) {
            self.resolve_toggles(controls.toggles);
        }

        for shape in &mut self.shapes {
            let toggle_spin = self.toggle_spins.get(&shape.dimension());
            shape.tick(controls.angle, toggle_spin);
        }
    }

    fn resolve_toggles(&mut self, toggles: RotationState) {
        self.toggle_spins.clear();
        for shape in self.shapes.iter().filter(|s| s.follows_toggles()) {
            let dim = shape.dimension();
            if self.toggle_spins.contains_key(&dim) {
                continue;
            }
            match toggles.spin(dim) {
                Ok(spin) => {
                    self.toggle_spins.insert(dim, spin);
                }
                Err(e) => log::warn!("Ignoring rotation toggles for {}-cubes: {}", dim, e),
            }
        }
        log::debug!("Resolved rotation toggles {:?}", toggles.labels());
        self.resolved_toggles = Some(toggles);
    }

    /// Check if any shape needs re-uploading
    pub fn has_dirty_shapes(&self) -> bool {
        self.shapes.iter().any(Wireframe::is_dirty)
    }

    /// Clear dirty flags on every shape
    pub fn clear_all_dirty(&mut self) {
        for shape in &mut self.shapes {
            shape.clear_dirty();
        }
    }

    /// Clear all shapes from the world
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.toggle_spins.clear();
        self.resolved_toggles = None;
    }

    /// Iterate over all shapes
    pub fn iter(&self) -> impl Iterator<Item = &Wireframe> {
        self.shapes.iter()
    }

    /// Iterate over all shapes mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Wireframe> {
        self.shapes.iter_mut()
    }

    /// Iterate over handles and shapes
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (WireframeHandle, &Wireframe)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, s)| (WireframeHandle(i), s))
    }
}
