//! Wireframe shape instances
//!
//! A [`Wireframe`] is one n-cube placed in the scene: its topology, a 3D
//! anchor (model translation), the rotations it performs every tick, and the
//! projected segments a renderer consumes.

use bitflags::bitflags;
use hyperwire_math::Vec3;
use crate::projection::{self, Segment};
use crate::rotation::{PlaneRotation, RotationState, Spin};
use crate::{CubeStructure, GeometryError};

bitflags! {
    /// Flags indicating which parts of a wireframe need re-uploading
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Vertex coordinates (and so projected segments) changed
        const POSITIONS = 1 << 0;
        /// Colour assignment changed
        const COLORS = 1 << 1;
        /// Everything needs rebuilding
        const ALL = Self::POSITIONS.bits() | Self::COLORS.bits();
    }
}

/// Per-tick rotation controls, passed explicitly into [`World::tick`](crate::World::tick)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickControls {
    /// Angle increment per tick, in radians
    pub angle: f64,
    /// When set, ticks leave every shape untouched
    pub frozen: bool,
    /// Active planes for shapes that follow the toggles
    pub toggles: RotationState,
}

impl Default for TickControls {
    fn default() -> Self {
        Self {
            angle: 0.005,
            frozen: false,
            toggles: RotationState::default(),
        }
    }
}

/// An n-cube instance in the scene
pub struct Wireframe {
    /// Optional name for this shape (for lookup)
    pub name: Option<String>,
    /// Model translation applied when rendering
    pub anchor: Vec3,
    cube: CubeStructure,
    spin: Spin,
    follow_toggles: bool,
    segments: Vec<Segment>,
    dirty: DirtyFlags,
}

impl Wireframe {
    /// Create a wireframe n-cube of the given dimension at the origin
    pub fn new(dim: usize) -> Result<Self, GeometryError> {
        Ok(Self::from_cube(CubeStructure::generate(dim)?))
    }

    /// Wrap an existing cube structure
    pub fn from_cube(cube: CubeStructure) -> Self {
        let segments = projection::flatten(&cube);
        Self {
            name: None,
            anchor: Vec3::ZERO,
            cube,
            spin: Spin::new(),
            follow_toggles: false,
            segments,
            dirty: DirtyFlags::ALL, // New shapes are dirty
        }
    }

    /// Set the name of this shape (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the anchor (model translation)
    pub fn with_anchor(mut self, anchor: Vec3) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the fixed rotations performed each tick
    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    /// Also rotate according to the UI toggles each tick
    pub fn following_toggles(mut self, follow: bool) -> Self {
        self.follow_toggles = follow;
        self
    }

    /// The underlying structure (vertices, edges, classification)
    #[inline]
    pub fn cube(&self) -> &CubeStructure {
        &self.cube
    }

    /// Dimension of the n-cube
    #[inline]
    pub fn dimension(&self) -> usize {
        self.cube.dimension()
    }

    /// The fixed per-tick rotations
    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    /// Whether this shape follows the UI toggles
    pub fn follows_toggles(&self) -> bool {
        self.follow_toggles
    }

    /// Projected segments, one per edge, in local (un-anchored) coordinates
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Rotate in a single plane and re-project
    ///
    /// # Errors
    /// [`GeometryError::UnknownAxis`] if the rotation addresses a coordinate
    /// this shape does not have.
    pub fn rotate(&mut self, rotation: PlaneRotation, angle: f64) -> Result<(), GeometryError> {
        if rotation.min_dimension() > self.dimension() {
            return Err(GeometryError::UnknownAxis {
                label: format!("({}, {})", rotation.p(), rotation.q()),
                dimension: self.dimension(),
            });
        }
        rotation.apply(self.cube.vertices_mut(), angle);
        self.refresh_positions();
        Ok(())
    }

    /// Apply this shape's rotations for one tick
    ///
    /// `toggle_spin` is the already-resolved toggle set for this shape's
    /// dimension, used only if the shape follows toggles.
    pub fn tick(&mut self, angle: f64, toggle_spin: Option<&Spin>) {
        let toggle_spin = toggle_spin.filter(|_| self.follow_toggles);
        if self.spin.is_empty() && toggle_spin.map_or(true, Spin::is_empty) {
            return;
        }

        self.spin.apply(self.cube.vertices_mut(), angle);
        if let Some(spin) = toggle_spin {
            spin.apply(self.cube.vertices_mut(), angle);
        }
        self.refresh_positions();
    }

    /// Re-project after vertices changed
    fn refresh_positions(&mut self) {
        projection::flatten_into(&self.cube, &mut self.segments);
        self.dirty |= DirtyFlags::POSITIONS;
    }

    /// Get the dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Check if any part needs re-uploading
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Mark parts of the shape as dirty
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags (after the renderer has consumed the data)
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}
