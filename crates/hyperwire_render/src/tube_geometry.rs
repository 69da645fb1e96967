//! Solid ("3D") wireframe geometry
//!
//! Each vertex becomes a small sphere instance and each edge a cylinder
//! instance stretched from one endpoint to the other. The cylinder mesh is
//! assumed to be a unit-length tube of unit radius along `cylinder_axis`,
//! anchored at its base.
//!
//! Each cylinder model is `T(start) * R(z -> edge) * S(r, r, |edge|) * A`,
//! where `A` turns the mesh axis onto +z. Anti-parallel cases are always
//! relative to +z and fall back to a half turn about x.

use hyperwire_core::{DegenerateRotationError, Mat4, Vec3, Wireframe, World};
use hyperwire_math::mat4;
use crate::palette::ColorScheme;
use crate::types::InstanceTransform;

/// Sizes and mesh orientation for tube rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeSettings {
    /// Uniform scale of each vertex sphere
    pub vertex_scale: f64,
    /// Radius of each edge cylinder
    pub edge_radius: f64,
    /// Direction the cylinder mesh points before orientation
    pub cylinder_axis: Vec3,
}

impl TubeSettings {
    /// Rotation turning the mesh axis onto +z
    ///
    /// # Errors
    /// [`DegenerateRotationError::ZeroLength`] if `cylinder_axis` is zero or not finite.
    pub fn mesh_alignment(&self) -> Result<Mat4, DegenerateRotationError> {
        match mat4::rotation_between(self.cylinder_axis, Vec3::Z) {
            Err(DegenerateRotationError::AntiParallel) => Ok(mat4::half_turn_x()),
            other => other,
        }
    }
}

impl Default for TubeSettings {
    fn default() -> Self {
        Self {
            vertex_scale: 0.15,
            edge_radius: 0.05,
            cylinder_axis: Vec3::Z,
        }
    }
}

/// GPU-ready sphere and cylinder instances
#[derive(Clone, Debug, Default)]
pub struct TubeGeometry {
    /// One instance per vertex
    pub spheres: Vec<InstanceTransform>,
    /// One instance per non-degenerate edge
    pub cylinders: Vec<InstanceTransform>,
}

impl TubeGeometry {
    /// Create an empty tube geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect instances from a single wireframe
    pub fn from_wireframe(shape: &Wireframe, colors: &ColorScheme, settings: &TubeSettings) -> Self {
        let mut result = Self::new();
        result.add_wireframe(shape, colors, settings);
        result
    }

    /// Collect instances from every shape in a world
    pub fn from_world(world: &World, colors: &ColorScheme, settings: &TubeSettings) -> Self {
        let mut result = Self::new();
        for shape in world.iter() {
            result.add_wireframe(shape, colors, settings);
        }
        result
    }

    /// Append a wireframe's instances
    pub fn add_wireframe(&mut self, shape: &Wireframe, colors: &ColorScheme, settings: &TubeSettings) {
        let cube = shape.cube();
        let sphere_scale = mat4::scale(Vec3::new(
            settings.vertex_scale,
            settings.vertex_scale,
            settings.vertex_scale,
        ));

        self.spheres.reserve(cube.vertex_count());
        for (index, vertex) in cube.vertices().iter().enumerate() {
            let center = hyperwire_core::project_parallel(vertex) + shape.anchor;
            let model = mat4::mul(&mat4::translation(center), &sphere_scale);
            let color = colors.vertex_color(cube.vertex_side(index));
            self.spheres.push(InstanceTransform::from_row_major(&model, color));
        }

        let alignment = match settings.mesh_alignment() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("No cylinders for cylinder axis {:?}: {}", settings.cylinder_axis, e);
                return;
            }
        };

        self.cylinders.reserve(shape.segments().len());
        for (index, segment) in shape.segments().iter().enumerate() {
            let edge = segment.direction();
            let length = edge.length();
            let orientation = match mat4::rotation_between(Vec3::Z, edge) {
                Ok(m) => m,
                Err(DegenerateRotationError::AntiParallel) => mat4::half_turn_x(),
                Err(DegenerateRotationError::ZeroLength) => {
                    // Edge is perpendicular to the projection
                    log::debug!("Skipping collapsed edge {} of {}-cube", index, cube.dimension());
                    continue;
                }
            };

            let placed = mat4::mul(&mat4::translation(segment.start + shape.anchor), &orientation);
            let stretched = mat4::mul(
                &mat4::scale(Vec3::new(settings.edge_radius, settings.edge_radius, length)),
                &alignment,
            );
            let model = mat4::mul(&placed, &stretched);
            let color = colors.edge_color(cube.edge_kind(index));
            self.cylinders.push(InstanceTransform::from_row_major(&model, color));
        }
    }

    /// Clear all instances
    pub fn clear(&mut self) {
        self.spheres.clear();
        self.cylinders.clear();
    }

    /// Total number of instances
    #[inline]
    pub fn instance_count(&self) -> usize {
        self.spheres.len() + self.cylinders.len()
    }

    /// Raw bytes of the sphere instances
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Raw bytes of the cylinder instances
    pub fn cylinder_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cylinders)
    }
}
