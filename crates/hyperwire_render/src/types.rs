//! GPU-compatible data types for wireframe rendering
//!
//! These types are laid out to be uploaded as-is into vertex and instance
//! buffers. All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A line-list vertex: projected position and RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in world space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create a new line vertex
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Per-instance data for a sphere or cylinder mesh
///
/// `model` is column-major, as WGSL and GLSL expect.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceTransform {
    /// Model matrix (column-major)
    pub model: [[f32; 4]; 4],
    /// RGBA color
    pub color: [f32; 4],
}

impl InstanceTransform {
    /// Build from a row-major f64 matrix
    pub fn from_row_major(m: &hyperwire_math::Mat4, color: [f32; 4]) -> Self {
        use hyperwire_math::mat4;
        Self {
            model: mat4::to_f32(&mat4::transpose(m)),
            color,
        }
    }

    /// Translation part of the model matrix
    pub fn translation(&self) -> [f32; 3] {
        [self.model[3][0], self.model[3][1], self.model[3][2]]
    }
}
