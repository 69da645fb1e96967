//! Flat wireframe geometry
//!
//! Bridges a [`Wireframe`]'s projected segments to a line-list vertex buffer:
//! two vertices per edge, offset by the shape's anchor and colored by edge kind.

use hyperwire_core::{Wireframe, World};
use crate::palette::ColorScheme;
use crate::types::LineVertex;

/// GPU-ready line list collected from wireframes
#[derive(Clone, Debug, Default)]
pub struct LineGeometry {
    /// Line-list vertices, two per edge
    pub vertices: Vec<LineVertex>,
}

impl LineGeometry {
    /// Create an empty line geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create line geometry with pre-allocated capacity
    pub fn with_capacity(edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(edge_capacity * 2),
        }
    }

    /// Collect lines from a single wireframe
    pub fn from_wireframe(shape: &Wireframe, colors: &ColorScheme) -> Self {
        let mut result = Self::with_capacity(shape.segments().len());
        result.add_wireframe(shape, colors);
        result
    }

    /// Collect lines from every shape in a world
    pub fn from_world(world: &World, colors: &ColorScheme) -> Self {
        let edges = world.iter().map(|s| s.segments().len()).sum();
        let mut result = Self::with_capacity(edges);
        for shape in world.iter() {
            result.add_wireframe(shape, colors);
        }
        result
    }

    /// Append a wireframe's lines
    pub fn add_wireframe(&mut self, shape: &Wireframe, colors: &ColorScheme) {
        let cube = shape.cube();
        for (index, segment) in shape.segments().iter().enumerate() {
            let color = colors.edge_color(cube.edge_kind(index));
            let start = (segment.start + shape.anchor).to_f32_array();
            let end = (segment.end + shape.anchor).to_f32_array();
            self.vertices.push(LineVertex::new(start, color));
            self.vertices.push(LineVertex::new(end, color));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
