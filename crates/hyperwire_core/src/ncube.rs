//! N-cube (hypercube) geometry
//!
//! An n-cube has 2^n vertices (all combinations of ±1 over n coordinates)
//! and n·2^(n-1) edges. Vertices are split into a front and a back half by
//! the sign of their last coordinate, which lets a renderer colour the two
//! opposite faces/cells and the edges connecting them differently.
//!
//! Topology and the front/back split are fixed at generation. Rotation only
//! changes coordinate values, so an edge that started on the front cell stays
//! a front edge however the shape is turned.

use hyperwire_math::VecN;
use crate::GeometryError;

/// Largest dimension accepted by [`CubeStructure::generate`]
///
/// Edge derivation checks every vertex pair, which is O(4^dim).
pub const MAX_DIMENSION: usize = 10;

const LOW: f64 = -1.0;
const HIGH: f64 = 1.0;

/// An edge as a pair of vertex indices, lower index first
pub type Edge = [usize; 2];

/// Which half of the n-cube a vertex belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Last coordinate was +1 at generation
    Front,
    /// Last coordinate was -1 at generation
    Back,
}

/// Classification of an edge by the sides of its endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Both endpoints on the front face/cell
    Front,
    /// Both endpoints on the back face/cell
    Back,
    /// Joins a front vertex to a back vertex
    Connector,
}

/// Vertices, edges and front/back classification of an n-cube
#[derive(Clone, Debug)]
pub struct CubeStructure {
    dim: usize,
    vertices: Vec<VecN>,
    edges: Vec<Edge>,
    front_vertices: Vec<usize>,
    back_vertices: Vec<usize>,
    front_edges: Vec<usize>,
    back_edges: Vec<usize>,
    vertex_sides: Vec<Side>,
    edge_kinds: Vec<EdgeKind>,
}

impl CubeStructure {
    /// Generate the axis-aligned n-cube with corners at ±1 on every axis
    ///
    /// Vertex `v` is read as a `dim`-bit number, most significant bit first:
    /// coordinate `i` is -1 when `(v mod 2^(dim-i)) / 2^(dim-i) < 1/2` and +1
    /// otherwise. With this ordering `v` and `v ^ (1 << k)` are always adjacent.
    ///
    /// # Errors
    /// [`GeometryError::InvalidDimension`] if `dim` is 0 or above [`MAX_DIMENSION`].
    pub fn generate(dim: usize) -> Result<Self, GeometryError> {
        if dim == 0 || dim > MAX_DIMENSION {
            return Err(GeometryError::InvalidDimension(dim));
        }

        let vertex_count = 1usize << dim;

        let mut vertices = Vec::with_capacity(vertex_count);
        let mut vertex_sides = Vec::with_capacity(vertex_count);
        let mut front_vertices = Vec::with_capacity(vertex_count / 2);
        let mut back_vertices = Vec::with_capacity(vertex_count / 2);

        for v in 0..vertex_count {
            let coords: Vec<f64> = (0..dim)
                .map(|i| {
                    let section = 1usize << (dim - i);
                    if v % section < section / 2 { LOW } else { HIGH }
                })
                .collect();

            if coords[dim - 1] == HIGH {
                front_vertices.push(v);
                vertex_sides.push(Side::Front);
            } else {
                back_vertices.push(v);
                vertex_sides.push(Side::Back);
            }
            vertices.push(VecN::new(coords));
        }

        // Unrotated, two vertices are adjacent iff exactly one coordinate differs.
        // Each unordered pair is checked once, so no self-edges or duplicates.
        let mut edges = Vec::with_capacity(dim * vertex_count / 2);
        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                if vertices[i].differing_coords(&vertices[j]) == 1 {
                    edges.push([i, j]);
                }
            }
        }

        let mut front_edges = Vec::new();
        let mut back_edges = Vec::new();
        let mut edge_kinds = Vec::with_capacity(edges.len());
        for (index, &[a, b]) in edges.iter().enumerate() {
            let kind = match (vertex_sides[a], vertex_sides[b]) {
                (Side::Front, Side::Front) => {
                    front_edges.push(index);
                    EdgeKind::Front
                }
                (Side::Back, Side::Back) => {
                    back_edges.push(index);
                    EdgeKind::Back
                }
                _ => EdgeKind::Connector,
            };
            edge_kinds.push(kind);
        }

        log::debug!(
            "Generated {}-cube: {} vertices, {} edges ({} front, {} back)",
            dim, vertices.len(), edges.len(), front_edges.len(), back_edges.len()
        );

        Ok(Self {
            dim,
            vertices,
            edges,
            front_vertices,
            back_vertices,
            front_edges,
            back_edges,
            vertex_sides,
            edge_kinds,
        })
    }

    /// Number of coordinates per vertex
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// All vertices, indexed by their generation index
    #[inline]
    pub fn vertices(&self) -> &[VecN] {
        &self.vertices
    }

    /// Mutable vertex coordinates
    ///
    /// The slice cannot grow or shrink, so indices stay stable. After mutating,
    /// re-run the projection before handing data to a renderer.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [VecN] {
        &mut self.vertices
    }

    /// All edges; an edge's position in this list is its stable index
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Indices of front vertices, ascending
    pub fn front_vertices(&self) -> &[usize] {
        &self.front_vertices
    }

    /// Indices of back vertices, ascending
    pub fn back_vertices(&self) -> &[usize] {
        &self.back_vertices
    }

    /// Indices of front edges, ascending
    pub fn front_edges(&self) -> &[usize] {
        &self.front_edges
    }

    /// Indices of back edges, ascending
    pub fn back_edges(&self) -> &[usize] {
        &self.back_edges
    }

    /// Indices of connector edges, ascending
    pub fn connector_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edge_kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == EdgeKind::Connector)
            .map(|(i, _)| i)
    }

    /// Side of the vertex at `index`
    #[inline]
    pub fn vertex_side(&self, index: usize) -> Side {
        self.vertex_sides[index]
    }

    /// Classification of the edge at `index`
    #[inline]
    pub fn edge_kind(&self, index: usize) -> EdgeKind {
        self.edge_kinds[index]
    }

    /// Indices of the vertices sharing an edge with `index`
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(move |&[a, b]| {
            if a == index {
                Some(b)
            } else if b == index {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
