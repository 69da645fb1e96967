//! Parallel projection into 3-space
//!
//! Coordinates beyond the third are dropped with no depth scaling. Shapes of
//! fewer than three dimensions are padded with zeros. Perspective projection
//! is not provided.

use hyperwire_math::{Vec3, VecN};
use crate::CubeStructure;

/// A projected edge: both endpoints in 3-space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    /// Vector from `start` to `end`
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Length of the projected edge
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }
}

/// Project a single vertex by keeping its first three coordinates
#[inline]
pub fn project_parallel(vertex: &VecN) -> Vec3 {
    Vec3::new(vertex.get_or_zero(0), vertex.get_or_zero(1), vertex.get_or_zero(2))
}

/// Project every edge of `cube`, in edge order
pub fn flatten(cube: &CubeStructure) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(cube.edge_count());
    flatten_into(cube, &mut segments);
    segments
}

/// Like [`flatten`], reusing `out`'s allocation
pub fn flatten_into(cube: &CubeStructure, out: &mut Vec<Segment>) {
    out.clear();
    let vertices = cube.vertices();
    out.extend(cube.edges().iter().map(|&[a, b]| Segment {
        start: project_parallel(&vertices[a]),
        end: project_parallel(&vertices[b]),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedRotation;
    use crate::rotation::Plane;

    #[test]
    fn test_project_drops_higher_coordinates() {
        let v = VecN::new(vec![1.0, -2.0, 3.0, 9.0, 7.0]);
        assert_eq!(project_parallel(&v), Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_project_pads_low_dimensions() {
        let v = VecN::new(vec![1.0, -1.0]);
        assert_eq!(project_parallel(&v), Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_flatten_one_segment_per_edge() {
        let cube = CubeStructure::generate(4).unwrap();
        let segments = flatten(&cube);
        assert_eq!(segments.len(), 32);

        // Edges along w collapse to points under parallel projection
        let degenerate = segments.iter().filter(|s| s.length() == 0.0).count();
        assert_eq!(degenerate, 8);
    }

    #[test]
    fn test_flatten_follows_rotation() {
        let mut cube = CubeStructure::generate(4).unwrap();
        let before = flatten(&cube);

        let r = NamedRotation::AboutPlane(Plane::XY).resolve(4).unwrap();
        r.apply(cube.vertices_mut(), 0.5);
        let mut after = Vec::new();
        flatten_into(&cube, &mut after);

        assert_eq!(after.len(), before.len());
        assert_ne!(after, before);
        // x and y are untouched by a rotation about xy
        for (a, b) in after.iter().zip(&before) {
            assert_eq!(a.start.x, b.start.x);
            assert_eq!(a.start.y, b.start.y);
        }
    }
}
