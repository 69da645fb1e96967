//! Core types for Hyperwire
//!
//! This crate turns an n-cube into something a renderer can draw:
//!
//! - [`CubeStructure`] - Vertices, edges and front/back classification
//! - [`PlaneRotation`] / [`NamedRotation`] - Rotations of vertex coordinates
//! - [`projection`] - Parallel projection into 3-space
//! - [`Wireframe`] - An n-cube placed in the scene with its per-tick spin
//! - [`World`] - Container for all shapes
//! - [`Scene`] - Loadable/saveable scene of shape templates

mod error;
mod ncube;
pub mod rotation;
pub mod projection;
mod wireframe;
mod world;
mod scene;

pub use error::GeometryError;
pub use ncube::{CubeStructure, Edge, EdgeKind, Side, MAX_DIMENSION};
pub use rotation::{
    rotate_plane, Axis, NamedRotation, Plane, PlaneRotation, RotationState, Spin, SpinLabel,
};
pub use projection::{project_parallel, Segment};
pub use wireframe::{DirtyFlags, TickControls, Wireframe};
pub use world::{World, WireframeHandle};
pub use scene::{Scene, SceneLoadError, SceneSaveError, ShapeTemplate};

// Re-export commonly used types from hyperwire_math for convenience
pub use hyperwire_math::{mat4, DegenerateRotationError, Mat4, Quaternion, Vec3, VecN};
