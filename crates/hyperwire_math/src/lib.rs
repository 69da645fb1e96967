//! N-dimensional Mathematics Library
//!
//! This crate provides the vector, rotation, and matrix types used by the
//! hyperwire geometry and render crates.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector for projected geometry
//! - [`VecN`] - n-dimensional vector for hypercube vertices
//! - [`Quaternion`] - 3D rotation, used to orient connector primitives
//! - [`Mat4`] - 4x4 homogeneous matrix (row-major)
//!
//! ## Rotations
//!
//! - [`plane::rotate_in_plane`] - rotate two coordinates of an n-vector
//! - [`mat4::rotation_between`] - matrix aligning one 3D direction onto another

mod vec3;
mod vecn;
mod quaternion;
mod error;
pub mod mat4;
pub mod plane;

pub use vec3::Vec3;
pub use vecn::VecN;
pub use quaternion::Quaternion;
pub use error::DegenerateRotationError;
pub use mat4::Mat4;
