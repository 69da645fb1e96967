//! Wireframe render data
//!
//! This crate turns the projected segments of a [`World`] into GPU-ready
//! buffers. It owns no device or window: whoever draws uploads the bytes.
//!
//! ## Key Components
//!
//! - [`LineGeometry`] - Flat wireframe as a colored line list
//! - [`TubeGeometry`] - Solid wireframe as sphere and cylinder instances
//! - [`ColorScheme`] - Front/back/connector coloring

pub mod types;
pub mod palette;
pub mod line_geometry;
pub mod tube_geometry;

// Re-export core types for convenience
pub use hyperwire_core::{EdgeKind, Side, Wireframe, World};

pub use types::{InstanceTransform, LineVertex};
pub use palette::ColorScheme;
pub use line_geometry::LineGeometry;
pub use tube_geometry::{TubeGeometry, TubeSettings};
