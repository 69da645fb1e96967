//! Scene construction utilities
//!
//! This module provides a declarative API for building wireframe scenes.

mod scene_builder;

pub use scene_builder::SceneBuilder;
