//! Hyperwire - n-cube wireframe viewer
//!
//! Loads a scene of rotating n-cubes, advances it tick by tick and produces
//! line or tube buffers for a renderer.

pub mod app;
pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
