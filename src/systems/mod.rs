//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod simulation;
mod render;

pub use simulation::{SimulationResult, SimulationSystem};
pub use render::{FrameData, RenderSystem};
