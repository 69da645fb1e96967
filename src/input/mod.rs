//! Input handling module
//!
//! Provides the semantic actions the systems react to.

mod action;

pub use action::{InputAction, ScriptedAction};
