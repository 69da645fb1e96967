//! Semantic input actions
//!
//! The toggles a front end exposes, as plain values. The headless driver
//! replays them from the config script.

use serde::{Serialize, Deserialize};
use hyperwire_core::Plane;

/// A toggle applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Color front/back differently or draw everything in one color
    ToggleColorCoding,
    /// Freeze or resume every rotation
    ToggleRotation,
    /// Switch between flat lines and solid tubes
    ToggleRenderMode,
    /// Turn one rotation toggle on or off
    TogglePlane(Plane),
}

/// An action scheduled before a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedAction {
    /// Tick index the action happens before
    pub tick: u64,
    pub action: InputAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Script {
        script: Vec<ScriptedAction>,
    }

    #[test]
    fn test_parse_actions() {
        let parsed: Script = toml::from_str(
            r#"
            [[script]]
            tick = 3
            action = "toggle_rotation"

            [[script]]
            tick = 5
            action = { toggle_plane = "zw" }
            "#,
        )
        .unwrap();
        assert_eq!(parsed.script[0].action, InputAction::ToggleRotation);
        assert_eq!(parsed.script[1].action, InputAction::TogglePlane(Plane::ZW));
    }
}
