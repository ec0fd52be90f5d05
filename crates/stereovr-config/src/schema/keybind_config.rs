//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Numpad digits are written "Numpad1".."Numpad9".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub toggle_scene: String,
    pub format_mono: String,
    pub format_side_by_side: String,
    pub format_top_bottom: String,
    pub toggle_wide_field: String,
    pub toggle_fullscreen: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_scene: "Space".into(),
            format_mono: "Numpad1".into(),
            format_side_by_side: "Numpad2".into(),
            format_top_bottom: "Numpad3".into(),
            toggle_wide_field: "F".into(),
            toggle_fullscreen: "F11".into(),
            quit: "Escape".into(),
        }
    }
}
