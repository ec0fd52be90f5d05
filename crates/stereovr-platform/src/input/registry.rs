use std::collections::HashMap;

use stereovr_common::{Action, StereoFormat};
use stereovr_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: Vec<(&str, Action)> = vec![
            (&config.toggle_scene, Action::ToggleScene),
            (
                &config.format_mono,
                Action::SetStereoFormat(StereoFormat::Mono),
            ),
            (
                &config.format_side_by_side,
                Action::SetStereoFormat(StereoFormat::SideBySide),
            ),
            (
                &config.format_top_bottom,
                Action::SetStereoFormat(StereoFormat::TopBottom),
            ),
            (&config.toggle_wide_field, Action::ToggleWideField),
            (&config.toggle_fullscreen, Action::ToggleFullscreen),
            (&config.quit, Action::Quit),
        ];

        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Find the display string for a given action's keybind (reverse lookup).
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
