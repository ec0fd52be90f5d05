//! Winit key name normalization.
//!
//! Converts winit's `Key` and `KeyCode` debug representations to the
//! normalized key names used by [`KeyCombo`](crate::input::KeyCombo) and
//! [`parse_keybind`](crate::keymap::parse_keybind).

/// Convert a winit logical key name to the normalized string used by `KeyCombo`.
///
/// Winit uses names like `"ArrowUp"` and `" "` for space; keybinds use
/// `"Up"` and `"Space"`.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                // F1..F12, Escape, Enter and other named keys pass through
                key.to_string()
            }
        }
    }
}

/// Keypad keys are identified by physical `KeyCode` so they stay distinct
/// from the top-row digits and work with NumLock off.
///
/// Returns `None` for anything that is not a keypad key, in which case the
/// logical key should be used.
pub fn normalize_physical_key(code: &str) -> Option<String> {
    code.strip_prefix("Numpad")
        .filter(|rest| !rest.is_empty())
        .map(|_| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys() {
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
    }

    #[test]
    fn space() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Space"), "Space");
    }

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_winit_key("f"), "F");
        assert_eq!(normalize_winit_key("F"), "F");
    }

    #[test]
    fn named_keys_passthrough() {
        assert_eq!(normalize_winit_key("F11"), "F11");
        assert_eq!(normalize_winit_key("Escape"), "Escape");
    }

    #[test]
    fn numpad_codes_are_recognized() {
        assert_eq!(normalize_physical_key("Numpad1").as_deref(), Some("Numpad1"));
        assert_eq!(
            normalize_physical_key("NumpadAdd").as_deref(),
            Some("NumpadAdd")
        );
    }

    #[test]
    fn non_numpad_codes_are_ignored() {
        assert_eq!(normalize_physical_key("Digit1"), None);
        assert_eq!(normalize_physical_key("KeyF"), None);
        assert_eq!(normalize_physical_key("Numpad"), None);
    }
}
