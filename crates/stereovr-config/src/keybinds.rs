//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use stereovr_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("toggle_scene", &config.toggle_scene),
        ("format_mono", &config.format_mono),
        ("format_side_by_side", &config.format_side_by_side),
        ("format_top_bottom", &config.format_top_bottom),
        ("toggle_wide_field", &config.toggle_wide_field),
        ("toggle_fullscreen", &config.toggle_fullscreen),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison ignores case, so `"f"` and `"F"` collide.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = binding.to_ascii_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        assert!(validate_no_duplicates(&KeybindConfig::default()).is_ok());
    }

    #[test]
    fn all_keybinds_returns_7_entries() {
        assert_eq!(all_keybinds(&KeybindConfig::default()).len(), 7);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            toggle_wide_field: "Space".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("toggle_scene"));
        assert!(err.contains("toggle_wide_field"));
    }

    #[test]
    fn duplicate_detection_ignores_case() {
        let config = KeybindConfig {
            quit: "f".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn all_keybinds_has_correct_names() {
        let config = KeybindConfig::default();
        let names: Vec<&str> = all_keybinds(&config).iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"toggle_scene"));
        assert!(names.contains(&"format_top_bottom"));
        assert!(names.contains(&"quit"));
    }
}
