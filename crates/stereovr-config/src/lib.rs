//! stereovr configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stereovr_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{StereoConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use stereovr_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<StereoConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// trigger to write the default template.
pub fn load_config_from(path: &Path) -> Result<StereoConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &StereoConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = StereoConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"video\""));
        assert!(json.contains("\"scenes\""));
        assert!(json.contains("\"controllers\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"keybinds\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = StereoConfig::default();
        let json = config_to_json(&config);
        let parsed: StereoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.video.width_segments, 60);
        assert_eq!(parsed.scenes.home_background, "#222222");
        assert_eq!(parsed.keybinds.toggle_scene, "Space");
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/stereovr_missing_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nnear = 5.0\nfar = 1.0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
