//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use stereovr_common::{ConfigError, Eye, StereoFormat};

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_stereovr_config.toml"));
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[video]
format = "tb"
preview_eye = "right"

[scenes]
home_background = "#334455"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.video.format, StereoFormat::TopBottom);
    assert_eq!(config.video.preview_eye, Eye::Right);
    assert_eq!(config.scenes.home_background, "#334455");
    // Defaults preserved
    assert_eq!(config.scenes.video_background, "#101010");
    assert_eq!(config.controllers.ray_length, 5.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controllers]\ncount = 7\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.controllers.count, 7);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereovr").join("config.toml");

    assert!(create_default_config(&path).unwrap());
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.video.format, StereoFormat::Mono);
    assert_eq!(config.video.width_segments, 60);
    assert_eq!(config.keybinds.toggle_wide_field, "F");
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controllers]\ncount = 1\n").unwrap();

    assert!(!create_default_config(&path).unwrap());
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.controllers.count, 1);
}

#[test]
fn default_template_parses_to_defaults() {
    let config: crate::StereoConfig =
        toml::from_str(&super::template::default_config_toml()).unwrap();
    assert_eq!(config.window.title, "stereovr");
    assert_eq!(config.video.sphere_radius, 500.0);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_stereovr() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("stereovr/config.toml"));
    }
}
