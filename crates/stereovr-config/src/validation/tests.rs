//! Tests for config validation.

use super::*;
use crate::schema::*;

fn err_text(config: &StereoConfig) -> String {
    validate(config).unwrap_err().to_string()
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&StereoConfig::default()).is_ok());
}

#[test]
fn rejects_sphere_radius_out_of_range() {
    let mut config = StereoConfig::default();
    config.video.sphere_radius = 0.5;
    assert!(err_text(&config).contains("video.sphere_radius"));
}

#[test]
fn rejects_too_few_segments() {
    let mut config = StereoConfig::default();
    config.video.width_segments = 2;
    config.video.height_segments = 1;
    let err = err_text(&config);
    assert!(err.contains("video.width_segments"));
    assert!(err.contains("video.height_segments"));
}

#[test]
fn rejects_empty_source() {
    let mut config = StereoConfig::default();
    config.video.source = Some("  ".into());
    assert!(err_text(&config).contains("video.source"));
}

#[test]
fn rejects_bad_colors() {
    let mut config = StereoConfig::default();
    config.scenes.home_background = "gray".into();
    config.scenes.menu_box_color = "#12345".into();
    let err = err_text(&config);
    assert!(err.contains("scenes.home_background"));
    assert!(err.contains("scenes.menu_box_color"));
}

#[test]
fn accepts_color_with_alpha() {
    let mut config = StereoConfig::default();
    config.scenes.video_background = "#101010ff".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn rejects_too_many_controllers() {
    let mut config = StereoConfig::default();
    config.controllers.count = 3;
    assert!(err_text(&config).contains("controllers.count = 3"));
}

#[test]
fn zero_controllers_is_valid() {
    let mut config = StereoConfig::default();
    config.controllers.count = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn rejects_inverted_clip_planes() {
    let mut config = StereoConfig::default();
    config.window.near = 5.0;
    config.window.far = 1.0;
    let err = err_text(&config);
    assert!(err.contains("window.far"));
}

#[test]
fn rejects_sphere_outside_far_plane() {
    let mut config = StereoConfig::default();
    config.window.far = 400.0;
    assert!(err_text(&config).contains("must be inside window.far"));
}

#[test]
fn rejects_nan_fov() {
    let mut config = StereoConfig::default();
    config.window.fov_y_degrees = f64::NAN;
    assert!(err_text(&config).contains("window.fov_y_degrees"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = StereoConfig::default();
    config.controllers.ray_length = 0.0;
    config.scenes.menu_box_size = 50.0;
    config.keybinds.quit = "Space".into();
    let err = err_text(&config);
    assert!(err.contains("controllers.ray_length"));
    assert!(err.contains("scenes.menu_box_size"));
    assert!(err.contains("duplicate keybind"));
    assert_eq!(err.matches("; ").count(), 2);
}
