//! Validation for the controller and window sections.

use crate::schema::StereoConfig;
use stereovr_common::MAX_CONTROLLERS;

use super::helpers::{validate_range, validate_range_f64};

/// Validate controller constraints.
pub(crate) fn validate_controllers(errors: &mut Vec<String>, config: &StereoConfig) {
    validate_range(
        errors,
        "controllers.count",
        config.controllers.count,
        0,
        MAX_CONTROLLERS as u32,
    );
    validate_range_f64(
        errors,
        "controllers.ray_length",
        config.controllers.ray_length,
        0.1,
        100.0,
    );
}

/// Validate window and camera constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &StereoConfig) {
    let window = &config.window;
    if window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
    validate_range(errors, "window.width", window.width, 320, 16_384);
    validate_range(errors, "window.height", window.height, 240, 16_384);
    validate_range_f64(errors, "window.fov_y_degrees", window.fov_y_degrees, 30.0, 150.0);

    if !(window.near > 0.0) {
        errors.push(format!("window.near = {} must be positive", window.near));
    }
    if !(window.far > window.near) {
        errors.push(format!(
            "window.far = {} must be greater than window.near = {}",
            window.far, window.near
        ));
    }
    if !(config.video.sphere_radius < window.far) {
        errors.push(format!(
            "video.sphere_radius = {} must be inside window.far = {}",
            config.video.sphere_radius, window.far
        ));
    }
}
