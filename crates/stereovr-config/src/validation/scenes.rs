//! Scene color and menu box validation.

use crate::schema::StereoConfig;

use super::helpers::{validate_hex_color, validate_range_f64};

pub(crate) fn validate_scenes(errors: &mut Vec<String>, config: &StereoConfig) {
    let scenes = &config.scenes;
    validate_hex_color(errors, "scenes.home_background", &scenes.home_background);
    validate_hex_color(errors, "scenes.video_background", &scenes.video_background);
    validate_hex_color(errors, "scenes.menu_box_color", &scenes.menu_box_color);
    validate_range_f64(errors, "scenes.menu_box_size", scenes.menu_box_size, 0.1, 10.0);
    validate_range_f64(
        errors,
        "scenes.menu_box_distance",
        scenes.menu_box_distance,
        0.5,
        100.0,
    );
}
