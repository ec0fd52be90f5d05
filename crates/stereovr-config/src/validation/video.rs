//! Video sphere validation.

use crate::schema::StereoConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_video(errors: &mut Vec<String>, config: &StereoConfig) {
    let video = &config.video;
    validate_range_f64(
        errors,
        "video.sphere_radius",
        video.sphere_radius,
        1.0,
        10_000.0,
    );
    validate_range(errors, "video.width_segments", video.width_segments, 3, 512);
    validate_range(errors, "video.height_segments", video.height_segments, 2, 512);

    if let Some(source) = &video.source {
        if source.trim().is_empty() {
            errors.push("video.source must not be empty when set".into());
        }
    }
}
