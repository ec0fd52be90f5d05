//! Video surface configuration types.

use serde::{Deserialize, Serialize};
use stereovr_common::{Eye, StereoFormat};

/// The video sphere and the frame source feeding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Image file used as the frame source. `None` shows a test pattern.
    pub source: Option<String>,
    /// Stereo packing of the source frame.
    pub format: StereoFormat,
    /// Source covers 180° horizontally instead of 360°.
    pub wide_field: bool,
    /// Sphere radius in meters (valid range: 1.0-10000.0).
    pub sphere_radius: f64,
    /// Longitude segments (valid range: 3-512).
    pub width_segments: u32,
    /// Latitude segments (valid range: 2-512).
    pub height_segments: u32,
    /// Which eye's surface the desktop window previews.
    pub preview_eye: Eye,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            source: None,
            format: StereoFormat::Mono,
            wide_field: false,
            sphere_radius: 500.0,
            width_segments: 60,
            height_segments: 40,
            preview_eye: Eye::Left,
        }
    }
}
