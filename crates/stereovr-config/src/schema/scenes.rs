//! Home and video scene appearance.

use serde::{Deserialize, Serialize};

/// Scene colors and the home menu box placement.
///
/// Colors are `#rrggbb` or `#rrggbbaa` hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenesConfig {
    pub home_background: String,
    pub video_background: String,
    pub menu_box_color: String,
    /// Edge length of the menu box in meters (valid range: 0.1-10.0).
    pub menu_box_size: f64,
    /// Distance of the menu box in front of the viewer (valid range: 0.5-100.0).
    pub menu_box_distance: f64,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            home_background: "#222222".into(),
            video_background: "#101010".into(),
            menu_box_color: "#ffffff".into(),
            menu_box_size: 1.0,
            menu_box_distance: 3.0,
        }
    }
}
