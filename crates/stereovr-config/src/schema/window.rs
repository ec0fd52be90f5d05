//! Window and camera configuration types.

use serde::{Deserialize, Serialize};

/// Desktop window and preview camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees (valid range: 30.0-150.0).
    pub fov_y_degrees: f64,
    /// Near clip plane in meters. Must be below `far`.
    pub near: f64,
    /// Far clip plane in meters. Must exceed the sphere radius.
    pub far: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "stereovr".into(),
            width: 1280,
            height: 720,
            fov_y_degrees: 70.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
