//! Hand controller configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllersConfig {
    /// Number of controllers to track (valid range: 0-2).
    pub count: u32,
    /// Laser length in meters when nothing is hovered (valid range: 0.1-100.0).
    pub ray_length: f64,
    /// Drive controller 0 from the desktop mouse when no XR runtime is present.
    pub desktop_pointer: bool,
}

impl Default for ControllersConfig {
    fn default() -> Self {
        Self {
            count: 2,
            ray_length: 5.0,
            desktop_pointer: true,
        }
    }
}
