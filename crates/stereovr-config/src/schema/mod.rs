//! Configuration schema types for stereovr.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod controllers;
mod keybind_config;
mod scenes;
mod system;
mod video;
mod window;

pub use controllers::*;
pub use keybind_config::*;
pub use scenes::*;
pub use system::*;
pub use video::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for stereovr.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StereoConfig {
    pub video: VideoConfig,
    pub scenes: ScenesConfig,
    pub controllers: ControllersConfig,
    pub window: WindowConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
