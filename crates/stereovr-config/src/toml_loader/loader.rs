//! Core TOML config loading: read from path or platform default.

use crate::schema::StereoConfig;
use crate::validation;
use std::path::Path;
use stereovr_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are only
/// logged here; callers that need a hard failure run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<StereoConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: StereoConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/stereovr/config.toml`
/// On Linux: `~/.config/stereovr/config.toml`
///
/// If the file does not exist, writes the documented template and returns defaults.
pub fn load_default() -> Result<StereoConfig, ConfigError> {
    let path = default_config_path()?;

    if create_default_config(&path)? {
        info!("no config found at {}, using defaults", path.display());
        return Ok(StereoConfig::default());
    }

    load_from_path(&path)
}
