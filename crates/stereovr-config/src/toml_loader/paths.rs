//! Config path resolution and first-run template creation.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use stereovr_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "stereovr";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/stereovr/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the documented template to `path` unless a file is already there.
///
/// Returns `true` if the template was written. An existing file is never
/// overwritten.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_error = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(true)
}
