//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod scenes;
mod video;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::StereoConfig;
use stereovr_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StereoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    video::validate_video(&mut errors, config);
    scenes::validate_scenes(&mut errors, config);
    misc::validate_controllers(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
