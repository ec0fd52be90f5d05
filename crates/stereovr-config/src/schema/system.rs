//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive for the workspace crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "stereovr=debug",
            LogLevel::Info => "stereovr=info",
            LogLevel::Warning => "stereovr=warn",
            LogLevel::Error => "stereovr=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Debug.directive(), "stereovr=debug");
        assert_eq!(LogLevel::Warning.directive(), "stereovr=warn");
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str("level = \"DEBUG\"").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }
}
