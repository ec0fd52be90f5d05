use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),
}

/// Failures raised by the stereo surface, scenes, and controller router.
///
/// Both variants are local and recoverable: the caller gets the error back
/// and the component that raised it is left in its previous valid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StereoError {
    /// Unsupported stereo format, malformed UV buffer, or similar bad input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scene or the controller rig has not been installed yet.
    #[error("not ready: {0}")]
    NotReady(String),
}

/// Startup failures of the binary. Library errors are handled where they
/// occur and only reach here as text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("frame source error: {0}")]
    FrameSource(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("video.radius out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: video.radius out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidKeybind("Hyper+X".into());
        assert_eq!(err.to_string(), "invalid keybind: Hyper+X");
    }

    #[test]
    fn stereo_error_display() {
        let err = StereoError::InvalidArgument("odd uv length 7".into());
        assert_eq!(err.to_string(), "invalid argument: odd uv length 7");

        let err = StereoError::NotReady("video scene".into());
        assert_eq!(err.to_string(), "not ready: video scene");
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Renderer("gpu lost".into());
        assert_eq!(err.to_string(), "renderer error: gpu lost");

        let err = AppError::FrameSource("unsupported image".into());
        assert_eq!(err.to_string(), "frame source error: unsupported image");

        let err = AppError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
