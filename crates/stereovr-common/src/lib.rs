pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{AppError, ConfigError, PlatformError, StereoError};
pub use types::{
    Color, ControllerNodeId, ControllerRole, ControllerSlot, Eye, SceneKind, StereoFormat,
    MAX_CONTROLLERS,
};

pub type Result<T> = std::result::Result<T, AppError>;
