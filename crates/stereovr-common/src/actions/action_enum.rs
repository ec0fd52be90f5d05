use serde::{Deserialize, Serialize};

use crate::types::{SceneKind, StereoFormat};

/// Every user-triggerable action in the application.
///
/// Keybinds and the desktop pointer resolve to an `Action`; the app
/// dispatcher matches on it to route to the router or the stereo surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Scenes --
    ToggleScene,
    ShowScene(SceneKind),

    // -- Stereo --
    SetStereoFormat(StereoFormat),
    ToggleWideField,

    // -- Window --
    ToggleFullscreen,
    Quit,

    // -- Noop --
    None,
}
