use super::Action;
use crate::types::{SceneKind, StereoFormat};

impl Action {
    /// Human-readable label for logs and the window title.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ToggleScene => "Toggle Scene",
            Action::ShowScene(SceneKind::Home) => "Show Home",
            Action::ShowScene(SceneKind::Video) => "Show Video",
            Action::SetStereoFormat(StereoFormat::Mono) => "Stereo: Mono",
            Action::SetStereoFormat(StereoFormat::SideBySide) => "Stereo: Side by Side",
            Action::SetStereoFormat(StereoFormat::TopBottom) => "Stereo: Top / Bottom",
            Action::ToggleWideField => "Toggle 180° Field",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Whether dispatching this action goes through the controller router.
    pub fn changes_scene(&self) -> bool {
        matches!(self, Action::ToggleScene | Action::ShowScene(_))
    }

    /// Actions that can be bound to a key.
    pub fn bindable_actions() -> Vec<Action> {
        vec![
            Action::ToggleScene,
            Action::SetStereoFormat(StereoFormat::Mono),
            Action::SetStereoFormat(StereoFormat::SideBySide),
            Action::SetStereoFormat(StereoFormat::TopBottom),
            Action::ToggleWideField,
            Action::ToggleFullscreen,
            Action::Quit,
        ]
    }
}
