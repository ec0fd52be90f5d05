mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SceneKind, StereoFormat};

    #[test]
    fn all_bindable_actions_have_labels() {
        for action in Action::bindable_actions() {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn format_labels() {
        assert_eq!(
            Action::SetStereoFormat(StereoFormat::Mono).label(),
            "Stereo: Mono"
        );
        assert_eq!(
            Action::SetStereoFormat(StereoFormat::SideBySide).label(),
            "Stereo: Side by Side"
        );
        assert_eq!(
            Action::SetStereoFormat(StereoFormat::TopBottom).label(),
            "Stereo: Top / Bottom"
        );
    }

    #[test]
    fn scene_actions_change_scene() {
        assert!(Action::ToggleScene.changes_scene());
        assert!(Action::ShowScene(SceneKind::Video).changes_scene());
        assert!(!Action::ToggleWideField.changes_scene());
        assert!(!Action::Quit.changes_scene());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::ToggleScene,
            Action::ShowScene(SceneKind::Home),
            Action::SetStereoFormat(StereoFormat::TopBottom),
            Action::ToggleWideField,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
