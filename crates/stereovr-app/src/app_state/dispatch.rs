//! Action dispatch: routes resolved actions to the router, the video
//! scene, or the window.

use stereovr_common::{Action, StereoError};

use super::core::StereoApp;

impl StereoApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        let result = match action {
            Action::ToggleScene => self.router.toggle().map(|_| ()),
            Action::ShowScene(kind) => self.router.activate(kind),
            Action::SetStereoFormat(format) => self.with_video(|video| video.set_format(format)),
            Action::ToggleWideField => self.with_video(|video| {
                let wide = video.toggle_wide_field()?;
                tracing::info!("Wide field {}", if wide { "on" } else { "off" });
                Ok(())
            }),
            Action::ToggleFullscreen => {
                if let Some(ref w) = self.window {
                    if w.fullscreen().is_some() {
                        w.set_fullscreen(None);
                    } else {
                        w.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
                    }
                }
                Ok(())
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
                Ok(())
            }
            Action::None => Ok(()),
        };

        match result {
            Ok(()) => {
                // Scene and stereo changes move what the pointer is over.
                self.refresh_pointer();
                self.update_window_title();
            }
            Err(e) => tracing::warn!("{} failed: {e}", action.label()),
        }
    }

    fn with_video(
        &mut self,
        apply: impl FnOnce(&mut stereovr_scene::VideoScene) -> Result<(), StereoError>,
    ) -> Result<(), StereoError> {
        let video = self
            .router
            .video_mut()
            .ok_or_else(|| StereoError::NotReady("video scene".into()))?;
        apply(video)
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::StereoApp;
    use stereovr_common::{Action, SceneKind, StereoFormat};
    use stereovr_config::StereoConfig;
    use stereovr_platform::KeybindRegistry;

    fn app() -> StereoApp {
        let mut config = StereoConfig::default();
        config.video.width_segments = 8;
        config.video.height_segments = 4;
        let registry = KeybindRegistry::from_config(&config.keybinds);
        StereoApp::new(config, registry)
    }

    #[test]
    fn toggle_and_show_scene() {
        let mut app = app();
        app.dispatch(Action::ToggleScene);
        assert_eq!(app.router.active(), SceneKind::Video);
        app.dispatch(Action::ShowScene(SceneKind::Home));
        assert_eq!(app.router.active(), SceneKind::Home);
    }

    #[test]
    fn stereo_actions_reach_video_scene() {
        let mut app = app();
        app.dispatch(Action::SetStereoFormat(StereoFormat::TopBottom));
        app.dispatch(Action::ToggleWideField);

        let video = app.router.video().unwrap();
        assert_eq!(video.format(), StereoFormat::TopBottom);
        assert!(video.wide_field());
        assert_eq!(app.router.active(), SceneKind::Home);
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = app();
        app.dispatch(Action::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn fullscreen_without_window_is_harmless() {
        let mut app = app();
        app.dispatch(Action::ToggleFullscreen);
        app.dispatch(Action::None);
        assert!(!app.should_exit);
    }
}
