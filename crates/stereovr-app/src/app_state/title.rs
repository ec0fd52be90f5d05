//! Window title management: reflects the active scene and stereo layout.

use stereovr_common::{SceneKind, StereoFormat};

use super::core::StereoApp;

/// Format: "{base} - home" or "{base} - video ({layout}[, 180°])".
pub(super) fn window_title(base: &str, scene: SceneKind, format: StereoFormat, wide: bool) -> String {
    match scene {
        SceneKind::Home => format!("{base} - home"),
        SceneKind::Video if wide => format!("{base} - video ({}, 180°)", format.label()),
        SceneKind::Video => format!("{base} - video ({})", format.label()),
    }
}

impl StereoApp {
    /// Update the window title to reflect the active scene.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let (format, wide) = self
            .router
            .video()
            .map(|v| (v.format(), v.wide_field()))
            .unwrap_or((self.config.video.format, self.config.video.wide_field));

        window.set_title(&window_title(
            &self.config.window.title,
            self.router.active(),
            format,
            wide,
        ));
    }
}
