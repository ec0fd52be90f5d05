//! Frame rendering: upload the current video frame, then let the frame
//! driver hover-test and draw the active scene.

use std::time::Duration;

use stereovr_common::{Color, StereoError};
use stereovr_renderer::RendererError;
use stereovr_scene::FrameError;

use super::core::StereoApp;

const TIMING_REPORT_INTERVAL: Duration = Duration::from_secs(5);

impl StereoApp {
    pub(super) fn render_frame(&mut self) {
        let Some(rs) = self.render_state.as_mut() else {
            return;
        };
        self.timer.begin_frame();

        if let Some(source) = self.source.as_mut() {
            if let Err(e) = rs.upload_frame(source.current_frame()) {
                tracing::error!("Dropping frame source {}: {e}", source.describe());
                self.source = None;
            }
        }

        match self.driver.frame(&self.router, rs, &self.camera) {
            Ok(()) => self.warned_not_ready = false,
            Err(FrameError::Stereo(e @ StereoError::NotReady(_))) => {
                if !self.warned_not_ready {
                    tracing::warn!("Nothing to draw: {e}");
                    self.warned_not_ready = true;
                }
                if let Err(e) = rs.clear(Color::BLACK) {
                    tracing::error!("Render error: {e}");
                }
            }
            Err(FrameError::Render(RendererError::SurfaceLost(msg))) => {
                tracing::warn!("Surface lost ({msg}), reconfiguring");
                let size = rs.gpu.size;
                rs.resize(size.width, size.height);
            }
            Err(e) => tracing::error!("Render error: {e}"),
        }

        if let Some(fps) = self.timer.report_due(TIMING_REPORT_INTERVAL) {
            tracing::debug!(
                "Frame timing: {:.1} fps, {:.2} ms/frame",
                fps,
                self.timer.frame_time_ms()
            );
        }
    }
}
