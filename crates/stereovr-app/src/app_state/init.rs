//! Window creation, renderer initialization, and the frame source.

use std::path::Path;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use stereovr_common::AppError;
use stereovr_renderer::{FrameSource, RenderState, StillImageSource, TestPatternSource};

use super::core::StereoApp;

/// Size of the generated pattern used when no image is configured.
const PATTERN_SIZE: (u32, u32) = (2048, 1024);

impl StereoApp {
    /// Create the window, initialize the GPU renderer, and open the frame
    /// source. A missing frame source is logged, not fatal.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> stereovr_common::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| AppError::Other(format!("failed to create window: {e}")))?;

        let preview_eye = self.config.video.preview_eye;
        let rs = pollster::block_on(RenderState::new(window.clone(), preview_eye))
            .map_err(|e| AppError::Renderer(e.to_string()))?;
        self.camera.aspect = rs.gpu.size.aspect();
        self.render_state = Some(rs);
        self.window = Some(window);

        match self.open_frame_source() {
            Ok(source) => {
                tracing::info!("Frame source: {}", source.describe());
                self.source = Some(source);
            }
            Err(e) => tracing::error!("No frame source: {e}"),
        }
        Ok(())
    }

    /// Open the configured image, falling back to the generated test pattern.
    pub(super) fn open_frame_source(&self) -> Result<Box<dyn FrameSource>, AppError> {
        if let Some(ref path) = self.config.video.source {
            match StillImageSource::open(Path::new(path)) {
                Ok(source) => return Ok(Box::new(source)),
                Err(e) => tracing::warn!("Falling back to test pattern: {e}"),
            }
        }

        let (width, height) = PATTERN_SIZE;
        TestPatternSource::new(width, height, self.config.video.format)
            .map(|source| Box::new(source) as Box<dyn FrameSource>)
            .map_err(|e| AppError::FrameSource(e.to_string()))
    }
}
