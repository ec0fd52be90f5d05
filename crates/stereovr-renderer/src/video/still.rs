use std::path::Path;

use super::{FrameSource, FrameSourceError, VideoFrame};

/// A single image decoded once and shown forever.
pub struct StillImageSource {
    label: String,
    frame: VideoFrame,
}

impl StillImageSource {
    pub fn open(path: &Path) -> Result<Self, FrameSourceError> {
        let img = image::open(path).map_err(|e| FrameSourceError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let frame = VideoFrame::new(width, height, rgba.into_raw(), 1)?;
        tracing::info!(path = %path.display(), width, height, "loaded still frame");
        Ok(Self {
            label: path.display().to_string(),
            frame,
        })
    }
}

impl FrameSource for StillImageSource {
    fn describe(&self) -> String {
        format!(
            "still image {} ({}x{})",
            self.label, self.frame.width, self.frame.height
        )
    }

    fn current_frame(&mut self) -> &VideoFrame {
        &self.frame
    }
}
