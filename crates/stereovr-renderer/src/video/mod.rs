//! Frame sources feeding the video sphere texture.
//!
//! Decoding and transport live outside this crate; a source only has to
//! hand over the current frame as tightly packed RGBA8 pixels.

mod pattern;
mod still;

pub use pattern::TestPatternSource;
pub use still::StillImageSource;

/// Failure to produce a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameSourceError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("frame is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// One RGBA8 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// Increases each time the source produces new pixels.
    pub sequence: u64,
}

impl VideoFrame {
    pub fn new(
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        sequence: u64,
    ) -> Result<Self, FrameSourceError> {
        if width == 0 || height == 0 || rgba.len() != (width as usize) * (height as usize) * 4 {
            return Err(FrameSourceError::Empty { width, height });
        }
        Ok(Self {
            width,
            height,
            rgba,
            sequence,
        })
    }
}

/// Yields the currently decoded frame.
pub trait FrameSource {
    /// Short description for logs.
    fn describe(&self) -> String;

    /// The frame to show now.
    fn current_frame(&mut self) -> &VideoFrame;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rejects_wrong_length() {
        assert!(VideoFrame::new(2, 2, vec![0; 15], 0).is_err());
        assert!(VideoFrame::new(0, 2, vec![], 0).is_err());
        assert!(VideoFrame::new(2, 2, vec![0; 16], 0).is_ok());
    }

    #[test]
    fn error_display() {
        let err = FrameSourceError::Empty {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "frame is empty (0x4)");
    }
}
