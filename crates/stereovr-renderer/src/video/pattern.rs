use stereovr_common::{Eye, StereoFormat};

use super::{FrameSource, FrameSourceError, VideoFrame};

/// Base colors for each eye's region, so the active stereo half is obvious.
const LEFT_TINT: [u8; 3] = [40, 170, 200];
const RIGHT_TINT: [u8; 3] = [220, 120, 40];
const MONO_TINT: [u8; 3] = [150, 150, 150];

/// Generated stand-in frame: a longitude/latitude grid over a gradient,
/// split into per-eye regions for the given packing.
pub struct TestPatternSource {
    layout: StereoFormat,
    frame: VideoFrame,
}

impl TestPatternSource {
    pub fn new(width: u32, height: u32, layout: StereoFormat) -> Result<Self, FrameSourceError> {
        let rgba = render_pattern(width, height, layout);
        let frame = VideoFrame::new(width, height, rgba, 1)?;
        Ok(Self { layout, frame })
    }

    pub fn layout(&self) -> StereoFormat {
        self.layout
    }
}

impl FrameSource for TestPatternSource {
    fn describe(&self) -> String {
        format!(
            "test pattern {} ({}x{})",
            self.layout, self.frame.width, self.frame.height
        )
    }

    fn current_frame(&mut self) -> &VideoFrame {
        &self.frame
    }
}

/// Which eye's region a pixel belongs to, plus its coordinates within that region.
fn region(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    layout: StereoFormat,
) -> (Option<Eye>, f32, f32) {
    let u = x as f32 / width as f32;
    let v = y as f32 / height as f32;
    match layout {
        StereoFormat::Mono => (None, u, v),
        StereoFormat::SideBySide if u < 0.5 => (Some(Eye::Left), u * 2.0, v),
        StereoFormat::SideBySide => (Some(Eye::Right), (u - 0.5) * 2.0, v),
        // Image rows run top-down, texture v runs bottom-up: the top half is v >= 0.5.
        StereoFormat::TopBottom if v < 0.5 => (Some(Eye::Right), u, v * 2.0),
        StereoFormat::TopBottom => (Some(Eye::Left), u, (v - 0.5) * 2.0),
    }
}

fn render_pattern(width: u32, height: u32, layout: StereoFormat) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            let (eye, lu, lv) = region(x, y, width, height, layout);
            let tint = match eye {
                None => MONO_TINT,
                Some(Eye::Left) => LEFT_TINT,
                Some(Eye::Right) => RIGHT_TINT,
            };
            // 24 longitude and 12 latitude lines per region.
            let on_grid = (lu * 24.0).fract() < 0.04 || (lv * 12.0).fract() < 0.04;
            let shade = 0.35 + 0.65 * (1.0 - lv);
            let px = |c: u8| -> u8 {
                if on_grid {
                    255
                } else {
                    (c as f32 * shade) as u8
                }
            };
            rgba.extend_from_slice(&[px(tint[0]), px(tint[1]), px(tint[2]), 255]);
        }
    }
    rgba
}
