//! Desktop mouse as controller slot 0: cursor aims the ray, left button
//! selects, right-drag turns the camera.

use winit::event::{ElementState, MouseButton};

use stereovr_common::ControllerSlot;

use super::core::StereoApp;

/// Radians of camera turn per pixel of right-drag.
const LOOK_SENSITIVITY: f32 = 0.005;

/// Map a pixel position to normalized device coordinates (+Y up).
pub(super) fn to_ndc(x: f64, y: f64, width: u32, height: u32) -> (f32, f32) {
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    ((2.0 * x / w - 1.0) as f32, (1.0 - 2.0 * y / h) as f32)
}

impl StereoApp {
    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.look_drag {
            let dx = (x - last_x) as f32;
            let dy = (y - last_y) as f32;
            self.camera
                .look(-dx * LOOK_SENSITIVITY, -dy * LOOK_SENSITIVITY);
            self.look_drag = Some((x, y));
        }
        self.cursor = Some((x, y));
        self.refresh_pointer();
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        match (button, state) {
            (MouseButton::Right, ElementState::Pressed) => self.look_drag = self.cursor,
            (MouseButton::Right, ElementState::Released) => self.look_drag = None,
            (MouseButton::Left, _) if !self.config.controllers.desktop_pointer => {}
            (MouseButton::Left, ElementState::Pressed) => {
                self.refresh_pointer();
                match self.router.select_start(ControllerSlot::FIRST) {
                    Ok(Some(signal)) => {
                        tracing::debug!("Pointer select raised {signal:?}");
                        self.update_window_title();
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("Pointer select ignored: {e}"),
                }
            }
            (MouseButton::Left, ElementState::Released) => {
                if let Err(e) = self.router.select_end(ControllerSlot::FIRST) {
                    tracing::warn!("Pointer release ignored: {e}");
                }
            }
            _ => {}
        }
    }

    /// Re-aim controller slot 0 through the cursor from the current camera.
    pub(super) fn refresh_pointer(&mut self) {
        if !self.config.controllers.desktop_pointer {
            return;
        }
        let (Some((x, y)), Some(window)) = (self.cursor, self.window.as_ref()) else {
            return;
        };
        let size = window.inner_size();
        let (ndc_x, ndc_y) = to_ndc(x, y, size.width, size.height);
        let transform = self.camera.pointer_transform(ndc_x, ndc_y);
        if let Some(rig) = self.router.rig_mut() {
            rig.set_ray_transform(ControllerSlot::FIRST, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_ndc;

    #[test]
    fn ndc_corners_and_centre() {
        assert_eq!(to_ndc(0.0, 0.0, 800, 600), (-1.0, 1.0));
        assert_eq!(to_ndc(800.0, 600.0, 800, 600), (1.0, -1.0));
        assert_eq!(to_ndc(400.0, 300.0, 800, 600), (0.0, 0.0));
    }

    #[test]
    fn zero_size_window_does_not_divide_by_zero() {
        let (x, y) = to_ndc(0.0, 0.0, 0, 0);
        assert!(x.is_finite() && y.is_finite());
    }
}
