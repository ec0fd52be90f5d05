//! Preview camera: a viewer at the origin with yaw/pitch look controls.

use glam::{Affine3A, Mat4, Quat, Vec3};
use stereovr_config::schema::WindowConfig;

use crate::raycast::Ray;

/// Pitch is kept just short of straight up/down.
const MAX_PITCH: f32 = 1.55;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn from_config(config: &WindowConfig) -> Self {
        let aspect = if config.height > 0 {
            config.width as f32 / config.height as f32
        } else {
            1.0
        };
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: (config.fov_y_degrees as f32).to_radians(),
            aspect,
            near: config.near as f32,
            far: config.far as f32,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Turn the view by the given angles in radians.
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Camera-to-world transform.
    pub fn world_transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.orientation(), self.position)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from(self.world_transform()).inverse()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (`-1..1`, +Y up).
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let half_h = (self.fov_y * 0.5).tan();
        let local = Vec3::new(ndc_x * half_h * self.aspect, ndc_y * half_h, -1.0);
        let direction = (self.orientation() * local).normalize_or(Vec3::NEG_Z);
        Ray {
            origin: self.position,
            direction,
        }
    }

    /// A controller pose at the eye whose -Z axis passes through the cursor.
    pub fn pointer_transform(&self, ndc_x: f32, ndc_y: f32) -> Affine3A {
        let ray = self.ray_through(ndc_x, ndc_y);
        let rotation = Quat::from_rotation_arc(Vec3::NEG_Z, ray.direction);
        Affine3A::from_rotation_translation(rotation, ray.origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let camera = Camera::default();
        assert!((camera.fov_y - 70f32.to_radians()).abs() < 1e-6);
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn center_ray_looks_down_negative_z() {
        let ray = Camera::default().ray_through(0.0, 0.0);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn corner_ray_leans_right_and_up() {
        let ray = Camera::default().ray_through(1.0, 1.0);
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn pointer_transform_matches_ray() {
        let camera = Camera::default();
        let pose = camera.pointer_transform(0.3, -0.4);
        let from_pose = Ray::from_transform(&pose);
        let direct = camera.ray_through(0.3, -0.4);
        assert!((from_pose.direction - direct.direction).length() < 1e-5);
    }

    #[test]
    fn look_clamps_pitch_and_wraps_yaw() {
        let mut camera = Camera::default();
        camera.look(0.0, 10.0);
        assert_eq!(camera.pitch, MAX_PITCH);
        camera.look(-7.0, 0.0);
        assert!(camera.yaw >= 0.0 && camera.yaw < std::f32::consts::TAU);
    }

    #[test]
    fn point_ahead_projects_to_screen_centre() {
        let camera = Camera::default();
        let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, -3.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn zero_height_viewport_keeps_aspect() {
        let mut camera = Camera::default();
        let before = camera.aspect;
        camera.set_viewport(800, 0);
        assert_eq!(camera.aspect, before);
    }
}
