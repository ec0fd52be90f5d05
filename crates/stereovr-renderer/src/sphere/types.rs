//! Sphere layout parameters.

use stereovr_config::schema::VideoConfig;

/// Radius and tessellation of a video sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSpec {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereSpec {
    pub fn from_config(config: &VideoConfig) -> Self {
        Self {
            radius: config.sphere_radius as f32,
            width_segments: config.width_segments,
            height_segments: config.height_segments,
        }
    }

    /// Vertices in a mesh built from this spec (seam and pole rows are duplicated).
    pub fn vertex_count(&self) -> usize {
        let w = self.width_segments.max(3) as usize;
        let h = self.height_segments.max(2) as usize;
        (w + 1) * (h + 1)
    }
}

impl Default for SphereSpec {
    fn default() -> Self {
        Self {
            radius: 500.0,
            width_segments: 60,
            height_segments: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_video_config() {
        assert_eq!(
            SphereSpec::from_config(&VideoConfig::default()),
            SphereSpec::default()
        );
    }

    #[test]
    fn vertex_count_includes_seams() {
        assert_eq!(SphereSpec::default().vertex_count(), 61 * 41);
    }
}
