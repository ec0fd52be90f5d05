use stereovr_common::{ControllerSlot, Eye, SceneKind, StereoError, StereoFormat};
use stereovr_config::schema::{ScenesConfig, VideoConfig};
use stereovr_renderer::{Intersection, NodeId, SceneGraph, SphereSpec, StereoSurface};

use crate::handlers::InteractionHandlers;
use crate::home::parse_color;
use crate::scene::{Scene, SceneSignal};

/// The immersive scene: one inside-facing sphere per eye showing the
/// current video frame.
pub struct VideoScene {
    graph: SceneGraph,
    handlers: InteractionHandlers,
    surface: StereoSurface,
    interactive: Vec<NodeId>,
    last_selected: Option<Eye>,
}

impl VideoScene {
    pub fn new(video: &VideoConfig, scenes: &ScenesConfig) -> Result<Self, StereoError> {
        let background = parse_color("scenes.video_background", &scenes.video_background)?;
        let mut graph = SceneGraph::new("video", background);
        let spec = SphereSpec::from_config(video);
        let surface = StereoSurface::build(&mut graph, &spec, video.format, video.wide_field)?;
        let interactive = Eye::BOTH.iter().map(|&e| surface.eye(e).node()).collect();

        tracing::info!(
            "Video scene ready: {} vertices per eye, format={}, wide={}",
            spec.vertex_count(),
            video.format,
            video.wide_field
        );

        Ok(Self {
            graph,
            handlers: InteractionHandlers::new(),
            surface,
            interactive,
            last_selected: None,
        })
    }

    pub fn surface(&self) -> &StereoSurface {
        &self.surface
    }

    pub fn format(&self) -> StereoFormat {
        self.surface.format()
    }

    pub fn wide_field(&self) -> bool {
        self.surface.wide_field()
    }

    /// Re-derive both eyes' UVs for a new layout.
    pub fn set_stereo(&mut self, format: StereoFormat, wide: bool) -> Result<(), StereoError> {
        self.surface.set_parameters(&mut self.graph, format, wide)
    }

    pub fn set_format(&mut self, format: StereoFormat) -> Result<(), StereoError> {
        let wide = self.wide_field();
        self.set_stereo(format, wide)
    }

    pub fn toggle_wide_field(&mut self) -> Result<bool, StereoError> {
        let wide = !self.wide_field();
        self.set_stereo(self.format(), wide)?;
        Ok(wide)
    }

    /// Eye of the sphere most recently hit by a select.
    pub fn last_selected_eye(&self) -> Option<Eye> {
        self.last_selected
    }
}

impl Scene for VideoScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Video
    }

    fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    fn handlers(&self) -> &InteractionHandlers {
        &self.handlers
    }

    fn handlers_mut(&mut self) -> &mut InteractionHandlers {
        &mut self.handlers
    }

    fn interactive(&self) -> &[NodeId] {
        &self.interactive
    }

    fn on_select(&mut self, slot: ControllerSlot, hit: &Intersection) -> Option<SceneSignal> {
        if let Some(eye) = self.surface.eye_for_node(hit.node) {
            tracing::info!(
                "Controller {slot} selected the {eye} eye sphere at {:.1} m",
                hit.distance
            );
            self.last_selected = Some(eye);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Affine3A;

    fn video() -> VideoScene {
        let config = VideoConfig {
            width_segments: 8,
            height_segments: 4,
            ..Default::default()
        };
        VideoScene::new(&config, &ScenesConfig::default()).unwrap()
    }

    #[test]
    fn both_spheres_are_interactive() {
        let scene = video();
        assert_eq!(scene.interactive().len(), 2);
        assert!(scene.graph().find_by_name("video-sphere-left").is_some());
        assert!(scene.graph().find_by_name("video-sphere-right").is_some());
    }

    #[test]
    fn set_stereo_updates_surface() {
        let mut scene = video();
        scene.set_stereo(StereoFormat::SideBySide, true).unwrap();
        assert_eq!(scene.format(), StereoFormat::SideBySide);
        assert!(scene.wide_field());
        assert_eq!(scene.toggle_wide_field(), Ok(false));
        assert_eq!(scene.format(), StereoFormat::SideBySide);
    }

    #[test]
    fn select_records_hit_eye() {
        let mut scene = video();
        scene.activate_interaction();
        let signal = scene.select_start(ControllerSlot::FIRST, &Affine3A::IDENTITY);
        assert_eq!(signal, None);
        assert!(scene.last_selected_eye().is_some());
    }
}
