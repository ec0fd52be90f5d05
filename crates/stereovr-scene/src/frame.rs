use glam::Vec3;
use stereovr_common::{
    ControllerNodeId, ControllerRole, ControllerSlot, SceneKind, StereoError, MAX_CONTROLLERS,
};
use stereovr_renderer::{Camera, NodeId, RendererError, SceneRenderer};

use crate::router::ControllerRouter;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// `NotReady` before setup; other stereo errors pass through as-is.
    #[error(transparent)]
    Stereo(#[from] StereoError),

    #[error(transparent)]
    Render(#[from] RendererError),
}

/// What a controller's ray rests on this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTarget {
    pub scene: SceneKind,
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// Per-frame hover pass and render of the active scene.
///
/// Reads the router's active scene but never changes it.
pub struct FrameDriver {
    hover: [Option<HoverTarget>; MAX_CONTROLLERS],
    ray_length: f32,
    frames: u64,
}

impl FrameDriver {
    pub fn new(ray_length: f32) -> Self {
        Self {
            hover: [None; MAX_CONTROLLERS],
            ray_length,
            frames: 0,
        }
    }

    /// Refresh hover targets for every connected controller whose ray node
    /// sits in the active scene's graph.
    pub fn update_hover(&mut self, router: &ControllerRouter) -> Result<(), StereoError> {
        if !router.is_ready() {
            self.hover = [None; MAX_CONTROLLERS];
            return Err(StereoError::NotReady(
                "scenes and controller rig must be installed before hover".into(),
            ));
        }

        let active = router.active();
        for slot in ControllerSlot::all() {
            let ray_node = ControllerNodeId::new(slot, ControllerRole::Ray);
            let previous = self.hover[slot.index()];
            let current = if router.parent_of(ray_node) == Some(active) {
                router.hit_test(slot)?.map(|hit| HoverTarget {
                    scene: active,
                    node: hit.node,
                    distance: hit.distance,
                    point: hit.point,
                })
            } else {
                None
            };

            if previous.map(|h| h.node) != current.map(|h| h.node) {
                tracing::trace!(%slot, ?current, "hover changed");
            }
            self.hover[slot.index()] = current;
        }
        Ok(())
    }

    /// Render the active scene's graph and nothing else.
    pub fn render<R: SceneRenderer>(
        &self,
        router: &ControllerRouter,
        renderer: &mut R,
        camera: &Camera,
    ) -> Result<(), FrameError> {
        let graph = router
            .active_graph()
            .ok_or_else(|| StereoError::NotReady(format!("{} scene", router.active())))?;
        renderer.render(graph, camera)?;
        Ok(())
    }

    /// One full frame: hover pass, then render.
    pub fn frame<R: SceneRenderer>(
        &mut self,
        router: &ControllerRouter,
        renderer: &mut R,
        camera: &Camera,
    ) -> Result<(), FrameError> {
        self.update_hover(router)?;
        self.render(router, renderer, camera)?;
        self.frames += 1;
        Ok(())
    }

    pub fn hover(&self, slot: ControllerSlot) -> Option<&HoverTarget> {
        self.hover[slot.index()].as_ref()
    }

    /// Laser length for a controller: hover distance, else the default reach.
    pub fn laser_length(&self, slot: ControllerSlot) -> f32 {
        self.hover(slot)
            .map_or(self.ray_length, |hover| hover.distance)
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(5.0)
    }
}
