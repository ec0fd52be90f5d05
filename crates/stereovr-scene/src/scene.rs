use glam::Affine3A;
use stereovr_common::{ControllerSlot, SceneKind};
use stereovr_renderer::raycast::intersect_nodes;
use stereovr_renderer::{Intersection, NodeId, Ray, SceneGraph};

use crate::handlers::InteractionHandlers;

/// Events a scene raises for the router. Scenes never touch each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSignal {
    /// The home scene's menu box was selected.
    SelectionRequested,
}

/// Behavior shared by the home and video scenes.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    fn graph(&self) -> &SceneGraph;

    fn graph_mut(&mut self) -> &mut SceneGraph;

    fn handlers(&self) -> &InteractionHandlers;

    fn handlers_mut(&mut self) -> &mut InteractionHandlers;

    /// Nodes rays are tested against. Nothing else in the graph is pickable.
    fn interactive(&self) -> &[NodeId];

    /// Scene-specific reaction to a select press that hit `hit`.
    fn on_select(&mut self, slot: ControllerSlot, hit: &Intersection) -> Option<SceneSignal>;

    /// Attach the select/hover handler pair.
    fn activate_interaction(&mut self) {
        self.handlers_mut().attach();
    }

    /// Detach the handler pair. Idempotent.
    fn deactivate_interaction(&mut self) {
        self.handlers_mut().detach();
    }

    /// Detach, then attach again if `active`.
    fn set_active(&mut self, active: bool) {
        self.deactivate_interaction();
        if active {
            self.activate_interaction();
        }
    }

    /// Nearest interactive node hit by a controller's forward (-Z) ray.
    fn hit_test(&self, controller: &Affine3A) -> Option<Intersection> {
        let ray = Ray::from_transform(controller);
        intersect_nodes(&ray, self.graph(), self.interactive())
            .into_iter()
            .next()
    }

    /// `selectstart` from `slot`. Ignored while this scene's handlers are
    /// detached. Callers only forward connected controllers.
    fn select_start(&mut self, slot: ControllerSlot, controller: &Affine3A) -> Option<SceneSignal> {
        if !self.handlers_mut().press(slot) {
            return None;
        }
        let hit = self.hit_test(controller)?;
        tracing::debug!(scene = %self.kind(), %slot, node = %hit.node, "select hit");
        self.on_select(slot, &hit)
    }

    /// `selectend` from `slot`. Returns `true` if it closed a press.
    fn select_end(&mut self, slot: ControllerSlot) -> bool {
        self.handlers_mut().release(slot)
    }
}
