use stereovr_common::{ControllerNodeId, ControllerSlot, SceneKind, StereoError};
use stereovr_renderer::{Intersection, SceneGraph};

use crate::controller::ControllerRig;
use crate::home::HomeScene;
use crate::scene::{Scene, SceneSignal};
use crate::video::VideoScene;

/// Owns both scenes, the controller rig, and which scene is active.
///
/// A transition moves all four controller nodes into the target scene's
/// graph, detaches the other scene's handler pair, and attaches the
/// target's. It either completes or fails with `NotReady` leaving
/// everything untouched. Disconnected controllers are filtered here, not in
/// the scenes.
pub struct ControllerRouter {
    active: SceneKind,
    home: Option<HomeScene>,
    video: Option<VideoScene>,
    rig: Option<ControllerRig>,
}

impl ControllerRouter {
    /// An empty router in the HOME state. Install both scenes and the rig
    /// before driving it.
    pub fn new() -> Self {
        Self {
            active: SceneKind::Home,
            home: None,
            video: None,
            rig: None,
        }
    }

    pub fn install_home(&mut self, scene: HomeScene) {
        self.home = Some(scene);
        self.adopt();
    }

    pub fn install_video(&mut self, scene: VideoScene) {
        self.video = Some(scene);
        self.adopt();
    }

    pub fn install_rig(&mut self, rig: ControllerRig) {
        self.rig = Some(rig);
        self.adopt();
    }

    /// Place the rig in the active scene once everything is installed.
    fn adopt(&mut self) {
        if self.is_ready() {
            let active = self.active;
            if let Err(e) = self.apply(active) {
                tracing::warn!("Failed to place controllers in {active} scene: {e}");
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.home.is_some() && self.video.is_some() && self.rig.is_some()
    }

    fn ensure_ready(&self) -> Result<(), StereoError> {
        let missing: Vec<&str> = [
            (self.home.is_none(), "home scene"),
            (self.video.is_none(), "video scene"),
            (self.rig.is_none(), "controller rig"),
        ]
        .into_iter()
        .filter_map(|(absent, name)| absent.then_some(name))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StereoError::NotReady(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }

    pub fn active(&self) -> SceneKind {
        self.active
    }

    /// Switch to the other scene. Returns the new active scene.
    pub fn toggle(&mut self) -> Result<SceneKind, StereoError> {
        let target = self.active.other();
        self.activate(target)?;
        Ok(target)
    }

    /// Make `target` the active scene. A no-op if it already is.
    pub fn activate(&mut self, target: SceneKind) -> Result<(), StereoError> {
        if let Err(e) = self.ensure_ready() {
            tracing::warn!("Scene transition to {target} rejected: {e}");
            return Err(e);
        }
        if target == self.active {
            return Ok(());
        }
        let from = self.active;
        self.apply(target)?;
        tracing::info!("Scene transition: {from} -> {target}");
        Ok(())
    }

    fn apply(&mut self, target: SceneKind) -> Result<(), StereoError> {
        let (Some(home), Some(video), Some(rig)) =
            (self.home.as_mut(), self.video.as_mut(), self.rig.as_ref())
        else {
            return Err(StereoError::NotReady("scenes or rig not installed".into()));
        };

        let (target_scene, other_scene): (&mut dyn Scene, &mut dyn Scene) = match target {
            SceneKind::Home => (home as &mut dyn Scene, video as &mut dyn Scene),
            SceneKind::Video => (video as &mut dyn Scene, home as &mut dyn Scene),
        };

        for id in rig.node_ids() {
            other_scene.graph_mut().detach_controller(id);
            target_scene.graph_mut().detach_controller(id);
            target_scene.graph_mut().attach_controller(id);
        }

        other_scene.set_active(false);
        target_scene.set_active(true);

        self.active = target;
        Ok(())
    }

    /// React to a signal raised by a scene.
    pub fn handle_signal(&mut self, signal: SceneSignal) -> Result<(), StereoError> {
        match signal {
            SceneSignal::SelectionRequested => self.activate(SceneKind::Video),
        }
    }

    /// Connect or disconnect a controller. The active scene's handlers
    /// serve it from its next select; a disconnect drops its pending press.
    pub fn set_connected(
        &mut self,
        slot: ControllerSlot,
        connected: bool,
    ) -> Result<(), StereoError> {
        let Some(rig) = self.rig.as_mut() else {
            return Err(StereoError::NotReady("missing controller rig".into()));
        };
        rig.set_connected(slot, connected);
        if !connected {
            if let Some(scene) = self.active_scene_mut() {
                scene.select_end(slot);
            }
        }
        Ok(())
    }

    /// Nearest interactive hit in the active scene for one controller.
    /// Disconnected controllers never hit anything.
    pub fn hit_test(&self, slot: ControllerSlot) -> Result<Option<Intersection>, StereoError> {
        self.ensure_ready()?;
        let (Some(scene), Some(rig)) = (self.active_scene(), self.rig.as_ref()) else {
            return Ok(None);
        };
        if !rig.is_connected(slot) {
            return Ok(None);
        }
        Ok(scene.hit_test(&rig.ray_transform(slot)))
    }

    /// `selectstart` from a controller, delivered to the active scene. Any
    /// signal the scene raises has already been handled when this returns.
    pub fn select_start(
        &mut self,
        slot: ControllerSlot,
    ) -> Result<Option<SceneSignal>, StereoError> {
        self.ensure_ready()?;
        let Some(rig) = self.rig.as_ref() else {
            return Ok(None);
        };
        if !rig.is_connected(slot) {
            return Ok(None);
        }
        let transform = rig.ray_transform(slot);
        let signal = self
            .active_scene_mut()
            .and_then(|scene| scene.select_start(slot, &transform));
        if let Some(signal) = signal {
            self.handle_signal(signal)?;
        }
        Ok(signal)
    }

    /// `selectend` from a controller. Returns `true` if it closed a press in
    /// the active scene.
    pub fn select_end(&mut self, slot: ControllerSlot) -> Result<bool, StereoError> {
        self.ensure_ready()?;
        Ok(self
            .active_scene_mut()
            .is_some_and(|scene| scene.select_end(slot)))
    }

    pub fn active_scene(&self) -> Option<&dyn Scene> {
        self.scene(self.active)
    }

    fn active_scene_mut(&mut self) -> Option<&mut dyn Scene> {
        match self.active {
            SceneKind::Home => self.home.as_mut().map(|s| s as &mut dyn Scene),
            SceneKind::Video => self.video.as_mut().map(|s| s as &mut dyn Scene),
        }
    }

    pub fn scene(&self, kind: SceneKind) -> Option<&dyn Scene> {
        match kind {
            SceneKind::Home => self.home.as_ref().map(|s| s as &dyn Scene),
            SceneKind::Video => self.video.as_ref().map(|s| s as &dyn Scene),
        }
    }

    /// Graph of the active scene, the only one the frame driver renders.
    pub fn active_graph(&self) -> Option<&SceneGraph> {
        self.active_scene().map(|scene| scene.graph())
    }

    pub fn home(&self) -> Option<&HomeScene> {
        self.home.as_ref()
    }

    pub fn video(&self) -> Option<&VideoScene> {
        self.video.as_ref()
    }

    pub fn video_mut(&mut self) -> Option<&mut VideoScene> {
        self.video.as_mut()
    }

    pub fn rig(&self) -> Option<&ControllerRig> {
        self.rig.as_ref()
    }

    pub fn rig_mut(&mut self) -> Option<&mut ControllerRig> {
        self.rig.as_mut()
    }

    /// Which scene's graph currently holds a controller node.
    pub fn parent_of(&self, id: ControllerNodeId) -> Option<SceneKind> {
        [SceneKind::Home, SceneKind::Video]
            .into_iter()
            .find(|&kind| self.scene(kind).is_some_and(|s| s.graph().holds_controller(id)))
    }
}

impl Default for ControllerRouter {
    fn default() -> Self {
        Self::new()
    }
}
