//! StereoApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use stereovr_common::ControllerSlot;
use stereovr_config::StereoConfig;
use stereovr_platform::KeybindRegistry;
use stereovr_renderer::{Camera, FrameSource, FrameTimer, RenderState};
use stereovr_scene::{ControllerRig, ControllerRouter, FrameDriver, HomeScene, VideoScene};

/// Top-level application state.
pub struct StereoApp {
    pub(super) config: StereoConfig,
    pub(super) registry: KeybindRegistry,

    // Scenes and controllers
    pub(super) router: ControllerRouter,
    pub(super) driver: FrameDriver,
    pub(super) camera: Camera,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) source: Option<Box<dyn FrameSource>>,
    pub(super) timer: FrameTimer,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Desktop pointer, in physical pixels
    pub(super) cursor: Option<(f64, f64)>,
    pub(super) look_drag: Option<(f64, f64)>,

    pub(super) should_exit: bool,
    pub(super) warned_not_ready: bool,
}

impl StereoApp {
    pub fn new(config: StereoConfig, registry: KeybindRegistry) -> Self {
        let router = build_router(&config);
        let driver = FrameDriver::new(config.controllers.ray_length as f32);
        let camera = Camera::from_config(&config.window);

        Self {
            config,
            registry,
            router,
            driver,
            camera,
            window: None,
            render_state: None,
            source: None,
            timer: FrameTimer::new(),
            modifiers: Default::default(),
            cursor: None,
            look_drag: None,
            should_exit: false,
            warned_not_ready: false,
        }
    }
}

/// Build both scenes and the rig. A scene that fails to build is logged and
/// left out, so the router reports `NotReady` instead of the app aborting.
fn build_router(config: &StereoConfig) -> ControllerRouter {
    let mut router = ControllerRouter::new();

    match HomeScene::new(&config.scenes) {
        Ok(scene) => router.install_home(scene),
        Err(e) => tracing::error!("Failed to build home scene: {e}"),
    }
    match VideoScene::new(&config.video, &config.scenes) {
        Ok(scene) => router.install_video(scene),
        Err(e) => tracing::error!("Failed to build video scene: {e}"),
    }

    let mut rig = ControllerRig::with_count(config.controllers.count as usize);
    if config.controllers.desktop_pointer {
        rig.set_connected(ControllerSlot::FIRST, true);
    }
    tracing::info!("Controller availability: {:?}", rig.availability());
    router.install_rig(rig);

    router
}
