//! Scenes, the shared controller rig, and the router that moves the rig
//! between scenes.
//!
//! Exactly one scene is active at a time. The four controller nodes (a ray
//! and a grip per controller) always live in the active scene's graph, and
//! only the active scene's interaction handlers are attached.

pub mod controller;
pub mod frame;
pub mod handlers;
pub mod home;
pub mod router;
pub mod scene;
pub mod video;

pub use controller::{ControllerAvailability, ControllerRig};
pub use frame::{FrameDriver, FrameError, HoverTarget};
pub use handlers::InteractionHandlers;
pub use home::HomeScene;
pub use router::ControllerRouter;
pub use scene::{Scene, SceneSignal};
pub use video::VideoScene;
