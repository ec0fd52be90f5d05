pub mod camera;
pub mod gpu;
pub mod graph;
pub mod mesh_pipeline;
pub mod perf;
pub mod raycast;
pub mod render_state;
pub mod sphere;
pub mod stereo;
pub mod video;

pub use camera::Camera;
pub use gpu::{GpuContext, RendererError};
pub use graph::{
    Collider, Layer, Material, Mesh, Node, NodeDesc, NodeId, SceneGraph, SceneRenderer,
};
pub use perf::FrameTimer;
pub use raycast::{Intersection, Ray};
pub use render_state::RenderState;
pub use sphere::SphereSpec;
pub use stereo::{BaselineUv, DerivedUv, EyeSurface, StereoSurface};
pub use video::{FrameSource, StillImageSource, TestPatternSource, VideoFrame};
