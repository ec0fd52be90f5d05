//! GPU-side state: surface, mesh pipeline, per-node buffers, and the
//! video frame texture.

mod gpu_mesh;
mod helpers;
mod state;
mod textures;

pub use state::RenderState;
