//! Textured mesh pipeline shared by every node in a scene graph.
//!
//! Positions and UVs live in separate vertex buffers so a stereo format
//! change only re-uploads the UV buffer.

mod pipeline;
mod shader;
mod types;

pub use pipeline::*;
pub use types::*;
