//! Mesh generation for the video sphere and the menu box.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
