//! Minimal retained scene graph.
//!
//! A graph is a flat list of mesh nodes under an implicit root plus the set
//! of shared controller nodes currently parented to it. Controller poses
//! live with the controller rig; the graph only records ownership.

mod mesh;
mod node;
mod scene_graph;

pub use mesh::Mesh;
pub use node::{Collider, Layer, Material, Node, NodeDesc, NodeId};
pub use scene_graph::SceneGraph;

use crate::camera::Camera;
use crate::gpu::RendererError;

/// Anything that can draw a [`SceneGraph`] through a [`Camera`].
pub trait SceneRenderer {
    fn render(&mut self, graph: &SceneGraph, camera: &Camera) -> Result<(), RendererError>;
}
