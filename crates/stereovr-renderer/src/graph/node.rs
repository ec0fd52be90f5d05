use glam::{Affine3A, Vec3};
use std::fmt;
use stereovr_common::{Color, Eye};

use super::mesh::Mesh;

/// Handle to a node inside one [`SceneGraph`](super::SceneGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Which eye a node is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    #[default]
    Both,
    Only(Eye),
}

impl Layer {
    pub fn visible_to(self, eye: Eye) -> bool {
        match self {
            Layer::Both => true,
            Layer::Only(only) => only == eye,
        }
    }
}

/// Local-space shape used for ray picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    None,
    /// Axis-aligned box centred on the node origin.
    Box { half_extents: Vec3 },
    /// Sphere centred on the node origin.
    Sphere { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Flat color.
    Color(Color),
    /// The current video frame, modulated by a tint.
    VideoFrame { tint: Color },
}

/// Everything needed to add a node to a graph.
#[derive(Debug, Clone)]
pub struct NodeDesc {
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Affine3A,
    pub layer: Layer,
    pub collider: Collider,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
    /// World transform; nodes hang directly off the graph root.
    pub transform: Affine3A,
    pub layer: Layer,
    pub collider: Collider,
    pub visible: bool,
}

impl Node {
    pub(crate) fn from_desc(id: NodeId, desc: NodeDesc) -> Self {
        Self {
            id,
            name: desc.name,
            mesh: desc.mesh,
            material: desc.material,
            transform: desc.transform,
            layer: desc.layer,
            collider: desc.collider,
            visible: true,
        }
    }
}
