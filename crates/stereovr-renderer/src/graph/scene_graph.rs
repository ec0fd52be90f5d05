use std::collections::BTreeSet;

use stereovr_common::{Color, ControllerNodeId};

use super::node::{Node, NodeDesc, NodeId};

/// A render graph root: background, mesh nodes, and parented controller nodes.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    label: &'static str,
    pub background: Color,
    nodes: Vec<Node>,
    next_id: u32,
    controllers: BTreeSet<ControllerNodeId>,
}

impl SceneGraph {
    pub fn new(label: &'static str, background: Color) -> Self {
        Self {
            label,
            background,
            nodes: Vec::new(),
            next_id: 0,
            controllers: BTreeSet::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn add_node(&mut self, desc: NodeDesc) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node::from_desc(id, desc));
        id
    }

    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(index))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Parent a shared controller node here. Returns `false` if it already was.
    pub fn attach_controller(&mut self, id: ControllerNodeId) -> bool {
        self.controllers.insert(id)
    }

    /// Unparent a shared controller node. Returns `false` if it was not here.
    pub fn detach_controller(&mut self, id: ControllerNodeId) -> bool {
        self.controllers.remove(&id)
    }

    pub fn holds_controller(&self, id: ControllerNodeId) -> bool {
        self.controllers.contains(&id)
    }

    pub fn controllers(&self) -> impl Iterator<Item = ControllerNodeId> + '_ {
        self.controllers.iter().copied()
    }
}
