use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hand controllers the XR substrate can report.
pub const MAX_CONTROLLERS: usize = 2;

/// The two scenes the router switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    Home,
    Video,
}

impl SceneKind {
    pub fn other(self) -> Self {
        match self {
            SceneKind::Home => SceneKind::Video,
            SceneKind::Video => SceneKind::Home,
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Home => write!(f, "home"),
            SceneKind::Video => write!(f, "video"),
        }
    }
}

/// Index of a physical hand controller, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControllerSlot(u8);

impl ControllerSlot {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);

    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_CONTROLLERS).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..MAX_CONTROLLERS as u8).map(Self)
    }
}

impl fmt::Display for ControllerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of a controller's two shared nodes: the pointing ray or the grip model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ControllerRole {
    Ray,
    Grip,
}

/// Identity of one of the four shared controller nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControllerNodeId {
    pub slot: ControllerSlot,
    pub role: ControllerRole,
}

impl ControllerNodeId {
    pub fn new(slot: ControllerSlot, role: ControllerRole) -> Self {
        Self { slot, role }
    }

    /// The ray and grip node ids for one controller.
    pub fn pair(slot: ControllerSlot) -> [Self; 2] {
        [
            Self::new(slot, ControllerRole::Ray),
            Self::new(slot, ControllerRole::Grip),
        ]
    }
}

impl fmt::Display for ControllerNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            ControllerRole::Ray => write!(f, "ray-{}", self.slot),
            ControllerRole::Grip => write!(f, "grip-{}", self.slot),
        }
    }
}
