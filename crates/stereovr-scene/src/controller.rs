use glam::{Affine3A, Vec3};
use stereovr_common::{ControllerNodeId, ControllerSlot, MAX_CONTROLLERS};

/// How many hand controllers are currently reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAvailability {
    Full,
    /// Fewer than two controllers. Absent ones are skipped, not an error.
    Degraded { present: usize },
    Absent,
}

#[derive(Debug, Clone, Copy)]
struct ControllerPose {
    connected: bool,
    ray: Affine3A,
    grip: Affine3A,
}

/// The four shared controller nodes: a pointing ray and a grip per slot.
///
/// The nodes always exist; a slot without hardware behind it is simply
/// marked disconnected and ignored by hover and select.
#[derive(Debug, Clone)]
pub struct ControllerRig {
    poses: [ControllerPose; MAX_CONTROLLERS],
}

impl ControllerRig {
    /// A rig with the first `count` slots connected (clamped to two).
    pub fn with_count(count: usize) -> Self {
        let count = count.min(MAX_CONTROLLERS);
        let poses = std::array::from_fn(|index| {
            let side = if index == 0 { -1.0 } else { 1.0 };
            let rest = Affine3A::from_translation(Vec3::new(0.25 * side, -0.3, -0.3));
            ControllerPose {
                connected: index < count,
                ray: rest,
                grip: rest,
            }
        });
        if count < MAX_CONTROLLERS {
            tracing::warn!("Only {count} of {MAX_CONTROLLERS} controllers available");
        }
        Self { poses }
    }

    pub fn availability(&self) -> ControllerAvailability {
        match self.connected_slots().len() {
            0 => ControllerAvailability::Absent,
            MAX_CONTROLLERS => ControllerAvailability::Full,
            present => ControllerAvailability::Degraded { present },
        }
    }

    /// All four node ids, ray then grip, slot by slot.
    pub fn node_ids(&self) -> [ControllerNodeId; 2 * MAX_CONTROLLERS] {
        let [r0, g0] = ControllerNodeId::pair(ControllerSlot::FIRST);
        let [r1, g1] = ControllerNodeId::pair(ControllerSlot::SECOND);
        [r0, g0, r1, g1]
    }

    pub fn connected_slots(&self) -> Vec<ControllerSlot> {
        ControllerSlot::all()
            .filter(|slot| self.is_connected(*slot))
            .collect()
    }

    pub fn is_connected(&self, slot: ControllerSlot) -> bool {
        self.poses[slot.index()].connected
    }

    pub fn set_connected(&mut self, slot: ControllerSlot, connected: bool) {
        let pose = &mut self.poses[slot.index()];
        if pose.connected != connected {
            tracing::info!(
                "Controller {slot} {}",
                if connected { "connected" } else { "disconnected" }
            );
            pose.connected = connected;
        }
    }

    pub fn ray_transform(&self, slot: ControllerSlot) -> Affine3A {
        self.poses[slot.index()].ray
    }

    pub fn set_ray_transform(&mut self, slot: ControllerSlot, transform: Affine3A) {
        self.poses[slot.index()].ray = transform;
    }

    pub fn grip_transform(&self, slot: ControllerSlot) -> Affine3A {
        self.poses[slot.index()].grip
    }

    pub fn set_grip_transform(&mut self, slot: ControllerSlot, transform: Affine3A) {
        self.poses[slot.index()].grip = transform;
    }
}

impl Default for ControllerRig {
    fn default() -> Self {
        Self::with_count(MAX_CONTROLLERS)
    }
}
