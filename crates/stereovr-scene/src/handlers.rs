use std::collections::BTreeSet;

use stereovr_common::ControllerSlot;

/// The select/hover handler pair a scene installs on the controller rig.
///
/// The pair is attached and detached as a unit, independent of how many
/// controllers are connected. Attach and detach counts are kept so callers
/// can check that every attach was matched by a detach.
#[derive(Debug, Default, Clone)]
pub struct InteractionHandlers {
    live: bool,
    pressed: BTreeSet<ControllerSlot>,
    attach_count: u64,
    detach_count: u64,
}

impl InteractionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the handler pair. A no-op if already attached.
    pub fn attach(&mut self) {
        if !self.live {
            self.live = true;
            self.attach_count += 1;
        }
    }

    /// Detach the handler pair and drop pending presses. Idempotent.
    pub fn detach(&mut self) {
        if self.live {
            self.live = false;
            self.detach_count += 1;
        }
        self.pressed.clear();
    }

    pub fn is_active(&self) -> bool {
        self.live
    }

    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }

    pub fn detach_count(&self) -> u64 {
        self.detach_count
    }

    /// Record a select press. Returns `false` while detached.
    pub(crate) fn press(&mut self, slot: ControllerSlot) -> bool {
        self.live && {
            self.pressed.insert(slot);
            true
        }
    }

    /// Record a select release. Returns `true` if a press was pending.
    pub(crate) fn release(&mut self, slot: ControllerSlot) -> bool {
        self.pressed.remove(&slot)
    }

    pub fn is_pressed(&self, slot: ControllerSlot) -> bool {
        self.pressed.contains(&slot)
    }
}
