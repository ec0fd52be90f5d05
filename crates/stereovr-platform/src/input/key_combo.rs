use crate::keymap::{KeyBind, Modifier};

/// Lookup key for the registry: a modifier bitmask plus a normalized key
/// name, so `Shift+Ctrl+X` and `Ctrl+Shift+X` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// One [`Modifier::bit`] per held modifier.
    pub mods: u8,
    /// Normalized key name (e.g. "Space", "F", "Numpad2").
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |mask, m| mask | m.bit()),
            key: kb.key.clone(),
        }
    }

    /// Build from the modifier state winit reports and a normalized key name.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let held = [ctrl, alt, shift, super_key];
        let mods = Modifier::ALL
            .into_iter()
            .zip(held)
            .filter(|(_, down)| *down)
            .fold(0, |mask, (m, _)| mask | m.bit());
        Self { mods, key }
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier.bit() != 0
    }

    /// Back to a [`KeyBind`] with modifiers in display order.
    pub(super) fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: Modifier::ALL
                .into_iter()
                .filter(|m| self.has(*m))
                .collect(),
            key: self.key.clone(),
        }
    }
}
