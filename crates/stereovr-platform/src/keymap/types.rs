use serde::{Deserialize, Serialize};

/// A keyboard modifier. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows.
    Super,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [
        Modifier::Ctrl,
        Modifier::Alt,
        Modifier::Shift,
        Modifier::Super,
    ];

    /// This modifier's bit in a [`KeyCombo`](crate::KeyCombo) mask.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Parsed form of a binding string such as `"Ctrl+Shift+F"` or `"Numpad2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    /// Normalized key name: title case, single characters uppercased.
    pub key: String,
}

impl KeyBind {
    /// A binding with no modifiers.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            key: key.into(),
        }
    }
}
