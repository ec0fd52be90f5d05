//! Keyboard input plumbing: keybind strings, key combos, and the
//! registry that maps them to [`Action`](stereovr_common::Action)s.

pub mod input;
pub mod keymap;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use winit_keys::{normalize_physical_key, normalize_winit_key};
