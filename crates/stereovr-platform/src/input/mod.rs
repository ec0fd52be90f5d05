//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.
//!
//! Built from [`KeybindConfig`](stereovr_config::schema::KeybindConfig) at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
