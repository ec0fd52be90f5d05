mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "G");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "T");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, ".");
    }

    #[test]
    fn parse_cmd_modifier() {
        let kb = parse_keybind("Cmd+G").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
        assert_eq!(kb.key, "G");
    }

    #[test]
    fn parse_default_stereo_bindings() {
        assert_eq!(parse_keybind("Space").unwrap().key, "Space");
        assert_eq!(parse_keybind("F").unwrap().key, "F");
        assert_eq!(parse_keybind("f").unwrap().key, "F");
        assert_eq!(parse_keybind("F11").unwrap().key, "F11");
        assert_eq!(parse_keybind("Esc").unwrap().key, "Escape");
    }

    #[test]
    fn parse_numpad_keys_keep_canonical_case() {
        assert_eq!(parse_keybind("Numpad1").unwrap().key, "Numpad1");
        assert_eq!(parse_keybind("numpad3").unwrap().key, "Numpad3");
        assert_eq!(parse_keybind("NUMPAD2").unwrap().key, "Numpad2");
        assert_eq!(parse_keybind("Shift+Numpad2").unwrap().key, "Numpad2");
    }

    #[test]
    fn parse_empty_string_fails() {
        assert!(parse_keybind("").is_err());
    }

    #[test]
    fn parse_unknown_modifier_fails() {
        assert!(parse_keybind("Hyper+X").is_err());
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "A");
    }

    #[test]
    fn display_keybind_platform() {
        let kb = KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: "G".into(),
        };
        let display = keybind_to_display(&kb);

        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}G");
        } else {
            assert_eq!(display, "Ctrl+G");
        }
    }

    #[test]
    fn display_bare_key() {
        let kb = parse_keybind("Numpad2").unwrap();
        assert_eq!(keybind_to_display(&kb), "Numpad2");
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = KeyBind {
            modifiers: vec![Modifier::Ctrl, Modifier::Shift],
            key: "T".into(),
        };

        let json = serde_json::to_string(&kb).unwrap();
        let deserialized: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, deserialized);
    }
}
