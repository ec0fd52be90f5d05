use stereovr_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a human-readable keybind string like `"Space"`, `"Ctrl+Shift+T"`,
/// or `"Numpad2"` into a [`KeyBind`].
///
/// Platform-specific normalization rules:
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` on Linux/Windows
/// - `"Option"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Win"` / `"Super"` / `"Meta"` -> `Super`
///
/// The final token is always the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    }

    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some((last, rest)) if !last.is_empty() => (*last, rest),
        _ => {
            return Err(PlatformError::InvalidKeybind(format!(
                "keybind '{s}' has no key component"
            )))
        }
    };

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    if let Some(rest) = lower.strip_prefix("numpad") {
        if !rest.is_empty() {
            return format!("Numpad{}", title_case(rest));
        }
    }
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                title_case(&lower)
            }
        }
    }
}

fn title_case(lower: &str) -> String {
    let mut chars = lower.chars();
    match chars.next() {
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{upper}{}", chars.as_str())
        }
        None => String::new(),
    }
}
