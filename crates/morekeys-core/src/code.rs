// Morekeys Key Codes
// Code values emitted by keys: positive Unicode code points and negative
// function codes, plus the registry backing `!code/` names in key specs

use std::sync::OnceLock;

use indexmap::IndexMap;

pub const CODE_ENTER: i32 = '\n' as i32;
pub const CODE_TAB: i32 = '\t' as i32;
pub const CODE_SPACE: i32 = ' ' as i32;

// Function codes are negative so they can never collide with a code point.
pub const CODE_SHIFT: i32 = -1;
pub const CODE_SYMBOL_SWITCH: i32 = -2;
pub const CODE_DELETE: i32 = -3;
pub const CODE_SETTINGS: i32 = -4;
pub const CODE_SHORTCUT: i32 = -5;
pub const CODE_ACTION_ENTER: i32 = -6;
pub const CODE_LANGUAGE_SWITCH: i32 = -7;

fn named_codes() -> &'static IndexMap<&'static str, i32> {
    static NAMED_CODES: OnceLock<IndexMap<&'static str, i32>> = OnceLock::new();
    NAMED_CODES.get_or_init(|| {
        IndexMap::from([
            ("key_enter", CODE_ENTER),
            ("key_tab", CODE_TAB),
            ("key_space", CODE_SPACE),
            ("key_shift", CODE_SHIFT),
            ("key_symbol_switch", CODE_SYMBOL_SWITCH),
            ("key_delete", CODE_DELETE),
            ("key_settings", CODE_SETTINGS),
            ("key_shortcut", CODE_SHORTCUT),
            ("key_action_enter", CODE_ACTION_ENTER),
            ("key_language_switch", CODE_LANGUAGE_SWITCH),
        ])
    })
}

/// Resolve a `!code/` name to its code value
pub fn code_from_name(name: &str) -> Option<i32> {
    named_codes().get(name).copied()
}

/// Printable form of a code for diagnostics and display
pub fn printable_code(code: i32) -> String {
    if code < 0 {
        return match named_codes().iter().find(|(_, c)| **c == code) {
            Some((name, _)) => format!("!code/{name}"),
            None => format!("!code/{code}"),
        };
    }
    match u32::try_from(code).ok().and_then(char::from_u32) {
        Some(c) if !c.is_control() => c.to_string(),
        _ => format!("\\u{{{code:04X}}}"),
    }
}
