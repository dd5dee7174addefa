//! Static lookup tables from symbolic names to SGR codes.
//!
//! Names are case-sensitive. Some names are aliases and share a code
//! (`darkGray` / `darkGrey`). A lookup either produces a complete escape
//! sequence or an empty string; there is no error case.

/// Sequence restoring the terminal's default rendition.
pub const RESET: &str = "\x1b[0m";

/// Foreground colours.
pub const FOREGROUND_COLOURS: &[(&str, &str)] = &[
    ("black", "0;30"),
    ("blue", "0;34"),
    ("brown", "0;33"),
    ("cyan", "0;36"),
    ("darkGray", "1;30"),
    ("darkGrey", "1;30"),
    ("green", "0;32"),
    ("lightBlue", "1;34"),
    ("lightCyan", "1;36"),
    ("lightGray", "0;37"),
    ("lightGreen", "1;32"),
    ("lightGrey", "0;37"),
    ("lightPurple", "1;35"),
    ("lightRed", "1;31"),
    ("purple", "0;35"),
    ("red", "0;31"),
    ("white", "1;37"),
    ("yellow", "1;33"),
];

/// Background colours.
pub const BACKGROUND_COLOURS: &[(&str, &str)] = &[
    ("black", "40"),
    ("blue", "44"),
    ("cyan", "46"),
    ("green", "42"),
    ("grey", "47"),
    ("lightGray", "47"),
    ("lightGrey", "47"),
    ("magenta", "45"),
    ("red", "41"),
    ("yellow", "43"),
];

/// Text format attributes.
///
/// Several of these cancel each other out on real terminals (e.g. `hidden`
/// with `reverse`); combinations are passed through untouched.
pub const FORMAT_CODES: &[(&str, &str)] = &[
    ("blink", "5"),
    ("bold", "1"),
    ("dim", "2"),
    ("hidden", "8"),
    ("reverse", "7"),
    ("underline", "4"),
];

/// Wrap a raw SGR code in the escape template, e.g. `"1"` -> `"\x1b[1m"`.
pub fn escape(code: &str) -> String {
    format!("\x1b[{}m", code)
}

fn lookup(table: &[(&str, &str)], kind: &'static str, name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };

    match table.iter().find(|(key, _)| *key == name) {
        Some((_, code)) => escape(code),
        None => {
            tracing::trace!(kind, name, "unknown style name, no styling applied");
            String::new()
        }
    }
}

/// Escape sequence for a foreground colour, or `""` if unset or unknown.
pub fn foreground_code(name: Option<&str>) -> String {
    lookup(FOREGROUND_COLOURS, "foreground", name)
}

/// Escape sequence for a background colour, or `""` if unset or unknown.
pub fn background_code(name: Option<&str>) -> String {
    lookup(BACKGROUND_COLOURS, "background", name)
}

/// Escape sequence for a format attribute, or `""` if unset or unknown.
pub fn format_code(name: Option<&str>) -> String {
    lookup(FORMAT_CODES, "format", name)
}

pub fn reset() -> &'static str {
    RESET
}
