#![doc = include_str!("../README.md")]
#![no_std]

// Sequence framing
pub const CSI: &str = "\x1b[";
pub const SGR_END: &str = "m";
pub const RESET: &str = "\x1b[0m";

// Fragment prefixes for the 8-bit and 24-bit color forms
pub const FG_INDEXED: &str = "38;5;";
pub const BG_INDEXED: &str = "48;5;";
pub const FG_RGB: &str = "38;2;";
pub const BG_RGB: &str = "48;2;";

/// The 16 palette names, in table order.
pub const COLOR_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// Foreground SGR codes for the 3/4-bit palette.
///
/// Bright variants are the bold form of the base color (`1;3X`).
pub const FOREGROUNDS: [(&str, &str); 16] = [
    ("black", "30"),
    ("red", "31"),
    ("green", "32"),
    ("yellow", "33"),
    ("blue", "34"),
    ("magenta", "35"),
    ("cyan", "36"),
    ("white", "37"),
    ("bright_black", "1;30"),
    ("bright_red", "1;31"),
    ("bright_green", "1;32"),
    ("bright_yellow", "1;33"),
    ("bright_blue", "1;34"),
    ("bright_magenta", "1;35"),
    ("bright_cyan", "1;36"),
    ("bright_white", "1;37"),
];

/// Background SGR codes for the 3/4-bit palette.
///
/// Bright variants use the aixterm range (base + 60).
pub const BACKGROUNDS: [(&str, &str); 16] = [
    ("black", "40"),
    ("red", "41"),
    ("green", "42"),
    ("yellow", "43"),
    ("blue", "44"),
    ("magenta", "45"),
    ("cyan", "46"),
    ("white", "47"),
    ("bright_black", "100"),
    ("bright_red", "101"),
    ("bright_green", "102"),
    ("bright_yellow", "103"),
    ("bright_blue", "104"),
    ("bright_magenta", "105"),
    ("bright_cyan", "106"),
    ("bright_white", "107"),
];

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(key, code)| (key == name).then_some(code))
}

/// Foreground code for a palette name, e.g. `"bright_red"` -> `"1;31"`.
///
/// Names are matched exactly (lower case, underscore separated).
///
/// ```
/// assert_eq!(ansi_term_codes::foreground("red"), Some("31"));
/// assert_eq!(ansi_term_codes::foreground("Red"), None);
/// ```
pub fn foreground(name: &str) -> Option<&'static str> {
    lookup(&FOREGROUNDS, name)
}

/// Background code for a palette name, e.g. `"bright_red"` -> `"101"`.
///
/// ```
/// assert_eq!(ansi_term_codes::background("black"), Some("40"));
/// assert_eq!(ansi_term_codes::background("bright_white"), Some("107"));
/// ```
pub fn background(name: &str) -> Option<&'static str> {
    lookup(&BACKGROUNDS, name)
}
