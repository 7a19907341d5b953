use miette::Diagnostic;
use thiserror::Error;

use crate::color::Channel;

pub type Result<T, E = ColorizeError> = core::result::Result<T, E>;

/// Everything that can go wrong while building a color sequence.
///
/// All variants are input validation failures; nothing is retried and no
/// partially colored output is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ColorizeError {
    #[error("invalid mode \"{0}\"")]
    #[diagnostic(
        code(colorize::invalid_mode),
        help("use one of \"names\", \"byte\" or \"rgb\"")
    )]
    InvalidMode(String),

    #[error("invalid color name {channel} = \"{name}\"")]
    #[diagnostic(
        code(colorize::invalid_color_name),
        help(
            "use a lower case palette name such as \"red\" or \"bright_green\" \
             (black, red, green, yellow, blue, magenta, cyan, white, optionally \"bright_\" prefixed)"
        )
    )]
    InvalidColorName { channel: Channel, name: String },

    #[error("invalid {channel} = {value}")]
    #[diagnostic(
        code(colorize::invalid_byte_value),
        help("byte mode takes an integer in [0, 255]")
    )]
    InvalidByteValue { channel: Channel, value: String },

    #[error("invalid hex RGB value \"{0}\"")]
    #[diagnostic(
        code(colorize::invalid_hex_color),
        help("use 3 or 6 hex digits, optionally prefixed with 0x, e.g. \"f0a\" or \"0xff00aa\"")
    )]
    InvalidHexColor(String),

    #[error("invalid RGB {channel} = {value}")]
    #[diagnostic(
        code(colorize::invalid_rgb_components),
        help("rgb mode takes exactly three integers in [0, 255] or a hex string")
    )]
    InvalidRgbComponents { channel: Channel, value: String },
}
