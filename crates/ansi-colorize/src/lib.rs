#![doc = include_str!("../README.md")]

mod color;
mod encode;
mod error;
mod style;

pub use ansi_term_codes::RESET;
pub use color::{Channel, ColorSpec, Mode, Rgb, RgbSpec};
pub use error::{ColorizeError, Result};
pub use style::Style;

/// Surround `text` with the control sequences for the given colors.
///
/// `mode` is one of `"names"`, `"byte"` or `"rgb"`; see [`Mode`] for how each
/// interprets `fg` and `bg`. When neither color is given the text is returned
/// unchanged, otherwise the result always ends with [`RESET`].
///
/// ```
/// use ansi_colorize::{ColorSpec, colorize};
///
/// let red = ColorSpec::named("red");
/// let blue = ColorSpec::named("blue");
/// let out = colorize("x", Some(&red), Some(&blue), "names")?;
/// assert_eq!(out, "\x1b[31;44mx\x1b[0m");
/// # Ok::<(), ansi_colorize::ColorizeError>(())
/// ```
///
/// # Errors
///
/// Returns [`ColorizeError::InvalidMode`] for an unknown mode, and otherwise
/// whatever [`colorize_with`] returns.
pub fn colorize(
    text: &str,
    fg: Option<&ColorSpec>,
    bg: Option<&ColorSpec>,
    mode: &str,
) -> Result<String> {
    colorize_with(text, fg, bg, mode.parse()?)
}

/// Like [`colorize`] with an already parsed [`Mode`].
///
/// # Errors
///
/// - [`ColorizeError::InvalidColorName`] in names mode for a name missing
///   from the palette table of its channel.
/// - [`ColorizeError::InvalidByteValue`] in byte mode for anything but an
///   integer in `[0, 255]`.
/// - [`ColorizeError::InvalidHexColor`] in rgb mode for a hex string that is
///   not 3 or 6 hex digits long.
/// - [`ColorizeError::InvalidRgbComponents`] in rgb mode for a component list
///   that is not three integers in `[0, 255]`.
#[tracing::instrument(level = "trace", skip_all, fields(%mode))]
pub fn colorize_with(
    text: &str,
    fg: Option<&ColorSpec>,
    bg: Option<&ColorSpec>,
    mode: Mode,
) -> Result<String> {
    let start = start_sequence(fg, bg, mode)?;
    if start.is_empty() {
        tracing::trace!("no colors given, leaving text as is");
        return Ok(text.to_string());
    }
    Ok(format!("{start}{text}{RESET}"))
}

pub(crate) fn start_sequence(
    fg: Option<&ColorSpec>,
    bg: Option<&ColorSpec>,
    mode: Mode,
) -> Result<String> {
    let start = match mode {
        Mode::Names => encode::names(fg, bg),
        Mode::Byte => encode::byte(fg, bg),
        Mode::Rgb => encode::rgb(fg, bg),
    };
    start.inspect_err(|err| tracing::debug!(%mode, %err, "rejected color"))
}
