//! The three sub-encoders. Each validates its `fg`/`bg` input and returns the
//! start sequence, or an empty string when neither side is set.

use ansi_term_codes::{BG_INDEXED, CSI, FG_INDEXED, SGR_END};

use crate::color::{Channel, ColorSpec, Rgb, RgbSpec};
use crate::error::{ColorizeError, Result};

/// 3/4-bit palette names.
pub(crate) fn names(fg: Option<&ColorSpec>, bg: Option<&ColorSpec>) -> Result<String> {
    let fg_code = fg
        .map(|spec| palette_code(Channel::Foreground, spec))
        .transpose()?;
    let bg_code = bg
        .map(|spec| palette_code(Channel::Background, spec))
        .transpose()?;
    Ok(join_codes(
        fg_code.unwrap_or_default(),
        bg_code.unwrap_or_default(),
    ))
}

fn palette_code(channel: Channel, spec: &ColorSpec) -> Result<&'static str> {
    let lookup = match channel {
        Channel::Foreground => ansi_term_codes::foreground,
        Channel::Background => ansi_term_codes::background,
    };
    if let ColorSpec::Named(name) = spec {
        return lookup(name).ok_or_else(|| ColorizeError::InvalidColorName {
            channel,
            name: name.clone(),
        });
    }
    Err(ColorizeError::InvalidColorName {
        channel,
        name: spec.to_string(),
    })
}

/// 8-bit palette indices.
pub(crate) fn byte(fg: Option<&ColorSpec>, bg: Option<&ColorSpec>) -> Result<String> {
    let fg_ = match fg {
        Some(spec) => format!("{FG_INDEXED}{}", palette_index(Channel::Foreground, spec)?),
        None => String::new(),
    };
    let bg_ = match bg {
        Some(spec) => format!("{BG_INDEXED}{}", palette_index(Channel::Background, spec)?),
        None => String::new(),
    };
    Ok(join_codes(&fg_, &bg_))
}

fn palette_index(channel: Channel, spec: &ColorSpec) -> Result<u8> {
    let index = match spec {
        ColorSpec::Byte(index) => u8::try_from(*index).ok(),
        _ => None,
    };
    index.ok_or_else(|| ColorizeError::InvalidByteValue {
        channel,
        value: spec.to_string(),
    })
}

/// 24-bit colors. Strings (either `Named` or `RgbSpec::Hex`) are parsed as hex.
pub(crate) fn rgb(fg: Option<&ColorSpec>, bg: Option<&ColorSpec>) -> Result<String> {
    let fg_ = match fg {
        Some(spec) => true_color(Channel::Foreground, spec)?.fg_fragment(),
        None => String::new(),
    };
    let bg_ = match bg {
        Some(spec) => true_color(Channel::Background, spec)?.bg_fragment(),
        None => String::new(),
    };
    Ok(join_codes(&fg_, &bg_))
}

fn true_color(channel: Channel, spec: &ColorSpec) -> Result<Rgb> {
    match spec {
        ColorSpec::Named(hex) | ColorSpec::Rgb(RgbSpec::Hex(hex)) => hex.parse(),
        ColorSpec::Rgb(RgbSpec::Components(components)) => {
            Rgb::from_components(channel, components)
        }
        ColorSpec::Byte(_) => Err(ColorizeError::InvalidRgbComponents {
            channel,
            value: spec.to_string(),
        }),
    }
}

/// Join the non-empty fragments with `;` (fg first) and wrap them as an SGR
/// sequence. Returns an empty string when there is nothing to apply.
pub(crate) fn join_codes(fg: &str, bg: &str) -> String {
    let codes = [fg, bg]
        .into_iter()
        .filter(|code| !code.is_empty())
        .collect::<Vec<_>>()
        .join(";");
    if codes.is_empty() {
        return String::new();
    }
    format!("{CSI}{codes}{SGR_END}")
}
