use core::fmt;
use core::str::FromStr;

use ansi_term_codes::{BG_RGB, FG_RGB};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{ColorizeError, Result};

/// How `fg`/`bg` values are interpreted.
///
/// - `Names`: 3/4-bit palette, lower case names like `red` or `bright_green`.
/// - `Byte`: 8-bit palette index in `[0, 255]`.
/// - `Rgb`: 24-bit color, three components or a 3/6 digit hex string.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Names,
    Byte,
    Rgb,
}

impl FromStr for Mode {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::iter()
            .find(|mode| <&'static str>::from(*mode) == s)
            .ok_or_else(|| ColorizeError::InvalidMode(s.to_string()))
    }
}

/// Which half of a color directive a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Channel {
    #[strum(serialize = "fg")]
    Foreground,
    #[strum(serialize = "bg")]
    Background,
}

/// A color value as supplied by the caller.
///
/// Which variants are accepted depends on the [`Mode`]: `Named` in names
/// mode, `Byte` in byte mode, and `Rgb` or a hex string in rgb mode. In rgb
/// mode a `Named` string is read as hex, which is also what a bare string
/// deserializes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Byte(i64),
    Named(String),
    Rgb(RgbSpec),
}

/// 24-bit input before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RgbSpec {
    Components(Vec<i64>),
    Hex(String),
}

impl ColorSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn byte(index: i64) -> Self {
        Self::Byte(index)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(RgbSpec::Components(vec![r.into(), g.into(), b.into()]))
    }

    pub fn hex(hex: impl Into<String>) -> Self {
        Self::Rgb(RgbSpec::Hex(hex.into()))
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        Self::Byte(index.into())
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(index) => write!(f, "{index}"),
            Self::Named(name) | Self::Rgb(RgbSpec::Hex(name)) => write!(f, "\"{name}\""),
            Self::Rgb(RgbSpec::Components(components)) => write!(f, "{components:?}"),
        }
    }
}

/// A normalized 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `38;2;R;G;B`
    pub fn fg_fragment(self) -> String {
        format!("{FG_RGB}{self}")
    }

    /// `48;2;R;G;B`
    pub fn bg_fragment(self) -> String {
        format!("{BG_RGB}{self}")
    }

    /// Normalize a component list, which must hold exactly three values in
    /// `[0, 255]`.
    pub(crate) fn from_components(channel: Channel, components: &[i64]) -> Result<Self> {
        let invalid = || ColorizeError::InvalidRgbComponents {
            channel,
            value: format!("{components:?}"),
        };
        let [r, g, b] = components else {
            return Err(invalid());
        };
        let byte = |c: i64| u8::try_from(c).map_err(|_| invalid());
        Ok(Self::new(byte(*r)?, byte(*g)?, byte(*b)?))
    }
}

/// Renders the `R;G;B` tail of a 24-bit fragment.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

/// Parses `rgb`, `rrggbb`, `0xrgb` or `0xrrggbb` (case-insensitive).
///
/// In the 3-digit shorthand every digit is doubled, so `"f0a"` is
/// `(255, 0, 170)`.
impl FromStr for Rgb {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ColorizeError::InvalidHexColor(s.to_string());
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let short = |i: usize| byte(&digits[i..=i]).map(|d| d * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::new(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_only_lower_case_names() {
        assert_eq!("names".parse::<Mode>(), Ok(Mode::Names));
        assert_eq!("byte".parse::<Mode>(), Ok(Mode::Byte));
        assert_eq!("rgb".parse::<Mode>(), Ok(Mode::Rgb));
        assert_eq!(
            "RGB".parse::<Mode>(),
            Err(ColorizeError::InvalidMode("RGB".into()))
        );
        assert!("".parse::<Mode>().is_err());
        assert!("hsl".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_display_matches_parse() {
        for mode in Mode::iter() {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!(Mode::default(), Mode::Names);
    }

    #[test]
    fn hex_shorthand_doubles_digits() {
        assert_eq!("f0a".parse::<Rgb>(), Ok(Rgb::new(255, 0, 170)));
        assert_eq!("000".parse::<Rgb>(), Ok(Rgb::new(0, 0, 0)));
        assert_eq!("0x123".parse::<Rgb>(), Ok(Rgb::new(0x11, 0x22, 0x33)));
    }

    #[test]
    fn hex_full_form() {
        assert_eq!("0xFF0000".parse::<Rgb>(), Ok(Rgb::new(255, 0, 0)));
        assert_eq!("0Xff0000".parse::<Rgb>(), Ok(Rgb::new(255, 0, 0)));
        assert_eq!("00ff7F".parse::<Rgb>(), Ok(Rgb::new(0, 255, 127)));
    }

    #[test]
    fn hex_rejects_bad_length() {
        for input in ["abcd", "", "0x", "ab", "abcdefa", "0xabcd"] {
            assert_eq!(
                input.parse::<Rgb>(),
                Err(ColorizeError::InvalidHexColor(input.into())),
                "{input}"
            );
        }
    }

    #[test]
    fn hex_rejects_non_hex_digits() {
        assert!("ggg".parse::<Rgb>().is_err());
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("+ff".parse::<Rgb>().is_err());
        assert!("ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn components_must_be_three_bytes() {
        assert_eq!(
            Rgb::from_components(Channel::Foreground, &[1, 2, 3]),
            Ok(Rgb::new(1, 2, 3))
        );
        assert_eq!(
            Rgb::from_components(Channel::Foreground, &[0, 255, 0]),
            Ok(Rgb::new(0, 255, 0))
        );
        assert!(Rgb::from_components(Channel::Background, &[1, 2]).is_err());
        assert!(Rgb::from_components(Channel::Background, &[1, 2, 3, 4]).is_err());
        assert!(Rgb::from_components(Channel::Background, &[256, 0, 0]).is_err());
        assert!(Rgb::from_components(Channel::Background, &[0, -1, 0]).is_err());
    }

    #[test]
    fn fragments() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.fg_fragment(), "38;2;1;2;3");
        assert_eq!(rgb.bg_fragment(), "48;2;1;2;3");
    }

    #[test]
    fn spec_deserializes_by_shape() -> anyhow::Result<()> {
        let specs: Vec<ColorSpec> = serde_json::from_str(r#"[200, "red", [1, 2, 3]]"#)?;
        assert_eq!(
            specs,
            vec![
                ColorSpec::Byte(200),
                ColorSpec::named("red"),
                ColorSpec::rgb(1, 2, 3),
            ]
        );
        Ok(())
    }

    #[test]
    fn conversions() {
        assert_eq!(ColorSpec::from("blue"), ColorSpec::Named("blue".into()));
        assert_eq!(ColorSpec::from(7u8), ColorSpec::Byte(7));
        assert_eq!(ColorSpec::from([1, 2, 3]), ColorSpec::rgb(1, 2, 3));
        assert_eq!(ColorSpec::from(Rgb::new(4, 5, 6)), ColorSpec::rgb(4, 5, 6));
    }

    #[test]
    fn channel_display() {
        assert_eq!(Channel::Foreground.to_string(), "fg");
        assert_eq!(Channel::Background.to_string(), "bg");
    }
}
