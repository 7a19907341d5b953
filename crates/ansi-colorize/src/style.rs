use serde::{Deserialize, Serialize};

use crate::color::{ColorSpec, Mode};
use crate::error::Result;

/// A reusable foreground/background pairing, typically loaded from a host
/// application's configuration.
///
/// ```toml
/// [styles.error]
/// fg = "bright_red"
///
/// [styles.highlight]
/// mode = "rgb"
/// fg = "f0a"
/// bg = [16, 16, 16]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<ColorSpec>,
    #[serde(default)]
    pub mode: Mode,
}

impl Style {
    pub fn new(mode: Mode) -> Self {
        Self {
            fg: None,
            bg: None,
            mode,
        }
    }

    #[must_use]
    pub fn fg(mut self, fg: impl Into<ColorSpec>) -> Self {
        self.fg = Some(fg.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, bg: impl Into<ColorSpec>) -> Self {
        self.bg = Some(bg.into());
        self
    }

    /// The start sequence for this style, empty when neither side is set.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`crate::colorize_with`].
    pub fn start_sequence(&self) -> Result<String> {
        crate::start_sequence(self.fg.as_ref(), self.bg.as_ref(), self.mode)
    }

    /// Wrap `text` in this style.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`crate::colorize_with`].
    pub fn paint(&self, text: &str) -> Result<String> {
        crate::colorize_with(text, self.fg.as_ref(), self.bg.as_ref(), self.mode)
    }
}
