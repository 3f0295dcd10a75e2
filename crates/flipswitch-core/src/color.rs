//! Validated hex color strings.
//!
//! Widget configuration passes colors through to style objects verbatim, so
//! named CSS colors like `"silver"` stay plain strings there. `HexColor` is
//! for surfaces that want to reject malformed input up front, such as the
//! demo CLI.

use std::fmt;
use std::str::FromStr;

/// A `#rgb`, `#rrggbb`, or `#rrggbbaa` color string, validated on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and canonicalize a hex color (lowercased, `#`-prefixed).
    ///
    /// # Errors
    ///
    /// Returns an error if the digits are not hexadecimal or the length is
    /// not 3, 6, or 8.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim_start_matches('#');
        if !matches!(digits.len(), 3 | 6 | 8) {
            return Err(ColorParseError::InvalidLength);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// The canonical color string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Error type for hex color parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 3, 6, or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}
