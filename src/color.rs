//! Colours and the pager palette.
//!
//! Colours are written as `"#rrggbb"` (or `"#rgb"`) strings in the
//! configuration file.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error from parsing a colour string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}: expected #rrggbb or #rgb")]
pub struct ColorParseError(String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc is shorthand for #aabbcc.
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 0x11)
                        .map_err(|_| err())
                };
                Ok(Color::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// Semantic role of a colour in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Fill of every desktop cell.
    Background,
    /// Fill of the current desktop's cell.
    ActiveBackground,
    /// Fill of client rectangles, and the desktop dividers.
    Foreground,
    /// Fill of the focused client.
    ActiveForeground,
    /// Outline around client rectangles.
    Outline,
}

/// The colours a pager draws with.
///
/// Every field is optional in the configuration file; missing entries fall
/// back to [`Palette::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub active_background: Color,
    pub foreground: Color,
    pub active_foreground: Color,
    pub outline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x99, 0x99, 0x99),
            active_background: Color::rgb(0xcc, 0xcc, 0xff),
            foreground: Color::rgb(0x33, 0x33, 0x33),
            active_foreground: Color::rgb(0x00, 0x77, 0xcc),
            outline: Color::rgb(0x00, 0x00, 0x00),
        }
    }
}

impl Palette {
    /// Look up the colour for `role`.
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::ActiveBackground => self.active_background,
            ColorRole::Foreground => self.foreground,
            ColorRole::ActiveForeground => self.active_foreground,
            ColorRole::Outline => self.outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_hex() {
        assert_eq!("#0077cc".parse::<Color>().unwrap(), Color::rgb(0, 0x77, 0xcc));
        assert_eq!("#FfF".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(" #123456 ".parse::<Color>().unwrap(), Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("0077cc".parse::<Color>().is_err());
        assert!("#0077c".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn partial_palette_keeps_defaults() {
        let p: Palette = serde_json::from_str(r##"{ "outline": "#ff0000" }"##).unwrap();
        assert_eq!(p.outline, Color::rgb(255, 0, 0));
        assert_eq!(p.background, Palette::default().background);
    }

    #[test]
    fn roles_map_to_fields() {
        let p = Palette::default();
        assert_eq!(p.get(ColorRole::ActiveForeground), p.active_foreground);
        assert_eq!(p.get(ColorRole::Outline), p.outline);
    }
}
