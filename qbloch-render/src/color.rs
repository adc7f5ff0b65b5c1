//! Colors and the default trace palette
//!
//! Colors parse from matplotlib-style specifications: single-letter names
//! (`"r"`, `"k"`), a few full names, `#rrggbb` hex and `C0`..`C9` cycle
//! references.

use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color; transparency is carried by the stroke, not the color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// matplotlib "tab10", the default property cycle
const TAB10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "b" | "blue" => Self::rgb(0, 0, 255),
            "g" | "green" => Self::rgb(0, 128, 0),
            "r" | "red" => Self::RED,
            "c" | "cyan" => Self::rgb(0, 191, 191),
            "m" | "magenta" => Self::rgb(191, 0, 191),
            "y" | "yellow" => Self::rgb(191, 191, 0),
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::WHITE,
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let lower = trimmed.to_ascii_lowercase();

        let parsed = if let Some(hex) = lower.strip_prefix('#') {
            Self::from_hex(hex)
        } else if let Some(index) = lower.strip_prefix('c').and_then(|i| i.parse::<usize>().ok()) {
            TAB10.get(index).copied()
        } else {
            Self::from_name(&lower)
        };

        parsed.ok_or_else(|| RenderError::InvalidColor(spec.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(spec: String) -> Result<Self> {
        spec.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// First `n` colors of the default cycle, wrapping around after ten
pub fn default_palette(n: usize) -> Vec<Color> {
    TAB10.iter().cycle().take(n).copied().collect()
}

/// Parse a list of color specifications
pub fn parse_colors<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Color>> {
    specs.iter().map(|spec| spec.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_names() {
        assert_eq!("k".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("r".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("g".parse::<Color>().unwrap(), Color::rgb(0, 128, 0));
    }

    #[test]
    fn test_hex_and_cycle() {
        assert_eq!("#1F77B4".parse::<Color>().unwrap(), TAB10[0]);
        assert_eq!("C3".parse::<Color>().unwrap(), TAB10[3]);
        assert!("C10".parse::<Color>().is_err());
    }

    #[test]
    fn test_invalid_color() {
        match "#12345".parse::<Color>() {
            Err(RenderError::InvalidColor(spec)) => assert_eq!(spec, "#12345"),
            other => panic!("expected invalid color, got {:?}", other),
        }
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_default_palette_truncates_and_cycles() {
        assert_eq!(default_palette(2), vec![TAB10[0], TAB10[1]]);
        assert!(default_palette(0).is_empty());
        let long = default_palette(12);
        assert_eq!(long[10], TAB10[0]);
        assert_eq!(long[11], TAB10[1]);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let parsed: Vec<Color> = serde_json::from_str(r##"["r", "#00ff00"]"##).unwrap();
        assert_eq!(parsed, vec![Color::RED, Color::rgb(0, 255, 0)]);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(parse_colors(&["r", "g"]).unwrap().len(), 2);
        assert!(parse_colors(&["r", "nope"]).is_err());
    }
}
