//! Token color values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TokenError;

/// 8-bit sRGB color with alpha, written as `#rrggbb` or `#rrggbbaa`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Replace the alpha channel (`0.0..=1.0`, clamped)
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Parse `#rgb`-style hex notation (`#rrggbb` or `#rrggbbaa`, case-insensitive)
    pub fn parse_hex(s: &str) -> Result<Self, TokenError> {
        let invalid = || TokenError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Lowercase hex; the alpha pair is only written when not opaque
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_matches_parse() {
        assert_eq!(Color::from_hex(0x0066CC), "#0066CC".parse().unwrap());
        assert_eq!(Color::from_hex(0xe6f2ff), Color::parse_hex("#e6f2ff").unwrap());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Color::from_hex(0x0066CC).to_hex(), "#0066cc");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_hex(), "#00000080");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "0066cc", "#0066c", "#0066ccf", "#zzzzzz", "#ééé"] {
            assert!(Color::parse_hex(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_hex(0x99ccff)).unwrap();
        assert_eq!(json, "\"#99ccff\"");

        let back: Color = serde_json::from_str("\"#99CCFF\"").unwrap();
        assert_eq!(back, Color::from_hex(0x99ccff));

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
