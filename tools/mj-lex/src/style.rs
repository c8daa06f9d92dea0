//! Per-token-type colours.

use std::fmt;
use std::str::FromStr;

use mj_lexer::TokenType;

/// A 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_hex(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Rgb { r, g, b }
    }

    pub const fn to_hex(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour `{0}` (expected 0xRRGGBB or #RRGGBB)")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ParseColorError(s.to_owned()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|_| ParseColorError(s.to_owned()))
    }
}

/// Colour for every [`TokenType`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleTable {
    colors: [Rgb; TokenType::COUNT],
}

impl Default for StyleTable {
    /// The classic MiniJava editor palette.
    fn default() -> Self {
        let mut colors = [Rgb::from_hex(0x00_0000); TokenType::COUNT];
        colors[TokenType::Keyword.index()] = Rgb::from_hex(0x00_2967);
        colors[TokenType::Type.index()] = Rgb::from_hex(0x00_2967);
        colors[TokenType::Number.index()] = Rgb::from_hex(0x01_6800);
        colors[TokenType::String.index()] = Rgb::from_hex(0x65_0067);
        colors[TokenType::Operator.index()] = Rgb::from_hex(0x67_0001);
        colors[TokenType::Comment.index()] = Rgb::from_hex(0x11_4e21);
        StyleTable { colors }
    }
}

impl StyleTable {
    #[inline]
    pub fn get(&self, kind: TokenType) -> Rgb {
        self.colors[kind.index()]
    }

    pub fn set(&mut self, kind: TokenType, color: Rgb) {
        self.colors[kind.index()] = color;
    }
}
