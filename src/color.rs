use std::fmt::{self, Display};

use thiserror::Error;

/// An RGBA color with 8 bits per channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// An error that occurred while parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The text contains something other than hexadecimal digits.
    #[error("could not parse a color from {0:?}: not a hexadecimal integer")]
    NotHex(String),

    /// The text has neither 6 nor 8 digits.
    #[error("could not parse a color from {text:?}: expected 6 or 8 digits, got {len}")]
    Length { text: String, len: usize },
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.strip_prefix('#').unwrap_or(text);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) || digits.is_empty() {
            return Err(ColorParseError::NotHex(text.into()));
        }

        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::Length {
                text: text.into(),
                len: digits.len(),
            });
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::NotHex(text.into()))?;

        Ok(if digits.len() == 6 {
            Self::from_rgba_u32((value << 8) | 0xff)
        } else {
            Self::from_rgba_u32(value)
        })
    }

    fn from_rgba_u32(value: u32) -> Self {
        let [red, green, blue, alpha] = value.to_be_bytes();

        Self::rgba(red, green, blue, alpha)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;

        if self.alpha != u8::MAX {
            write!(f, "{:02x}", self.alpha)?;
        }

        Ok(())
    }
}
