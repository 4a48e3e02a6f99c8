use crate::color::{error::ColorError, model::Color, rgb::Rgb};

/// Parse a `#RRGGBB` hex color into its RGB channels.
///
/// Digits may be upper or lower case. Anything other than a `#` followed by
/// exactly six hex digits is rejected with [`ColorError::InvalidHexFormat`];
/// no trimming, shorthand (`#RGB`) or alpha forms are accepted.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || {
        tracing::debug!(input = hex, "rejected hex color");
        ColorError::InvalidHexFormat {
            input: hex.to_string(),
        }
    };

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?.as_bytes();
    if digits.len() != 6 {
        return Err(invalid());
    }

    let byte = |hi: u8, lo: u8| -> Result<u8, ColorError> {
        let h = nibble(hi).ok_or_else(invalid)?;
        let l = nibble(lo).ok_or_else(invalid)?;

        Ok(h << 4 | l)
    };

    Ok(Rgb::new(
        byte(digits[0], digits[1])?,
        byte(digits[2], digits[3])?,
        byte(digits[4], digits[5])?,
    ))
}

impl core::str::FromStr for Rgb {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}
impl TryFrom<&str> for Rgb {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        hex_to_rgb(value)
    }
}

impl core::str::FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}
impl TryFrom<&str> for Color {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_hex(value)
    }
}
