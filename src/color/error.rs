use core::fmt;

/// One of the three channels of an [`Rgb`](crate::color::rgb::Rgb) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Channel::*;
        let name = match self {
            Red => "red",
            Green => "green",
            Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Errors raised at the parsing boundary. Once a [`Color`](crate::Color) or
/// [`Rgb`](crate::Rgb) exists, nothing downstream can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?} (expected #RRGGBB)")]
    InvalidHexFormat { input: String },

    #[error("{channel} channel out of range: {value} (expected 0..=255)")]
    OutOfRangeChannel { channel: Channel, value: i64 },
}
