use core::fmt;

use crate::color::{
    ColorFloat,
    error::{Channel, ColorError},
    model::Color,
};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(x: u8) -> Self {
        Self { r: x, g: x, b: x }
    }

    /// Build an RGB triple from wider integers, rejecting the first channel
    /// (in r, g, b order) that falls outside `0..=255`.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let check = |channel: Channel, value: i64| -> Result<u8, ColorError> {
            u8::try_from(value).map_err(|_| {
                tracing::debug!(%channel, value, "rejected rgb channel");
                ColorError::OutOfRangeChannel { channel, value }
            })
        };

        Ok(Self {
            r: check(Channel::Red, r)?,
            g: check(Channel::Green, g)?,
            b: check(Channel::Blue, b)?,
        })
    }

    #[must_use]
    #[inline]
    pub fn into_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `rrggbb`, without the leading `#`.
    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = ColorError;
    fn try_from(value: [i64; 3]) -> Result<Self, Self::Error> {
        Self::try_from_channels(value[0], value[1], value[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.into_hex6())
    }
}

/// Convert an RGB triple to HSL, rounding hue, saturation and lightness to
/// whole numbers.
///
/// The hue sector is picked by the first channel, in r, g, b order, that sits
/// at the maximum, so ties resolve the same way every time.
pub fn rgb_to_hsl(rgb: Rgb) -> Color {
    let r_prime = ColorFloat::from(rgb.r) / 255.0;
    let g_prime = ColorFloat::from(rgb.g) / 255.0;
    let b_prime = ColorFloat::from(rgb.b) / 255.0;

    let c_max = r_prime.max(g_prime).max(b_prime);
    let c_min = r_prime.min(g_prime).min(b_prime);
    let delta = c_max - c_min;

    let l = (c_max + c_min) / 2.0;

    // achromatic
    if delta <= ColorFloat::EPSILON {
        return Color::new(0.0, 0.0, (l * 100.0).round());
    }

    let s = if l >= 0.5 {
        delta / (2.0 - c_max - c_min)
    } else {
        delta / (c_max + c_min)
    };

    let at_max = |c: ColorFloat| (c_max - c).abs() <= ColorFloat::EPSILON;
    let (sector, h) = if at_max(r_prime) {
        (Channel::Red, (g_prime - b_prime) / delta)
    } else if at_max(g_prime) {
        (Channel::Green, (b_prime - r_prime) / delta + 2.0)
    } else {
        (Channel::Blue, (r_prime - g_prime) / delta + 4.0)
    };
    tracing::trace!(?rgb, %sector, "hue sector");

    let mut h = h * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Color::new(h.round(), (s * 100.0).round(), (l * 100.0).round())
}
