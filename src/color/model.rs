use std::fmt;

use crate::color::{
    ColorFloat,
    error::ColorError,
    parse::hex_to_rgb,
    rgb::{Rgb, rgb_to_hsl},
};

/// Map a `[0, 1]` channel onto `[0, 255]`.
#[inline(always)]
fn unit_to_u8(x: ColorFloat) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A color in HSL space.
///
/// `hue` is in degrees, `saturation` and `lightness` are percentages. The
/// fields are stored exactly as given: nothing is wrapped or clamped until a
/// conversion needs it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// [0, 360) (any number); [`rgb_to_hsl`] can round up to exactly 360
    pub hue: ColorFloat,
    /// [0, 100]
    pub saturation: ColorFloat,
    /// [0, 100]
    pub lightness: ColorFloat,
}

impl Color {
    pub const fn new(hue: ColorFloat, saturation: ColorFloat, lightness: ColorFloat) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    #[must_use]
    #[inline]
    pub fn with_hue(self, hue: ColorFloat) -> Self {
        Self { hue, ..self }
    }

    #[must_use]
    #[inline]
    pub fn with_saturation(self, saturation: ColorFloat) -> Self {
        Self { saturation, ..self }
    }

    #[must_use]
    #[inline]
    pub fn with_lightness(self, lightness: ColorFloat) -> Self {
        Self { lightness, ..self }
    }

    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }

    /// Parse a `#RRGGBB` string and convert it to HSL.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(rgb_to_hsl)
    }

    // piecewise-linear form: https://en.wikipedia.org/wiki/HSL_and_HSV#HSL_to_RGB_alternative
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.hue;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let a = s * l.min(1.0 - l);
        let channel = |n: ColorFloat| -> u8 {
            let k = (n + h / 30.0).rem_euclid(12.0);
            unit_to_u8(l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0))
        };

        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// `#rrggbb`, lowercase.
    #[must_use]
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_string()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgb(), f)
    }
}
