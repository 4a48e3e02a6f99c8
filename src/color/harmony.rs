//! Color-wheel relationships derived from a single base [`Color`].
//!
//! Every derivation returns fresh values and leaves the base untouched.
//! The plain methods use [`HarmonyPolicy::default`], which keeps the legacy
//! arithmetic; the `*_with` variants take an explicit policy.

use core::fmt;

use crate::color::{ColorFloat, model::Color, policy::HarmonyPolicy};

/// Perceived temperature of a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Temperature {
    Warm,
    Cool,
}

impl Temperature {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color-wheel scheme, for picking a derivation at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Harmony {
    Complement,
    Monochromatic,
    Analogous,
    Triadic,
    Tetradic,
}

impl Harmony {
    pub const ALL: [Harmony; 5] = [
        Harmony::Complement,
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
    ];
}

#[inline]
fn rotate(hue: ColorFloat, degrees: ColorFloat) -> ColorFloat {
    (hue + degrees) % 360.0
}

impl Color {
    /// The hue directly across the wheel.
    #[must_use]
    pub fn complement(self) -> [Color; 1] {
        [self.with_hue(rotate(self.hue, 180.0))]
    }

    /// Same hue, with saturation and then lightness scaled by 1.2.
    #[must_use]
    pub fn monochromatic(self) -> [Color; 2] {
        self.monochromatic_with(&HarmonyPolicy::default())
    }

    #[must_use]
    pub fn monochromatic_with(self, policy: &HarmonyPolicy) -> [Color; 2] {
        let scale = |v: ColorFloat| policy.tone_scaling.apply(v * 1.2);
        [
            self.with_saturation(scale(self.saturation)),
            self.with_lightness(scale(self.lightness)),
        ]
    }

    /// Neighbours 30° either side.
    #[must_use]
    pub fn analogous(self) -> [Color; 2] {
        self.analogous_with(&HarmonyPolicy::default())
    }

    #[must_use]
    pub fn analogous_with(self, policy: &HarmonyPolicy) -> [Color; 2] {
        self.split(30.0, policy)
    }

    /// The other two corners of an equilateral triangle on the wheel.
    #[must_use]
    pub fn triadic(self) -> [Color; 2] {
        self.triadic_with(&HarmonyPolicy::default())
    }

    #[must_use]
    pub fn triadic_with(self, policy: &HarmonyPolicy) -> [Color; 2] {
        self.split(120.0, policy)
    }

    /// The other three corners of a square on the wheel.
    #[must_use]
    pub fn tetradic(self) -> [Color; 3] {
        [
            self.with_hue(rotate(self.hue, 90.0)),
            self.with_hue(rotate(self.hue, 180.0)),
            self.with_hue(rotate(self.hue, 270.0)),
        ]
    }

    #[must_use]
    pub fn warm_or_cool(self) -> Temperature {
        self.warm_or_cool_with(&HarmonyPolicy::default())
    }

    #[must_use]
    pub fn warm_or_cool_with(self, policy: &HarmonyPolicy) -> Temperature {
        if policy.temperature.is_warm(self.hue) {
            Temperature::Warm
        } else {
            Temperature::Cool
        }
    }

    #[must_use]
    pub fn harmony(self, scheme: Harmony) -> Vec<Color> {
        self.harmony_with(scheme, &HarmonyPolicy::default())
    }

    #[must_use]
    pub fn harmony_with(self, scheme: Harmony, policy: &HarmonyPolicy) -> Vec<Color> {
        match scheme {
            Harmony::Complement => self.complement().to_vec(),
            Harmony::Monochromatic => self.monochromatic_with(policy).to_vec(),
            Harmony::Analogous => self.analogous_with(policy).to_vec(),
            Harmony::Triadic => self.triadic_with(policy).to_vec(),
            Harmony::Tetradic => self.tetradic().to_vec(),
        }
    }

    // [hue + offset, hue - offset]
    fn split(self, offset: ColorFloat, policy: &HarmonyPolicy) -> [Color; 2] {
        [
            self.with_hue(rotate(self.hue, offset)),
            self.with_hue(policy.hue_subtraction.apply(self.hue, offset)),
        ]
    }
}
