//! Knobs for the places where the classic color-wheel formulas have
//! historically been computed in a non-obvious way.
//!
//! [`HarmonyPolicy::default`] reproduces the legacy arithmetic exactly, so
//! palettes generated by older tooling stay byte-for-byte identical.
//! [`HarmonyPolicy::corrected`] switches every knob to the textbook variant.
//!
//! With the `serde` feature the policy can be embedded in a caller's config
//! file; missing fields fall back to the legacy defaults.

use crate::color::ColorFloat;

/// How `hue - offset` is brought back onto the color wheel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HueSubtraction {
    /// `abs(hue - offset) mod 360`. Mirrors hues below `offset` instead of
    /// wrapping them (hue 10, offset 30 gives 20, not 340).
    #[default]
    Mirrored,
    /// `(hue - offset) rem_euclid 360`, true circular subtraction.
    Circular,
}

impl HueSubtraction {
    #[must_use]
    #[inline]
    pub fn apply(self, hue: ColorFloat, offset: ColorFloat) -> ColorFloat {
        match self {
            Self::Mirrored => (hue - offset).abs() % 360.0,
            Self::Circular => (hue - offset).rem_euclid(360.0),
        }
    }
}

/// How saturation/lightness are brought back into `[0, 100]` after the
/// monochromatic 1.2x scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToneScaling {
    /// `value mod 100`. 90 * 1.2 = 108 wraps to 8.
    #[default]
    Wrap,
    /// `min(value, 100)`. 90 * 1.2 = 108 stops at 100.
    Clamp,
}

impl ToneScaling {
    #[must_use]
    #[inline]
    pub fn apply(self, scaled: ColorFloat) -> ColorFloat {
        match self {
            Self::Wrap => scaled % 100.0,
            Self::Clamp => scaled.min(100.0),
        }
    }
}

/// Which hues count as warm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureRule {
    /// `330 > hue || hue < 150`, which collapses to `hue < 330`: only
    /// `[330, 360)` is cool.
    #[default]
    Literal,
    /// Warm on `[0, 90) ∪ [270, 360)`, cool on `[90, 270)`, after wrapping the
    /// hue onto the wheel.
    Symmetric,
}

impl TemperatureRule {
    #[must_use]
    #[inline]
    pub fn is_warm(self, hue: ColorFloat) -> bool {
        match self {
            #[allow(clippy::nonminimal_bool)]
            Self::Literal => 330.0 > hue || hue < 150.0,
            Self::Symmetric => {
                let h = hue.rem_euclid(360.0);
                !(90.0..270.0).contains(&h)
            }
        }
    }
}

/// Selects the formula used by each derivation on [`Color`](crate::Color).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarmonyPolicy {
    pub hue_subtraction: HueSubtraction,
    pub tone_scaling: ToneScaling,
    pub temperature: TemperatureRule,
}

impl HarmonyPolicy {
    /// Legacy arithmetic everywhere. Same as [`Default`].
    pub const fn literal() -> Self {
        Self {
            hue_subtraction: HueSubtraction::Mirrored,
            tone_scaling: ToneScaling::Wrap,
            temperature: TemperatureRule::Literal,
        }
    }

    /// Circular hue subtraction, clamped tones and the symmetric warm/cool
    /// split.
    pub const fn corrected() -> Self {
        Self {
            hue_subtraction: HueSubtraction::Circular,
            tone_scaling: ToneScaling::Clamp,
            temperature: TemperatureRule::Symmetric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_literal() {
        assert_eq!(HarmonyPolicy::default(), HarmonyPolicy::literal());
        assert_ne!(HarmonyPolicy::default(), HarmonyPolicy::corrected());
    }

    #[test]
    fn mirrored_vs_circular_subtraction() {
        assert_eq!(HueSubtraction::Mirrored.apply(10.0, 30.0), 20.0);
        assert_eq!(HueSubtraction::Circular.apply(10.0, 30.0), 340.0);
        // identical once the subtraction stays non-negative
        assert_eq!(HueSubtraction::Mirrored.apply(200.0, 120.0), 80.0);
        assert_eq!(HueSubtraction::Circular.apply(200.0, 120.0), 80.0);
    }

    #[test]
    fn wrap_vs_clamp() {
        assert_eq!(ToneScaling::Wrap.apply(108.0), 8.0);
        assert_eq!(ToneScaling::Clamp.apply(108.0), 100.0);
        assert_eq!(ToneScaling::Wrap.apply(60.0), 60.0);
        assert_eq!(ToneScaling::Clamp.apply(60.0), 60.0);
    }

    #[test]
    fn symmetric_rule_wraps_out_of_range_hues() {
        assert!(TemperatureRule::Symmetric.is_warm(-10.0));
        assert!(!TemperatureRule::Symmetric.is_warm(450.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_policy() {
        let policy: HarmonyPolicy =
            serde_json::from_str(r#"{ "hue_subtraction": "circular" }"#).unwrap();
        assert_eq!(policy.hue_subtraction, HueSubtraction::Circular);
        assert_eq!(policy.tone_scaling, ToneScaling::Wrap);
        assert_eq!(policy.temperature, TemperatureRule::Literal);

        let policy: HarmonyPolicy = serde_json::from_str(
            r#"{ "hue_subtraction": "circular", "tone_scaling": "clamp", "temperature": "symmetric" }"#,
        )
        .unwrap();
        assert_eq!(policy, HarmonyPolicy::corrected());
    }
}
