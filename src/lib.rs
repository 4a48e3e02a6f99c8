//! HSL colors, color-wheel harmonies and `#RRGGBB` conversion.
//!
//! ```
//! use hsl_harmony::{Color, Temperature};
//!
//! let teal = Color::from_hex("#008080")?;
//! assert_eq!(teal.to_hex(), "#008080");
//!
//! let [opposite] = teal.complement();
//! assert_eq!(opposite.hue, 0.0);
//! assert_eq!(teal.warm_or_cool(), Temperature::Warm);
//! # Ok::<(), hsl_harmony::ColorError>(())
//! ```
//!
//! Derivations default to the legacy formulas; see [`HarmonyPolicy`] for the
//! corrected variants.

pub mod color;

pub use color::{
    ColorFloat,
    error::{Channel, ColorError},
    harmony::{Harmony, Temperature},
    model::Color,
    parse::hex_to_rgb,
    policy::{HarmonyPolicy, HueSubtraction, TemperatureRule, ToneScaling},
    rgb::{Rgb, rgb_to_hsl},
};
