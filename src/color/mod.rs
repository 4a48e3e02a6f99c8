pub mod error;
pub mod harmony;
pub mod model;
pub mod parse;
pub mod policy;
pub mod rgb;

#[cfg(feature = "color_double_precision")]
pub type ColorFloat = f64;
#[cfg(not(feature = "color_double_precision"))]
pub type ColorFloat = f32;
