//! Color models, conversions between them and the 0–512 scaled display encoding.
//!
//! HSL is the canonical representation for anything that gets stored; RGB and
//! HSV are derived from it on demand.

mod convert;
mod model;
mod scale;

pub use convert::{hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use model::{ColorError, ColorModel, Hsl, Hsv, Rgb};
pub use scale::{SCALE_MAX, ScaledChannel, ScaledColor};

#[cfg(test)]
mod tests;
