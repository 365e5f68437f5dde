//! # swatchpick
//!
//! Load an image, hover to preview the pixel under the pointer and click to
//! pick it. Picks are reported as RGB, HSL, HSV and a 0–512 scaled triple, and
//! collected in a session palette whose swatches restore the exact readout
//! they were picked with.
//!
//! The color math ([`color`]), sampling ([`image`]), [`palette`] and
//! [`picker`] modules do not depend on a running UI; [`app`] wires them into
//! an eframe window.

pub mod app;
pub mod color;
pub mod config;
pub mod image;
pub mod palette;
pub mod picker;
mod util;

pub use app::SwatchpickApp;
pub use config::AppConfig;
