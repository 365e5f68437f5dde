use super::convert;
use serde::Deserialize;
use thiserror::Error;

/// Rejected color component.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColorError {
    #[error("{component} must be a finite value within its range, got {value}")]
    InvalidInput { component: &'static str, value: f64 },
}

/// Which model drives the numeric readout and the magnifier preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// Hue, saturation, lightness.
    #[default]
    Hsl,
    /// Hue, saturation, value.
    Hsv,
}

impl ColorModel {
    pub const ALL: [Self; 2] = [Self::Hsl, Self::Hsv];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
        }
    }

    /// Name of the third scaled channel under this model.
    pub const fn brightness_label(self) -> &'static str {
        match self {
            Self::Hsl => "Lightness",
            Self::Hsv => "Value",
        }
    }
}

/// 8-bit sRGB triple as read from a surface pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Drop the alpha channel of an RGBA pixel.
    pub const fn from_rgba(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2])
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        convert::rgb_to_hsl(self)
    }

    pub fn to_hsv(self) -> Hsv {
        convert::rgb_to_hsv(self)
    }

    pub(crate) const fn max_channel(self) -> u8 {
        let rg = if self.r > self.g { self.r } else { self.g };
        if rg > self.b { rg } else { self.b }
    }

    pub(crate) const fn min_channel(self) -> u8 {
        let rg = if self.r < self.g { self.r } else { self.g };
        if rg < self.b { rg } else { self.b }
    }

    pub(crate) fn unit(self) -> (f64, f64, f64) {
        (
            channel_unit(self.r),
            channel_unit(self.g),
            channel_unit(self.b),
        )
    }
}

pub(crate) fn channel_unit(c: u8) -> f64 {
    f64::from(c) / 255.0
}

/// HSL with hue in degrees `[0, 360)` and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    /// Validate and build. Hue wraps around the circle; the percentages must
    /// lie in `[0, 100]`.
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: wrap_hue(h)?,
            s: percent("saturation", s)?,
            l: percent("lightness", l)?,
        })
    }

    /// Build from normalized `[0, 1]` components produced by the converters.
    pub(crate) fn from_unit(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_degrees(h * 360.0),
            s: (s * 100.0).clamp(0.0, 100.0),
            l: (l * 100.0).clamp(0.0, 100.0),
        }
    }

    pub const fn hue(self) -> f64 {
        self.h
    }

    pub const fn saturation(self) -> f64 {
        self.s
    }

    pub const fn lightness(self) -> f64 {
        self.l
    }

    /// Components normalized to `[0, 1]`.
    pub fn unit(self) -> (f64, f64, f64) {
        (self.h / 360.0, self.s / 100.0, self.l / 100.0)
    }

    pub fn to_rgb(self) -> Rgb {
        convert::hsl_to_rgb(self)
    }

    pub fn to_hsv(self) -> Hsv {
        convert::hsl_to_hsv(self)
    }

    /// Short human-readable form, e.g. `H: 210, S: 50%, L: 40%`.
    pub fn label(self) -> String {
        format!(
            "H: {:.0}, S: {:.0}%, L: {:.0}%",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

/// HSV with hue in degrees `[0, 360)` and saturation/value in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: wrap_hue(h)?,
            s: percent("saturation", s)?,
            v: percent("value", v)?,
        })
    }

    pub(crate) fn from_unit(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_degrees(h * 360.0),
            s: (s * 100.0).clamp(0.0, 100.0),
            v: (v * 100.0).clamp(0.0, 100.0),
        }
    }

    pub const fn hue(self) -> f64 {
        self.h
    }

    pub const fn saturation(self) -> f64 {
        self.s
    }

    pub const fn value(self) -> f64 {
        self.v
    }

    pub fn unit(self) -> (f64, f64, f64) {
        (self.h / 360.0, self.s / 100.0, self.v / 100.0)
    }

    pub fn to_rgb(self) -> Rgb {
        convert::hsv_to_rgb(self)
    }

    pub fn to_hsl(self) -> Hsl {
        convert::hsv_to_hsl(self)
    }
}

fn wrap_hue(h: f64) -> Result<f64, ColorError> {
    if h.is_finite() {
        Ok(wrap_degrees(h))
    } else {
        Err(ColorError::InvalidInput {
            component: "hue",
            value: h,
        })
    }
}

fn wrap_degrees(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can land on 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn percent(component: &'static str, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::InvalidInput { component, value })
    }
}
