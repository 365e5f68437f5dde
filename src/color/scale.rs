use super::model::{ColorModel, Hsl, Hsv};
use std::fmt;

/// Upper bound of the scaled display range.
pub const SCALE_MAX: u16 = 512;

/// A normalized component expressed as an integer in `[0, 512]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScaledChannel(u16);

impl ScaledChannel {
    pub const MAX: Self = Self(SCALE_MAX);

    /// `round(x * 512)`, clamped into range. NaN maps to zero.
    pub fn from_unit(x: f64) -> Self {
        if x.is_nan() {
            return Self(0);
        }
        let max = f64::from(SCALE_MAX);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            Self((x * max).round().clamp(0.0, max) as u16)
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Inverse of [`Self::from_unit`], exact up to the 1/512 step.
    pub fn to_unit(self) -> f64 {
        f64::from(self.0) / f64::from(SCALE_MAX)
    }
}

impl fmt::Display for ScaledChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three numbers shown for the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScaledColor {
    /// Hue as a fraction of the full circle.
    pub color: ScaledChannel,
    /// Saturation.
    pub intensity: ScaledChannel,
    /// Lightness (HSL) or value (HSV).
    pub brightness: ScaledChannel,
}

impl ScaledColor {
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (h, s, l) = hsl.unit();
        Self::from_units(h, s, l)
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        let (h, s, v) = hsv.unit();
        Self::from_units(h, s, v)
    }

    /// Derive the readout for `model` from the canonical HSL color.
    pub fn from_model(hsl: Hsl, model: ColorModel) -> Self {
        match model {
            ColorModel::Hsl => Self::from_hsl(hsl),
            ColorModel::Hsv => Self::from_hsv(hsl.to_hsv()),
        }
    }

    pub const fn values(self) -> [u16; 3] {
        [
            self.color.value(),
            self.intensity.value(),
            self.brightness.value(),
        ]
    }

    fn from_units(color: f64, intensity: f64, brightness: f64) -> Self {
        Self {
            color: ScaledChannel::from_unit(color),
            intensity: ScaledChannel::from_unit(intensity),
            brightness: ScaledChannel::from_unit(brightness),
        }
    }
}
