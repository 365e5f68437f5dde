//! Conversions between RGB, HSL and HSV.
//! Internally everything runs on normalized f64 in 0.0–1.0.

use super::model::{Hsl, Hsv, Rgb, channel_unit};

const ONE_THIRD: f64 = 1.0 / 3.0;

/// RGB → HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.unit();
    let hi = rgb.max_channel();
    let lo = rgb.min_channel();
    let max = channel_unit(hi);
    let min = channel_unit(lo);
    let l = (max + min) / 2.0;

    if hi == lo {
        return Hsl::from_unit(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if rgb.r == hi {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if rgb.g == hi {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::from_unit(h / 6.0, s, l)
}

/// HSL → RGB, rounding each channel to the nearest 8-bit value.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let (h, s, l) = hsl.unit();
    if s <= 0.0 {
        let v = unit_to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = 2.0f64.mul_add(l, -q);
    Rgb::new(
        unit_to_u8(hue_to_channel(p, q, h + ONE_THIRD)),
        unit_to_u8(hue_to_channel(p, q, h)),
        unit_to_u8(hue_to_channel(p, q, h - ONE_THIRD)),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// RGB → HSV.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.unit();
    let hi = rgb.max_channel();
    let lo = rgb.min_channel();
    let max = channel_unit(hi);
    let delta = max - channel_unit(lo);

    if hi == lo {
        return Hsv::from_unit(0.0, 0.0, max);
    }

    let sector = if rgb.r == hi {
        ((g - b) / delta) % 6.0
    } else if rgb.g == hi {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let mut degrees = sector * 60.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }

    Hsv::from_unit(degrees / 360.0, delta / max, max)
}

/// HSV → RGB via the six-sector decomposition.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (h, s, v) = hsv.unit();
    if s <= 0.0 {
        let c = unit_to_u8(v);
        return Rgb::new(c, c, c);
    }
    let h6 = (h * 6.0) % 6.0;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = h6.floor() as u32;
    let (r, g, b) = match sector % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}

/// HSL → HSV without going through RGB, so no 8-bit rounding is involved.
pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    let (h, s, l) = hsl.unit();
    let v = s.mul_add(l.min(1.0 - l), l);
    let s_hsv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsv::from_unit(h, s_hsv, v)
}

/// HSV → HSL.
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let (h, s, v) = hsv.unit();
    let l = v * (1.0 - s / 2.0);
    let s_hsl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    Hsl::from_unit(h, s_hsl, l)
}

fn unit_to_u8(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    }
}
