pub const fn u32_to_f32(value: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    {
        value as f32
    }
}

/// Truncating conversion; negative and NaN inputs become 0, huge ones saturate.
pub const fn floor_f32_to_u32(value: f32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value as u32
    }
}

pub fn rounded_u8(value: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.round().clamp(0.0, f32::from(u8::MAX)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_to_u32_truncates_and_saturates() {
        assert_eq!(floor_f32_to_u32(2.99), 2);
        assert_eq!(floor_f32_to_u32(-1.0), 0);
        assert_eq!(floor_f32_to_u32(f32::NAN), 0);
        assert_eq!(floor_f32_to_u32(1e12), u32::MAX);
        assert_eq!(rounded_u8(300.0), 255);
        assert_eq!(rounded_u8(0.6), 1);
    }
}
