use super::*;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

fn channel_steps() -> impl Iterator<Item = u8> + Clone {
    (0..=255_u8).step_by(3)
}

#[test]
fn hsl_round_trip_reproduces_rgb_within_one_step() {
    for r in channel_steps() {
        for g in channel_steps() {
            for b in channel_steps() {
                let rgb = Rgb::new(r, g, b);
                let back = rgb.to_hsl().to_rgb();
                for (orig, got) in [(r, back.r), (g, back.g), (b, back.b)] {
                    assert!(
                        orig.abs_diff(got) <= 1,
                        "{rgb:?} came back as {back:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn hsv_round_trip_reproduces_rgb_within_one_step() {
    for r in (0..=255_u8).step_by(5) {
        for g in (0..=255_u8).step_by(5) {
            for b in (0..=255_u8).step_by(5) {
                let rgb = Rgb::new(r, g, b);
                let back = rgb.to_hsv().to_rgb();
                assert!(r.abs_diff(back.r) <= 1, "{rgb:?} -> {back:?}");
                assert!(g.abs_diff(back.g) <= 1, "{rgb:?} -> {back:?}");
                assert!(b.abs_diff(back.b) <= 1, "{rgb:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn achromatic_input_has_no_hue_or_saturation() {
    for v in 0..=255_u8 {
        let hsl = Rgb::new(v, v, v).to_hsl();
        assert_close(hsl.hue(), 0.0, "hue");
        assert_close(hsl.saturation(), 0.0, "saturation");
        assert_close(hsl.lightness(), f64::from(v) / 255.0 * 100.0, "lightness");
    }
}

#[test]
fn pure_red_maps_to_expected_hsl_and_scaled_values() {
    let hsl = Rgb::new(255, 0, 0).to_hsl();
    assert_close(hsl.hue(), 0.0, "hue");
    assert_close(hsl.saturation(), 100.0, "saturation");
    assert_close(hsl.lightness(), 50.0, "lightness");
    assert_eq!(ScaledColor::from_hsl(hsl).values(), [0, 512, 256]);
}

#[test]
fn black_maps_to_zero_everywhere() {
    let hsl = Rgb::new(0, 0, 0).to_hsl();
    assert_close(hsl.hue(), 0.0, "hue");
    assert_close(hsl.saturation(), 0.0, "saturation");
    assert_close(hsl.lightness(), 0.0, "lightness");
    assert_eq!(ScaledColor::from_hsl(hsl).values(), [0, 0, 0]);
}

#[test]
fn white_maps_to_full_brightness() {
    let hsl = Rgb::new(255, 255, 255).to_hsl();
    assert_close(hsl.hue(), 0.0, "hue");
    assert_close(hsl.saturation(), 0.0, "saturation");
    assert_close(hsl.lightness(), 100.0, "lightness");
    assert_eq!(ScaledColor::from_hsl(hsl).values(), [0, 0, 512]);
}

#[test]
fn hsv_model_reads_value_instead_of_lightness() {
    let red = Rgb::new(255, 0, 0).to_hsl();
    assert_eq!(
        ScaledColor::from_model(red, ColorModel::Hsv).values(),
        [0, 512, 512]
    );
    assert_eq!(
        ScaledColor::from_model(red, ColorModel::Hsl).values(),
        [0, 512, 256]
    );
}

#[test]
fn hsv_hue_sectors_for_primaries_and_secondaries() {
    let cases = [
        (Rgb::new(255, 0, 0), 0.0),
        (Rgb::new(255, 255, 0), 60.0),
        (Rgb::new(0, 255, 0), 120.0),
        (Rgb::new(0, 255, 255), 180.0),
        (Rgb::new(0, 0, 255), 240.0),
        (Rgb::new(255, 0, 255), 300.0),
    ];
    for (rgb, hue) in cases {
        let hsv = rgb.to_hsv();
        assert_close(hsv.hue(), hue, "hue");
        assert_close(hsv.saturation(), 100.0, "saturation");
        assert_close(hsv.value(), 100.0, "value");
    }
}

#[test]
fn hsl_to_hsv_agrees_with_direct_conversion() {
    let samples = [
        Rgb::new(12, 200, 99),
        Rgb::new(255, 0, 1),
        Rgb::new(80, 80, 81),
        Rgb::new(3, 7, 250),
        Rgb::new(128, 128, 128),
        Rgb::new(250, 240, 10),
    ];
    for rgb in samples {
        let direct = rgb.to_hsv();
        let derived = rgb.to_hsl().to_hsv();
        assert!((direct.hue() - derived.hue()).abs() < 1e-6, "{rgb:?}");
        assert!(
            (direct.saturation() - derived.saturation()).abs() < 1e-6,
            "{rgb:?}"
        );
        assert!((direct.value() - derived.value()).abs() < 1e-6, "{rgb:?}");

        let hsl = rgb.to_hsl();
        let back = derived.to_hsl();
        assert!((hsl.saturation() - back.saturation()).abs() < 1e-6, "{rgb:?}");
        assert!((hsl.lightness() - back.lightness()).abs() < 1e-6, "{rgb:?}");
    }
}

#[test]
fn scaling_round_trip_stays_within_one_step() {
    for i in 0..=1000 {
        let x = f64::from(i) / 1000.0;
        let back = ScaledChannel::from_unit(x).to_unit();
        assert!(
            (back - x).abs() <= 1.0 / f64::from(SCALE_MAX),
            "{x} -> {back}"
        );
    }
}

#[test]
fn scaling_clamps_to_the_display_range() {
    assert_eq!(ScaledChannel::from_unit(1.5), ScaledChannel::MAX);
    assert_eq!(ScaledChannel::from_unit(1.5).value(), 512);
    assert_eq!(ScaledChannel::from_unit(-0.25).value(), 0);
    assert_eq!(ScaledChannel::from_unit(f64::NAN).value(), 0);
    assert_eq!(ScaledChannel::from_unit(0.5).to_string(), "256");
}

#[test]
fn constructors_reject_out_of_range_percentages() {
    assert_eq!(
        Hsl::new(0.0, 120.0, 50.0),
        Err(ColorError::InvalidInput {
            component: "saturation",
            value: 120.0
        })
    );
    assert!(matches!(
        Hsl::new(0.0, 50.0, -1.0),
        Err(ColorError::InvalidInput {
            component: "lightness",
            ..
        })
    ));
    assert!(matches!(
        Hsv::new(f64::NAN, 50.0, 50.0),
        Err(ColorError::InvalidInput {
            component: "hue",
            ..
        })
    ));
    assert!(Hsv::new(10.0, 50.0, 100.5).is_err());
}

#[test]
fn hue_wraps_around_the_circle() {
    let hsl = Hsl::new(-30.0, 50.0, 50.0).expect("valid hsl");
    assert_close(hsl.hue(), 330.0, "negative hue");
    let hsl = Hsl::new(720.0, 50.0, 50.0).expect("valid hsl");
    assert_close(hsl.hue(), 0.0, "full turns");
    assert_eq!(
        Hsl::new(360.0, 100.0, 50.0).expect("valid hsl").to_rgb(),
        Rgb::new(255, 0, 0)
    );
}

#[test]
fn hsl_to_rgb_handles_each_hue_segment() {
    let cases = [
        (0.0, Rgb::new(255, 0, 0)),
        (60.0, Rgb::new(255, 255, 0)),
        (120.0, Rgb::new(0, 255, 0)),
        (180.0, Rgb::new(0, 255, 255)),
        (240.0, Rgb::new(0, 0, 255)),
        (300.0, Rgb::new(255, 0, 255)),
    ];
    for (hue, expected) in cases {
        let hsl = Hsl::new(hue, 100.0, 50.0).expect("valid hsl");
        assert_eq!(hsl.to_rgb(), expected, "hue {hue}");
    }
    let gray = Hsl::new(200.0, 0.0, 50.0).expect("valid hsl");
    assert_eq!(gray.to_rgb(), Rgb::new(128, 128, 128));
}

#[test]
fn labels_and_hex_strings() {
    assert_eq!(Rgb::new(255, 0, 0).to_hsl().label(), "H: 0, S: 100%, L: 50%");
    assert_eq!(Rgb::new(255, 136, 0).to_hex(), "#FF8800");
    assert_eq!(Rgb::from_rgba([1, 2, 3, 4]), Rgb::new(1, 2, 3));
}
