use hsl_harmony::{Channel, Color, ColorError, Rgb, hex_to_rgb, rgb_to_hsl};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn hsl(hex: &str) -> Color {
    rgb_to_hsl(hex_to_rgb(hex).unwrap())
}

#[test]
fn reference_colors() {
    init_tracing();

    assert_eq!(hsl("#FF0000"), Color::new(0.0, 100.0, 50.0));
    assert_eq!(hsl("#00FF00").hue, 120.0);
    assert_eq!(hsl("#0000FF").hue, 240.0);

    let white = hsl("#FFFFFF");
    assert_eq!((white.saturation, white.lightness), (0.0, 100.0));
    let black = hsl("#000000");
    assert_eq!((black.saturation, black.lightness), (0.0, 0.0));
    let gray = hsl("#808080");
    assert_eq!((gray.saturation, gray.lightness), (0.0, 50.0));
}

#[test]
fn reference_colors_round_trip_to_lowercase_hex() {
    init_tracing();

    for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000", "#808080"] {
        assert_eq!(hsl(hex).to_hex(), hex.to_ascii_lowercase());
    }
}

#[test]
fn full_intensity_hues_round_trip_exactly() {
    for hex in [
        "#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff", "#000000", "#ffffff",
    ] {
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(Color::from_rgb(rgb).to_rgb(), rgb, "{hex}");
    }
}

#[test]
fn hex_to_rgb_splits_channels() {
    assert_eq!(hex_to_rgb("#1A2B3C"), Ok(Rgb { r: 26, g: 43, b: 60 }));
}

#[test]
fn errors_surface_at_the_boundary() {
    init_tracing();

    assert!(matches!(
        hex_to_rgb("#GGGGGG"),
        Err(ColorError::InvalidHexFormat { .. })
    ));
    assert!(matches!(
        Color::from_hex("1A2B3C"),
        Err(ColorError::InvalidHexFormat { .. })
    ));
    assert_eq!(
        Rgb::try_from_channels(12, 34, 300),
        Err(ColorError::OutOfRangeChannel {
            channel: Channel::Blue,
            value: 300
        })
    );
}

proptest! {
    #[test]
    fn grays_are_unsaturated(x in any::<u8>()) {
        let c = rgb_to_hsl(Rgb::gray(x));
        prop_assert_eq!(c.saturation, 0.0);
        prop_assert_eq!(c.hue, 0.0);
    }

    #[test]
    fn grays_round_trip_within_one_step(x in any::<u8>()) {
        // lightness is kept as a whole percent, i.e. steps of 2.55
        let back = Color::from_rgb(Rgb::gray(x)).to_rgb();
        prop_assert_eq!(back.r, back.g);
        prop_assert_eq!(back.g, back.b);
        prop_assert!(back.r.abs_diff(x) <= 1, "{} -> {}", x, back.r);
    }

    #[test]
    fn hsl_stays_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = rgb_to_hsl(Rgb::new(r, g, b));
        // hues just below 360 can round up to 360
        prop_assert!((0.0..=360.0).contains(&c.hue), "hue {}", c.hue);
        prop_assert!((0.0..=100.0).contains(&c.saturation), "saturation {}", c.saturation);
        prop_assert!((0.0..=100.0).contains(&c.lightness), "lightness {}", c.lightness);
    }

    #[test]
    fn hex_parsing_is_case_insensitive(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        let lower = rgb.to_string();
        prop_assert_eq!(hex_to_rgb(&lower), Ok(rgb));
        prop_assert_eq!(hex_to_rgb(&lower.to_ascii_uppercase()), Ok(rgb));
    }

    #[test]
    fn valid_hex_strings_parse(s in "#[0-9a-fA-F]{6}") {
        prop_assert!(hex_to_rgb(&s).is_ok());
    }

    #[test]
    fn anything_else_is_rejected(s in "#?[0-9a-fA-F]{0,5}|#[0-9a-fA-F]{7,9}|[^#].{6}") {
        prop_assert_eq!(
            hex_to_rgb(&s),
            Err(ColorError::InvalidHexFormat { input: s.clone() })
        );
    }
}
