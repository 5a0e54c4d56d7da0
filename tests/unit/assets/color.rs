use super::*;
use serde_json::json;

#[test]
fn parses_six_and_three_digit_forms_with_or_without_hash() {
    for s in ["#D35400", "D35400", "  #d35400 "] {
        assert_eq!(parse_hex_color(s).unwrap(), Rgb::new(0xD3, 0x54, 0x00));
    }
    for s in ["#fa0", "fa0", "FFAA00", "#ffaa00"] {
        assert_eq!(parse_hex_color(s).unwrap(), Rgb::new(255, 170, 0));
    }
}

#[test]
fn hex_digit_space_roundtrips() {
    for v in [0u8, 1, 0x0f, 0x10, 0x7f, 0x80, 0xfe, 0xff] {
        let c = Rgb::new(v, v.wrapping_add(17), v.wrapping_mul(3));
        assert_eq!(parse_hex_color(&c.to_hex()).unwrap(), c);
        assert_eq!(
            parse_hex_color(c.to_hex().trim_start_matches('#')).unwrap(),
            c
        );
    }
}

#[test]
fn malformed_input_is_invalid_color_format() {
    for s in ["", "#", "#12", "#1234", "#12345", "#1234567", "#GGGGGG", "#12345z", "red"] {
        let err = parse_hex_color(s).unwrap_err();
        assert!(
            matches!(err, FlyerError::InvalidColorFormat(_)),
            "{s:?} -> {err}"
        );
    }
}

#[test]
fn brightness_uses_weighted_luminance() {
    assert_eq!(brightness(Rgb::BLACK), 0.0);
    assert!((brightness(Rgb::WHITE) - 255.0).abs() < 1e-3);
    assert!((brightness(Rgb::new(255, 0, 0)) - 76.245).abs() < 1e-3);
    assert!((brightness(Rgb::new(0, 255, 0)) - 149.685).abs() < 1e-3);
}

#[test]
fn contrast_color_boundaries() {
    assert_eq!(contrast_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(contrast_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(contrast_color(Rgb::new(120, 120, 120)), Rgb::WHITE);
    assert_eq!(contrast_color(Rgb::new(136, 136, 136)), Rgb::BLACK);
    assert_eq!(contrast_color(Rgb::new(0x00, 0x76, 0xBC)), Rgb::WHITE);
}

#[test]
fn premultiplies_straight_alpha() {
    assert_eq!(Rgba::new(255, 128, 0, 128).to_premul(), [128, 64, 0, 128]);
    assert_eq!(Rgba::new(10, 20, 30, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgb::new(1, 2, 3).opaque().to_premul(), [1, 2, 3, 255]);
}

#[test]
fn deserializes_from_hex_string_or_array() {
    let c: Rgb = serde_json::from_value(json!("#0076BC")).unwrap();
    assert_eq!(c, Rgb::new(0x00, 0x76, 0xBC));
    let c: Rgb = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb::new(1, 2, 3));
    assert!(serde_json::from_value::<Rgb>(json!("#nope")).is_err());
    assert!(serde_json::from_value::<Rgb>(json!([1, 2])).is_err());
}
