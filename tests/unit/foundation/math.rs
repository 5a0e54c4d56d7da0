use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn mul_div255_full_scale_is_identity() {
    for x in [0u16, 17, 128, 255] {
        assert_eq!(mul_div255_u16(x, 255), x);
    }
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(10, 200, 0.0), 10);
    assert_eq!(lerp_u8(10, 200, 1.0), 200);
    assert_eq!(lerp_u8(0, 100, 0.5), 50);
    assert_eq!(lerp_u8(0, 100, 7.0), 100);
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity_to_u8(-1.0), 0);
    assert_eq!(opacity_to_u8(1.0), 255);
    assert_eq!(opacity_to_u8(2.0), 255);
}
