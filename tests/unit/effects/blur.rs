use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = box_blur_rgba8_premul(&src, 1, 2, 0).unwrap();
    assert_eq!(out, src);
    let out = gaussian_blur_rgba8_premul(&src, 1, 2, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    let out = box_blur_rgba8_premul(&src, w, h, 3).unwrap();
    assert_eq!(out, src);
    let out = gaussian_blur_rgba8_premul(&src, w, h, 5.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = box_blur_rgba8_premul(&src, w, h, 1).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert_eq!(nonzero, 9);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 12);
}

#[test]
fn blur_rejects_mismatched_buffer() {
    assert!(box_blur_rgba8_premul(&[0u8; 7], 1, 2, 1).is_err());
    assert!(gaussian_blur_rgba8_premul(&[0u8; 8], 1, 2, f32::NAN).is_err());
}

#[test]
fn gaussian_box_radii_grow_with_sigma() {
    let small: u32 = box_radii_for_gaussian(2.0, 3).iter().sum();
    let large: u32 = box_radii_for_gaussian(20.0, 3).iter().sum();
    assert!(large > small);
    assert_eq!(box_radii_for_gaussian(0.0, 3), vec![0, 0, 0]);
}
