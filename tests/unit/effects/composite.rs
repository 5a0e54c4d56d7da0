use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(
        over([10, 20, 30, 255], [200, 100, 50, 255], 1.0),
        [200, 100, 50, 255]
    );
}

#[test]
fn over_transparent_or_zero_opacity_is_identity() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0], 1.0), dst);
    assert_eq!(over(dst, [255, 255, 255, 255], 0.0), dst);
}

#[test]
fn over_half_white_on_black_is_mid_grey() {
    let out = over([0, 0, 0, 255], [128, 128, 128, 128], 1.0);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn blend_over_skips_transparent_source_pixels() {
    let mut dst = [10u8, 20, 30, 255, 10, 20, 30, 255];
    let src = [0u8, 0, 0, 0, 200, 100, 50, 255];
    blend_over(&mut dst, &src, 1.0);
    assert_eq!(dst, [10, 20, 30, 255, 200, 100, 50, 255]);
}

#[test]
fn composite_layer_clips_to_destination() {
    let (w, h) = (4u32, 4u32);
    let mut dst = [0u8, 0, 0, 255].repeat((w * h) as usize);
    let src = Layer {
        width: 2,
        height: 2,
        data: [255u8, 0, 0, 255].repeat(4),
    };
    composite_layer_at(&mut dst, w, h, &src, 3, -1, 1.0);

    let px = |x: usize, y: usize| -> [u8; 4] {
        let i = (y * w as usize + x) * 4;
        [dst[i], dst[i + 1], dst[i + 2], dst[i + 3]]
    };
    assert_eq!(px(3, 0), [255, 0, 0, 255]);
    assert_eq!(px(2, 0), [0, 0, 0, 255]);
    assert_eq!(px(3, 1), [0, 0, 0, 255]);
}

#[test]
fn copy_then_write_region_roundtrips() {
    let w = 3u32;
    let src: Vec<u8> = (0..(w * 3 * 4) as u8).collect();
    let region = copy_region(&src, w, 1, 1, 2, 2);
    assert_eq!(region.width, 2);
    assert_eq!(&region.data[..4], &src[16..20]);

    let mut dst = vec![0u8; src.len()];
    write_region(&mut dst, w, 1, 1, &region);
    assert_eq!(&dst[16..24], &src[16..24]);
    assert_eq!(&dst[0..4], &[0, 0, 0, 0]);
}

#[test]
fn layer_from_image_premultiplies() {
    let img = image::RgbaImage::from_raw(1, 1, vec![255, 128, 0, 128]).unwrap();
    assert_eq!(Layer::from_rgba_image(&img).data, vec![128, 64, 0, 128]);
}
