use super::*;
use crate::assets::color::Rgb;
use crate::foundation::core::CanvasSize;

fn solid(w: u32, h: u32, px: [u8; 4]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba(px))
}

#[test]
fn fill_produces_exact_target_dims() {
    for (sw, sh, tw, th) in [
        (400, 300, 200, 200),
        (300, 400, 200, 100),
        (50, 20, 640, 480),
        (1000, 1000, 999, 1),
        (7, 3, 3, 7),
    ] {
        let out = resize_to_fill(&solid(sw, sh, [10, 20, 30, 255]), tw, th).unwrap();
        assert_eq!(out.dimensions(), (tw, th), "from {sw}x{sh}");
    }
}

#[test]
fn fill_crops_the_longer_axis_around_the_center() {
    // Left half red, right half blue; a square crop of a 2:1 image keeps the middle.
    let mut img = image::RgbaImage::new(200, 100);
    for (x, _, p) in img.enumerate_pixels_mut() {
        *p = if x < 100 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        };
    }
    let out = resize_to_fill(&img, 100, 100).unwrap();
    assert_eq!(out.dimensions(), (100, 100));
    assert!(out.get_pixel(5, 50)[0] > 200);
    assert!(out.get_pixel(94, 50)[2] > 200);
}

#[test]
fn fill_rejects_empty_input_and_target() {
    assert!(resize_to_fill(&image::RgbaImage::new(0, 0), 10, 10).is_err());
    assert!(resize_to_fill(&solid(4, 4, [0, 0, 0, 255]), 0, 10).is_err());
}

#[test]
fn fit_preserves_aspect_and_never_upscales() {
    let out = resize_to_fit(&solid(400, 200, [0, 0, 0, 255]), 100, 100);
    assert_eq!(out.dimensions(), (100, 50));

    let small = resize_to_fit(&solid(40, 20, [0, 0, 0, 255]), 100, 100);
    assert_eq!(small.dimensions(), (40, 20));
}

#[test]
fn logo_is_centered_in_its_box() {
    let mut canvas = Canvas::new(CanvasSize::new(200, 200).unwrap(), Rgb::WHITE).unwrap();
    let logo = solid(80, 40, [0, 0, 0, 255]);
    let covered = logo_thumbnail(&mut canvas, &logo, Rect::new(50.0, 50.0, 150.0, 150.0));

    assert_eq!(covered, Rect::new(60.0, 80.0, 140.0, 120.0));
    assert_eq!(canvas.pixel(100, 100), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(100, 70), [255, 255, 255, 255]);
}

#[test]
fn transparent_logo_pixels_keep_the_background() {
    let mut canvas = Canvas::new(CanvasSize::new(20, 20).unwrap(), Rgb::new(0, 128, 0)).unwrap();
    let logo = solid(10, 10, [255, 0, 0, 0]);
    logo_thumbnail(&mut canvas, &logo, Rect::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(canvas.pixel(10, 10), [0, 128, 0, 255]);
}
