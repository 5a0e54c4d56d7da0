use super::*;
use crate::assets::color::Rgb;
use crate::foundation::core::CanvasSize;

#[test]
fn vertical_gradient_hits_both_stops() {
    let mut canvas = Canvas::new(CanvasSize::new(10, 101).unwrap(), Rgb::WHITE).unwrap();
    linear_gradient(
        &mut canvas,
        Rect::new(0.0, 0.0, 10.0, 101.0),
        Rgb::new(0, 0, 0).opaque(),
        Rgb::new(200, 100, 0).opaque(),
        GradientDirection::Vertical,
    );
    assert_eq!(canvas.pixel(5, 0), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(5, 100), [200, 100, 0, 255]);
    assert_eq!(canvas.pixel(3, 50), [100, 50, 0, 255]);
    assert_eq!(canvas.pixel(0, 50), canvas.pixel(9, 50));
}

#[test]
fn horizontal_gradient_varies_along_x() {
    let mut canvas = Canvas::new(CanvasSize::new(51, 4).unwrap(), Rgb::WHITE).unwrap();
    let full = canvas.size().rect();
    linear_gradient(
        &mut canvas,
        full,
        Rgb::BLACK.opaque(),
        Rgb::WHITE.opaque(),
        GradientDirection::Horizontal,
    );
    assert_eq!(canvas.pixel(0, 2)[0], 0);
    assert_eq!(canvas.pixel(50, 2)[0], 255);
    assert_eq!(canvas.pixel(25, 0), canvas.pixel(25, 3));
}

#[test]
fn diagonal_gradient_is_symmetric_across_the_antidiagonal() {
    let mut canvas = Canvas::new(CanvasSize::new(41, 41).unwrap(), Rgb::WHITE).unwrap();
    let full = canvas.size().rect();
    linear_gradient(
        &mut canvas,
        full,
        Rgb::BLACK.opaque(),
        Rgb::WHITE.opaque(),
        GradientDirection::Diagonal,
    );
    assert_eq!(canvas.pixel(0, 0)[0], 0);
    assert_eq!(canvas.pixel(40, 40)[0], 255);
    assert_eq!(canvas.pixel(10, 30), canvas.pixel(30, 10));
}

#[test]
fn translucent_stops_blend_with_existing_pixels() {
    let mut canvas = Canvas::new(CanvasSize::new(4, 4).unwrap(), Rgb::WHITE).unwrap();
    let full = canvas.size().rect();
    linear_gradient(
        &mut canvas,
        full,
        Rgba::new(0, 0, 0, 0),
        Rgba::new(0, 0, 0, 0),
        GradientDirection::Vertical,
    );
    assert_eq!(canvas.pixel(1, 1), [255, 255, 255, 255]);
}

#[test]
fn radial_glow_fades_to_nothing_at_the_radius() {
    let mut canvas = Canvas::new(CanvasSize::new(100, 100).unwrap(), Rgb::BLACK).unwrap();
    radial_glow(
        &mut canvas,
        Point::new(50.0, 50.0),
        30.0,
        Rgba::new(255, 255, 255, 200),
    );
    let center = canvas.pixel(50, 50)[0];
    let mid = canvas.pixel(65, 50)[0];
    assert!(center > 180, "center={center}");
    assert!(mid > 0 && mid < center, "mid={mid}");
    assert_eq!(canvas.pixel(85, 50), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(2, 2), [0, 0, 0, 255]);
}
