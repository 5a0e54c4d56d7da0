use super::*;
use crate::foundation::core::CanvasSize;

fn white(w: u32, h: u32) -> Canvas {
    Canvas::new(CanvasSize::new(w, h).unwrap(), Rgb::WHITE).unwrap()
}

#[test]
fn accent_line_uses_opacity() {
    let mut canvas = white(100, 20);
    accent_line(
        &mut canvas,
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Rgb::BLACK,
        4.0,
        150,
    );
    let px = canvas.pixel(50, 10);
    assert!((100..110).contains(&px[0]), "px={px:?}");
}

#[test]
fn pill_corners_are_rounded() {
    let mut canvas = white(100, 40);
    rounded_pill(&mut canvas, Rect::new(0.0, 0.0, 100.0, 40.0), Rgb::BLACK);
    assert_eq!(canvas.pixel(50, 20), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(canvas.pixel(99, 39), [255, 255, 255, 255]);
}

#[test]
fn rounded_rect_radius_is_capped() {
    let mut a = white(60, 20);
    let mut b = white(60, 20);
    rounded_rect(&mut a, Rect::new(0.0, 0.0, 60.0, 20.0), 500.0, Rgb::BLACK);
    rounded_pill(&mut b, Rect::new(0.0, 0.0, 60.0, 20.0), Rgb::BLACK);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn overlay_darkens_uniformly() {
    let mut canvas = white(10, 10);
    overlay(&mut canvas, Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::new(0, 0, 0, 100));
    let a = canvas.pixel(0, 0);
    assert_eq!(a, canvas.pixel(9, 9));
    assert!((150..160).contains(&a[0]));
}

#[test]
fn corner_brackets_touch_opposite_corners() {
    let mut canvas = white(200, 200);
    corner_brackets(&mut canvas, 100.0, 10.0, Rgb::new(255, 0, 0), Rgb::BLACK);
    assert_eq!(canvas.pixel(50, 2), [255, 0, 0, 255]);
    assert_eq!(canvas.pixel(2, 50), [255, 0, 0, 255]);
    assert_eq!(canvas.pixel(150, 198), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(198, 150), [0, 0, 0, 255]);
    assert_eq!(canvas.pixel(100, 100), [255, 255, 255, 255]);
}
