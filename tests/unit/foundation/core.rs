use super::*;

#[test]
fn canvas_size_rejects_zero_and_oversized() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(10, 0).is_err());
    assert!(CanvasSize::new(MAX_CANVAS_DIM + 1, 10).is_err());
    let s = CanvasSize::new(1200, 1600).unwrap();
    assert_eq!(s.rect(), Rect::new(0.0, 0.0, 1200.0, 1600.0));
}

#[test]
fn pixel_rect_clamps_and_rounds_outward() {
    let r = PixelRect::clamped(Rect::new(-5.5, 2.2, 10.1, 200.0), 8, 100).unwrap();
    assert_eq!(
        r,
        PixelRect {
            x0: 0,
            y0: 2,
            x1: 8,
            y1: 100
        }
    );
    assert_eq!(r.width(), 8);
    assert_eq!(r.height(), 98);
}

#[test]
fn pixel_rect_outside_surface_is_none() {
    assert!(PixelRect::clamped(Rect::new(20.0, 20.0, 30.0, 30.0), 10, 10).is_none());
    assert!(PixelRect::clamped(Rect::new(2.0, 2.0, 2.0, 8.0), 10, 10).is_none());
}
