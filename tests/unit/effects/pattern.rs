use super::*;
use crate::foundation::core::CanvasSize;

#[test]
fn dots_repeat_on_the_grid() {
    let mut canvas = Canvas::new(CanvasSize::new(200, 120).unwrap(), Rgb::WHITE).unwrap();
    geometric_pattern(&mut canvas, Rgb::BLACK, PatternKind::Dots);

    for (x, y) in [(2, 2), (42, 2), (82, 42), (162, 82)] {
        let px = canvas.pixel(x, y);
        assert!(px[0] < 255 && px[0] > 200, "dot at ({x},{y}) = {px:?}");
    }
    // Between dots the background is untouched.
    assert_eq!(canvas.pixel(20, 20), [255, 255, 255, 255]);
}

#[test]
fn lines_are_faint_diagonals() {
    let mut canvas = Canvas::new(CanvasSize::new(200, 200).unwrap(), Rgb::WHITE).unwrap();
    geometric_pattern(&mut canvas, Rgb::BLACK, PatternKind::Lines);

    // The i=60 diagonal passes through (30, 30).
    let on = canvas.pixel(30, 29);
    assert!(on[0] < 255, "on-line pixel {on:?}");
    assert!(on[0] > 200);
    assert_eq!(canvas.pixel(10, 10), [255, 255, 255, 255]);
}

#[test]
fn pattern_kind_parses_lowercase() {
    let kind: PatternKind = serde_json::from_str("\"lines\"").unwrap();
    assert_eq!(kind, PatternKind::Lines);
    assert_eq!(PatternKind::default(), PatternKind::Dots);
}
