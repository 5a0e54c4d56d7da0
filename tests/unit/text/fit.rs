use super::*;

const TEXT: &str = "Modern solutions for your growing business, delivered with care";
const FONT: &str = "FlyerkitNoSuchFamily";

#[test]
fn decay_schedule() {
    assert_eq!(decay_step(85), 4);
    assert_eq!(decay_step(41), 4);
    assert_eq!(decay_step(40), 2);
    assert_eq!(decay_step(12), 2);
}

#[test]
fn roomy_box_keeps_initial_size() {
    let mut engine = TextEngine::new();
    let size = fit_font_size(&mut engine, "Hi", FONT, 2000.0, 2000.0, 85, true, 20);
    assert_eq!(size, 85);
}

#[test]
fn impossible_box_returns_min_size() {
    let mut engine = TextEngine::new();
    let size = fit_font_size(&mut engine, TEXT, FONT, 100.0, 1.0, 85, true, 20);
    assert_eq!(size, 20);
}

#[test]
fn initial_below_min_returns_min() {
    let mut engine = TextEngine::new();
    assert_eq!(
        fit_font_size(&mut engine, TEXT, FONT, 500.0, 500.0, 10, false, 18),
        18
    );
}

#[test]
fn result_is_monotonic_in_max_height() {
    let mut engine = TextEngine::new();
    let mut last = 0;
    for max_h in [40.0, 80.0, 120.0, 200.0, 320.0, 500.0, 900.0] {
        let size = fit_font_size(&mut engine, TEXT, FONT, 600.0, max_h, 85, false, 16);
        assert!(size >= 16);
        assert!(size <= 85);
        assert!(size >= last, "size {size} at {max_h} dropped below {last}");
        last = size;
    }
}

#[test]
fn fitted_size_fits_unless_minimum() {
    let mut engine = TextEngine::new();
    let max_h = 150.0;
    let size = fit_font_size(&mut engine, TEXT, FONT, 500.0, max_h, 85, false, 12);
    if size > 12 {
        let font = resolve_font(FONT, size, false);
        let plan = plan_block(
            &mut engine,
            TEXT,
            &font,
            &LayoutBox::new(0.0, 0.0, 500.0).with_line_height(DEFAULT_LINE_HEIGHT),
        );
        assert!(plan.height() <= max_h);
    }
}

#[test]
fn box_without_height_budget_keeps_initial_size() {
    let mut engine = TextEngine::new();
    let lbox = LayoutBox::new(0.0, 0.0, 10.0);
    assert_eq!(
        fit_font_size_with(&mut engine, TEXT, FONT, &lbox, 60, false, 12),
        60
    );
}

#[test]
fn huge_initial_size_lands_on_the_decay_schedule() {
    let mut engine = TextEngine::new();
    let size = fit_font_size(&mut engine, "Hi", FONT, 2000.0, 200.0, 2048, true, 24);
    // First step below 200 / 1.2 on the 4px schedule from 2048.
    assert_eq!(size, 164);
}
