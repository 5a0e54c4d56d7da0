use crate::assets::color::{Rgb, Rgba};
use crate::foundation::core::{Point, Rect};
use crate::render::canvas::Canvas;

/// Thin straight rule in `color` at `opacity`.
pub fn accent_line(
    canvas: &mut Canvas,
    start: Point,
    end: Point,
    color: Rgb,
    width: f64,
    opacity: u8,
) {
    canvas.stroke_line(start, end, width, color.with_alpha(opacity));
}

pub fn rounded_rect(canvas: &mut Canvas, rect: Rect, radius: f64, fill: impl Into<Rgba>) {
    let max_radius = rect.width().abs().min(rect.height().abs()) / 2.0;
    canvas.fill_rounded_rect(rect, radius.min(max_radius), fill);
}

/// Rectangle with fully rounded short ends.
pub fn rounded_pill(canvas: &mut Canvas, rect: Rect, fill: impl Into<Rgba>) {
    let radius = rect.width().abs().min(rect.height().abs()) / 2.0;
    canvas.fill_rounded_rect(rect, radius, fill);
}

/// Translucent wash over `rect`, used for vignettes and darkening behind text.
pub fn overlay(canvas: &mut Canvas, rect: Rect, color: Rgba) {
    canvas.fill_rect(rect, color);
}

/// L-shaped corner brackets of `len` pixels at the top-left and bottom-right corners.
pub fn corner_brackets(
    canvas: &mut Canvas,
    len: f64,
    width: f64,
    top_left: impl Into<Rgba>,
    bottom_right: impl Into<Rgba>,
) {
    let (w, h) = (canvas.size().w(), canvas.size().h());
    let top_left = top_left.into();
    let bottom_right = bottom_right.into();
    canvas.fill_rect(Rect::new(0.0, 0.0, len, width / 2.0), top_left);
    canvas.fill_rect(Rect::new(0.0, 0.0, width / 2.0, len), top_left);
    canvas.fill_rect(Rect::new(w - len, h - width / 2.0, w, h), bottom_right);
    canvas.fill_rect(Rect::new(w - width / 2.0, h - len, w, h), bottom_right);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shapes.rs"]
mod tests;
