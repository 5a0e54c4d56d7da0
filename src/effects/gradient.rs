use crate::assets::color::Rgba;
use crate::effects::composite::over;
use crate::foundation::core::{PixelRect, Point, Rect};
use crate::foundation::math::lerp_u8;
use crate::render::canvas::Canvas;

/// Axis along which a linear gradient runs from `start` to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
}

fn lerp_rgba(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba::new(
        lerp_u8(a.r, b.r, t),
        lerp_u8(a.g, b.g, t),
        lerp_u8(a.b, b.b, t),
        lerp_u8(a.a, b.a, t),
    )
}

/// Fill `rect` with a two-stop linear gradient composited over the canvas.
pub fn linear_gradient(
    canvas: &mut Canvas,
    rect: Rect,
    start: Rgba,
    end: Rgba,
    direction: GradientDirection,
) {
    let w = canvas.width();
    let Some(r) = PixelRect::clamped(rect, w, canvas.height()) else {
        return;
    };
    let rect = rect.abs();
    let span_x = (rect.width() - 1.0).max(1.0);
    let span_y = (rect.height() - 1.0).max(1.0);

    let px = canvas.pixels_mut();
    for y in r.y0..r.y1 {
        let ty = ((f64::from(y) - rect.y0) / span_y).clamp(0.0, 1.0);
        let row_color = lerp_rgba(start, end, ty as f32);
        for x in r.x0..r.x1 {
            let color = match direction {
                GradientDirection::Vertical => row_color,
                GradientDirection::Horizontal => {
                    let tx = ((f64::from(x) - rect.x0) / span_x).clamp(0.0, 1.0);
                    lerp_rgba(start, end, tx as f32)
                }
                GradientDirection::Diagonal => {
                    let tx = ((f64::from(x) - rect.x0) / span_x).clamp(0.0, 1.0);
                    lerp_rgba(start, end, ((tx + ty) / 2.0) as f32)
                }
            };
            blend_at(px, w, x, y, color.to_premul());
        }
    }
}

/// Soft circular glow: alpha falls off quadratically from `color.a` at `center` to 0 at `radius`.
pub fn radial_glow(canvas: &mut Canvas, center: Point, radius: f64, color: Rgba) {
    if radius <= 0.0 || color.a == 0 {
        return;
    }
    let w = canvas.width();
    let bounds = Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    );
    let Some(r) = PixelRect::clamped(bounds, w, canvas.height()) else {
        return;
    };

    let px = canvas.pixels_mut();
    for y in r.y0..r.y1 {
        let dy = f64::from(y) + 0.5 - center.y;
        for x in r.x0..r.x1 {
            let dx = f64::from(x) + 0.5 - center.x;
            let d = (dx * dx + dy * dy).sqrt() / radius;
            if d >= 1.0 {
                continue;
            }
            let falloff = (1.0 - d) * (1.0 - d);
            let a = (f64::from(color.a) * falloff).round() as u8;
            if a == 0 {
                continue;
            }
            blend_at(px, w, x, y, Rgba { a, ..color }.to_premul());
        }
    }
}

fn blend_at(px: &mut [u8], stride_w: u32, x: u32, y: u32, src: [u8; 4]) {
    let i = (y as usize * stride_w as usize + x as usize) * 4;
    let out = over([px[i], px[i + 1], px[i + 2], px[i + 3]], src, 1.0);
    px[i..i + 4].copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gradient.rs"]
mod tests;
