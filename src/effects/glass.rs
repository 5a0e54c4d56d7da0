use crate::assets::color::Rgba;
use crate::effects::blur::gaussian_blur_rgba8_premul;
use crate::effects::composite::{copy_region, tint_in_place, write_region};
use crate::foundation::core::{PixelRect, Rect};
use crate::foundation::error::FlyerResult;
use crate::render::canvas::Canvas;

/// Border drawn around every glass panel.
pub const GLASS_BORDER: Rgba = Rgba::new(255, 255, 255, 180);

/// Frosted-glass panel: blur what is under `rect`, tint it, and outline it.
///
/// Pixels outside `rect` are left untouched.
pub fn glass_panel(
    canvas: &mut Canvas,
    rect: Rect,
    tint: Rgba,
    blur_radius: f32,
) -> FlyerResult<()> {
    let (w, h) = (canvas.width(), canvas.height());
    let Some(r) = PixelRect::clamped(rect, w, h) else {
        return Ok(());
    };

    let mut region = copy_region(canvas.pixels(), w, r.x0, r.y0, r.width(), r.height());
    region.data =
        gaussian_blur_rgba8_premul(&region.data, region.width, region.height, blur_radius)?;
    tint_in_place(&mut region.data, tint.to_premul());
    write_region(canvas.pixels_mut(), w, r.x0, r.y0, &region);

    let border = Rect::new(
        f64::from(r.x0) + 0.5,
        f64::from(r.y0) + 0.5,
        f64::from(r.x1) - 0.5,
        f64::from(r.y1) - 0.5,
    );
    canvas.stroke_rect(border, 1.0, GLASS_BORDER);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glass.rs"]
mod tests;
