use image::imageops::{self, FilterType};

use crate::foundation::core::Rect;
use crate::foundation::error::{FlyerError, FlyerResult};
use crate::render::canvas::Canvas;

/// Scale uniformly to cover `target_w x target_h`, then center-crop to exactly that size.
pub fn resize_to_fill(
    img: &image::RgbaImage,
    target_w: u32,
    target_h: u32,
) -> FlyerResult<image::RgbaImage> {
    let (sw, sh) = img.dimensions();
    if sw == 0 || sh == 0 {
        return Err(FlyerError::validation("cannot resize an empty image"));
    }
    if target_w == 0 || target_h == 0 {
        return Err(FlyerError::validation(format!(
            "resize target must be positive, got {target_w}x{target_h}"
        )));
    }

    let scale = (f64::from(target_w) / f64::from(sw)).max(f64::from(target_h) / f64::from(sh));
    let nw = ((f64::from(sw) * scale).round() as u32).max(target_w);
    let nh = ((f64::from(sh) * scale).round() as u32).max(target_h);

    let resized = if (nw, nh) == (sw, sh) {
        img.clone()
    } else {
        imageops::resize(img, nw, nh, FilterType::Lanczos3)
    };
    let left = (nw - target_w) / 2;
    let top = (nh - target_h) / 2;
    Ok(imageops::crop_imm(&resized, left, top, target_w, target_h).to_image())
}

/// Aspect-preserving shrink into `max_w x max_h`. Never upscales.
pub fn resize_to_fit(img: &image::RgbaImage, max_w: u32, max_h: u32) -> image::RgbaImage {
    let (sw, sh) = img.dimensions();
    if sw == 0 || sh == 0 || max_w == 0 || max_h == 0 {
        return img.clone();
    }
    let scale = (f64::from(max_w) / f64::from(sw))
        .min(f64::from(max_h) / f64::from(sh))
        .min(1.0);
    if scale >= 1.0 {
        return img.clone();
    }
    let nw = ((f64::from(sw) * scale).round() as u32).clamp(1, max_w);
    let nh = ((f64::from(sh) * scale).round() as u32).clamp(1, max_h);
    imageops::resize(img, nw, nh, FilterType::Lanczos3)
}

/// Shrink `logo` into `bounds` and alpha-paste it centered there.
///
/// Returns the rectangle actually covered.
pub fn logo_thumbnail(canvas: &mut Canvas, logo: &image::RgbaImage, bounds: Rect) -> Rect {
    let max_w = bounds.width().max(0.0).floor() as u32;
    let max_h = bounds.height().max(0.0).floor() as u32;
    let thumb = resize_to_fit(logo, max_w, max_h);
    let (tw, th) = thumb.dimensions();
    let x = (bounds.x0 + (bounds.width() - f64::from(tw)) / 2.0).round();
    let y = (bounds.y0 + (bounds.height() - f64::from(th)) / 2.0).round();
    canvas.draw_image(&thumb, x as i64, y as i64);
    Rect::new(x, y, x + f64::from(tw), y + f64::from(th))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/image_fit.rs"]
mod tests;
