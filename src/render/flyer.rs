use crate::assets::decode::load_image;
use crate::config::resolved::{BackgroundKind, ResolvedConfig};
use crate::effects::gradient::linear_gradient;
use crate::effects::image_fit::resize_to_fill;
use crate::effects::shapes::overlay;
use crate::encode::png::encode_png;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::FlyerResult;
use crate::render::canvas::Canvas;
use crate::templates::{Painter, render_template};
use crate::text::engine::TextEngine;

/// Render one flyer to an RGB raster.
///
/// Pipeline:
/// 1. validate the canvas size (the only hard failure besides encoding)
/// 2. fill the background color, or the configured gradient
/// 3. paste the background asset resized to fill, if any, then the overlay
/// 4. dispatch to the selected template
///
/// Missing assets are logged and skipped; the output is always a complete canvas.
#[tracing::instrument(
    skip(cfg),
    fields(template = cfg.template.as_str(), w = cfg.width, h = cfg.height)
)]
pub fn render_flyer(cfg: &ResolvedConfig) -> FlyerResult<image::RgbImage> {
    let size = CanvasSize::new(cfg.width, cfg.height)?;
    let mut canvas = Canvas::new(size, cfg.bg_color)?;

    if cfg.bg_kind == BackgroundKind::Gradient {
        linear_gradient(
            &mut canvas,
            size.rect(),
            cfg.gradient_start.opaque(),
            cfg.gradient_end.opaque(),
            cfg.gradient_direction,
        );
    }

    let has_background = paint_background_asset(&mut canvas, cfg)?;
    if let Some(color) = cfg.overlay {
        overlay(&mut canvas, size.rect(), color);
    }

    let full_bleed = cfg.full_bleed_background && has_background;
    let mut text = TextEngine::new();
    {
        let mut painter = Painter::new(&mut canvas, &mut text, cfg, full_bleed);
        render_template(&mut painter)?;
    }
    canvas.into_rgb_image()
}

/// [`render_flyer`] followed by [`encode_png`].
pub fn render_flyer_png(cfg: &ResolvedConfig) -> FlyerResult<Vec<u8>> {
    encode_png(&render_flyer(cfg)?)
}

fn paint_background_asset(canvas: &mut Canvas, cfg: &ResolvedConfig) -> FlyerResult<bool> {
    let Some(path) = cfg.bg_image_path.as_deref() else {
        return Ok(false);
    };
    let img = match load_image(path) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!("background unavailable ({e:#}), using plain background");
            return Ok(false);
        }
    };
    let fitted = resize_to_fill(&img, canvas.width(), canvas.height())?;
    canvas.draw_image(&fitted, 0, 0);
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/render/flyer.rs"]
mod tests;
