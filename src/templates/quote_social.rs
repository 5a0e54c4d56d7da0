//! Square social post: dotted backdrop, shadowed photo frame, centered copy and a CTA button.

use crate::assets::color::Rgba;
use crate::effects::pattern::geometric_pattern;
use crate::effects::shadow::{ShadowShape, drop_shadow};
use crate::effects::shapes::corner_brackets;
use crate::foundation::core::{Rect, Vec2};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

const FRAME_BAR: f64 = 15.0;
const CORNER_LEN: f64 = 100.0;
const CORNER_WIDTH: f64 = 10.0;

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = (w * 0.08).floor();
    let primary = cfg.primary_color;
    let secondary = cfg.secondary_color;

    if p.accents() {
        geometric_pattern(p.canvas, secondary, cfg.pattern);
    }

    let frame = Rect::from_origin_size(
        ((w * 0.075).floor(), (h * 0.05).floor()),
        ((w * 0.85).floor(), (h * 0.5).floor()),
    );
    if let Some(img) = p.load(cfg.image_path.as_deref(), "image") {
        p.paste_fill(&img, frame, true)?;
        p.canvas.fill_rect(
            Rect::new(frame.x0, frame.y1, frame.x1, frame.y1 + FRAME_BAR),
            primary,
        );
    }
    p.logo(Rect::new(w - pad - w * 0.15, h * 0.05 + 10.0, w - pad, h * 0.05 + 70.0));

    let mut y = (h * 0.6).floor();
    if let Some(headline) = &cfg.headline {
        let size = (w * 0.08).floor().max(1.0) as u32;
        let lbox = LayoutBox::new(w / 2.0, y, w - 2.0 * pad)
            .with_align(Align::Center)
            .with_max_height((h - 200.0 - y - w * 0.06).max(f64::from(size)));
        y = p.fitted_block_sized(
            &upper(headline),
            &cfg.headline_style,
            size,
            true,
            secondary,
            &lbox,
        );
    }

    y += 20.0;
    if let Some(tagline) = &cfg.tagline {
        let size = (w * 0.04).floor().max(1.0) as u32;
        let font = p.font_sized(&cfg.body_style, size, true);
        let lbox = LayoutBox::new(w / 2.0, y, w - 2.0 * pad).with_align(Align::Center);
        p.text_block_auto(&upper(tagline), &font, primary, &lbox);
    }

    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let btn_w = (w * 0.6).floor();
        let btn = Rect::from_origin_size(((w - btn_w) / 2.0, h - 180.0), (btn_w, 80.0));
        if p.shadows() {
            drop_shadow(
                p.canvas,
                ShadowShape::Rect(btn),
                Vec2::new(8.0, 8.0),
                8,
                Rgba::new(0, 0, 0, 50),
            )?;
        }
        p.canvas.fill_rect(btn, cfg.cta_bg_color);
        let font = p.font_sized(&cfg.company_style, 26, true);
        p.line(
            &upper(cta),
            &font,
            cfg.cta_text_color,
            w / 2.0,
            btn.y0 + 25.0,
            Align::Center,
        );
    }

    if p.accents() {
        corner_brackets(p.canvas, CORNER_LEN, CORNER_WIDTH, primary, secondary);
    }
    Ok(())
}
