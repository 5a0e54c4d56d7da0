//! High-contrast layout: oversized left-aligned headline, square photo, short accent bar.

use crate::assets::color::Rgb;
use crate::foundation::core::Rect;
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = (w * 0.1).floor();
    let primary = cfg.primary_color;

    let mut y = pad * 1.5;
    if let Some(headline) = &cfg.headline {
        let lbox = LayoutBox::new(pad, y, w - 2.0 * pad)
            .with_line_height(1.0)
            .with_max_height(h * 0.3);
        y = p.fitted_block(
            &upper(headline),
            &cfg.headline_style,
            true,
            cfg.headline_style.color,
            &lbox,
        );
    }

    let side = (w * 0.6).floor();
    p.photo(
        Rect::from_origin_size((w - side - pad, y + 40.0), (side, side)),
        false,
    )?;

    y += 100.0;
    if let Some(tagline) = &cfg.tagline {
        let font = p.font_sized(&cfg.body_style, 40, true);
        let lbox = LayoutBox::new(pad, y, w * 0.4);
        y = p.text_block_auto(&upper(tagline), &font, primary, &lbox);
    }

    y += 40.0;
    if let Some(body) = &cfg.body_text {
        let font = p.font_sized(&cfg.body_style, 22, false);
        let lbox = LayoutBox::new(pad, y, w * 0.35);
        p.text_block_auto(body, &font, cfg.body_style.color, &lbox);
    }

    let bottom = h - pad;
    if p.accents() {
        p.canvas
            .fill_rect(Rect::new(pad, bottom - 60.0, pad + 100.0, bottom - 55.0), primary);
    }
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let font = p.font_sized(&cfg.company_style, 28, true);
        let ink = p.ink(Rect::new(pad, bottom - 40.0, w / 2.0, bottom), Rgb::WHITE);
        p.line(cta, &font, ink, pad, bottom - 40.0, Align::Left);
    }

    let logo_w = w * 0.18;
    p.logo(Rect::new(w - pad - logo_w, bottom - 80.0, w - pad, bottom));
    Ok(())
}
