//! Full-bleed photo behind a frosted glass card holding all the copy.

use crate::assets::color::{Rgb, Rgba};
use crate::effects::glass::glass_panel;
use crate::effects::shapes::{accent_line, overlay};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

const CARD_TINT: Rgba = Rgba::new(255, 255, 255, 40);
const CARD_BLUR: f32 = 20.0;
const VIGNETTE: Rgba = Rgba::new(0, 0, 0, 100);

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let full = Rect::new(0.0, 0.0, w, h);
    let primary = cfg.primary_color;

    // The photo doubles as the backdrop unless a background asset already covers the canvas.
    if !p.full_bleed && p.photo(full, false)? {
        overlay(p.canvas, full, VIGNETTE);
    }

    let pad = (w * 0.1).floor();
    let card_w = (w * 0.45).floor();
    let card_h = (h * 0.7).floor();
    let card = Rect::from_origin_size((pad, ((h - card_h) / 2.0).floor()), (card_w, card_h));
    glass_panel(p.canvas, card, CARD_TINT, CARD_BLUR)?;

    let ink = p.ink(card, Rgb::WHITE);
    let mut y = card.y0 + 80.0;
    if let Some(name) = &cfg.company_name {
        let font = p.font_sized(&cfg.company_style, 32, true);
        p.line(&upper(name), &font, ink, card.x0 + 60.0, y, Align::Left);
    }
    p.logo(Rect::new(card.x1 - 160.0, card.y0 + 30.0, card.x1 - 30.0, card.y0 + 90.0));
    y += 60.0;

    p.canvas.fill_rect(
        Rect::new(card.x0 + 60.0, y, card.x0 + 64.0, y + 300.0),
        primary,
    );

    let text_x = card.x0 + 85.0;
    if let Some(headline) = &cfg.headline {
        let top = y + 20.0;
        let features_top = card.y0 + card_h * 0.65;
        let lbox = LayoutBox::new(text_x, top, card_w - 120.0)
            .with_line_height(1.1)
            .with_max_height((features_top - top - 80.0).max(f64::from(cfg.headline_style.size)));
        y = p.fitted_block(&upper(headline), &cfg.headline_style, true, ink, &lbox);
    }
    if let Some(tagline) = &cfg.tagline {
        let font = p.font_sized(&cfg.body_style, 24, false);
        p.line(tagline, &font, primary, text_x, y + 40.0, Align::Left);
    }

    let mut fy = card.y0 + card_h * 0.65;
    let title_font = p.font_sized(&cfg.body_style, 18, true);
    for item in cfg.visible_features() {
        p.canvas.fill_ellipse(
            Rect::new(text_x, fy + 10.0, text_x + 10.0, fy + 20.0),
            primary,
        );
        p.line(&upper(&item.title), &title_font, ink, text_x + 30.0, fy, Align::Left);
        fy += 40.0;
    }

    let rule_y = card.y1 - 100.0;
    accent_line(
        p.canvas,
        Point::new(card.x0 + 60.0, rule_y),
        Point::new(card.x1 - 60.0, rule_y),
        ink,
        2.0,
        100,
    );
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let font = p.font_sized(&cfg.company_style, 22, true);
        p.line(cta, &font, ink, text_x, card.y1 - 70.0, Align::Left);
    }
    Ok(())
}
