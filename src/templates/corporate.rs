//! Clean white layout: framed photo, centered headline, three-column feature row.

use crate::effects::shapes::accent_line;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = (w * 0.08).floor();
    let primary = cfg.primary_color;
    let secondary = cfg.headline_style.color;

    let (img_w, img_h) = ((w * 0.8).floor(), (h * 0.45).floor());
    let photo = Rect::from_origin_size(((w - img_w) / 2.0, pad * 2.0), (img_w, img_h));
    p.photo(photo, false)?;

    p.logo(Rect::new(pad, pad * 0.5, pad + w * 0.2, pad * 1.5));

    let mut y = photo.y1 + 60.0;
    if let Some(headline) = &cfg.headline {
        let lbox = LayoutBox::new(w / 2.0, y, w - 2.0 * pad)
            .with_align(Align::Center)
            .with_max_height(h * 0.18);
        y = p.fitted_block(&upper(headline), &cfg.headline_style, true, secondary, &lbox);
    }

    y += 20.0;
    if p.accents() {
        accent_line(
            p.canvas,
            Point::new(w / 2.0 - 100.0, y),
            Point::new(w / 2.0 + 100.0, y),
            primary,
            4.0,
            255,
        );
    }
    y += 40.0;

    if let Some(tagline) = &cfg.tagline {
        let font = p.font_sized(&cfg.body_style, 28, false);
        let lbox = LayoutBox::new(w / 2.0, y, w - 2.0 * pad).with_align(Align::Center);
        y = p.text_block_auto(tagline, &font, secondary, &lbox);
    }

    y += 80.0;
    let col_w = (w - 2.0 * pad) / 3.0;
    let title_font = p.font_sized(&cfg.body_style, 20, true);
    for (i, item) in cfg.visible_features().iter().enumerate() {
        let cx = pad + i as f64 * col_w + col_w / 2.0;
        if p.decorate() {
            p.canvas
                .fill_rect(Rect::new(cx - 20.0, y, cx + 20.0, y + 4.0), primary);
        }
        let lbox = LayoutBox::new(cx, y + 20.0, col_w - 20.0).with_align(Align::Center);
        p.text_block_auto(&upper(&item.title), &title_font, secondary, &lbox);
    }

    let footer = p.font_sized(&cfg.company_style, 24, true);
    let footer_y = h - pad - 40.0;
    if let Some(name) = &cfg.company_name {
        let ink = p.ink(Rect::new(pad, footer_y, w / 2.0, footer_y + 30.0), secondary);
        p.line(&upper(name), &footer, ink, pad, footer_y, Align::Left);
    }
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        p.line(cta, &footer, primary, w - pad, footer_y, Align::Right);
    }

    if !cfg.contact.is_empty() {
        p.contact_block(w / 2.0, footer_y - 20.0, w - 2.0 * pad, Align::Center);
    }
    Ok(())
}
