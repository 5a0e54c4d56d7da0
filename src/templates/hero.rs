//! Gradient backdrop with a hero photo, centered headline stack and a pill call-to-action.

use crate::effects::gradient::radial_glow;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, scaled, upper};
use crate::text::layout::{Align, LayoutBox};

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = f64::from(cfg.padding);
    let gap = f64::from(cfg.section_spacing);
    let lh = f64::from(cfg.line_height);
    let inner_w = w - 2.0 * pad;

    if p.accents() {
        radial_glow(
            p.canvas,
            Point::new(w * 0.9, h * 0.08),
            w * 0.45,
            cfg.accent_color.with_alpha(70),
        );
        radial_glow(
            p.canvas,
            Point::new(w * 0.05, h * 0.95),
            w * 0.5,
            cfg.primary_color.with_alpha(90),
        );
    }

    let mut y = pad;
    let header = Rect::new(pad, y, pad + w * 0.25, y + 90.0);
    let logo = p.logo(header);
    if let Some(name) = &cfg.company_name {
        let font = p.font(&cfg.company_style, true);
        let x = logo.map_or(pad, |r| r.x1 + 20.0);
        let ink = p.ink(Rect::new(x, y, w - pad, y + 90.0), cfg.company_style.color);
        p.line(&upper(name), &font, ink, x, y + 20.0, Align::Left);
    }
    y += 90.0 + gap / 2.0;

    let photo_h = (h * f64::from(cfg.image_ratio) * 0.7).floor();
    let photo = Rect::from_origin_size((pad, y), (inner_w, photo_h));
    if p.photo(photo, true)? {
        y = photo.y1 + gap;
    }

    if let Some(sub) = &cfg.sub_headline {
        let font = p.font_sized(&cfg.body_style, cfg.body_style.size, true);
        let lbox = LayoutBox::new(w / 2.0, y, inner_w).with_align(Align::Center);
        y = p.text_block_auto(&upper(sub), &font, cfg.accent_color, &lbox);
    }
    if let Some(headline) = &cfg.headline {
        let lbox = LayoutBox::new(w / 2.0, y, inner_w)
            .with_align(Align::Center)
            .with_line_height(1.1)
            .with_max_height(h * 0.2);
        y = p.fitted_block(
            headline,
            &cfg.headline_style,
            true,
            cfg.headline_style.color,
            &lbox,
        ) + gap / 2.0;
    }
    if let Some(tagline) = &cfg.tagline {
        let font = p.font(&cfg.body_style, false);
        let lbox = LayoutBox::new(w / 2.0, y, inner_w)
            .with_align(Align::Center)
            .with_line_height(lh);
        y = p.text_block_auto(tagline, &font, cfg.body_style.color, &lbox);
    }
    if let Some(body) = &cfg.body_text {
        let font = p.font_sized(&cfg.body_style, scaled(cfg.body_style.size, 4, 5), false);
        let lbox = LayoutBox::new(w / 2.0, y + gap / 2.0, inner_w * 0.85)
            .with_align(Align::Center)
            .with_line_height(lh);
        y = p.text_block_auto(body, &font, cfg.body_style.color, &lbox);
    }

    let features = cfg.visible_features();
    if !features.is_empty() {
        y += gap;
        let col_w = inner_w / features.len() as f64;
        let title_font = p.font_sized(&cfg.body_style, 22, true);
        let text_font = p.font_sized(&cfg.body_style, 18, false);
        for (i, item) in features.iter().enumerate() {
            let cx = pad + col_w * (i as f64 + 0.5);
            p.feature_badge(item, Point::new(cx, y + 30.0), 30.0, cfg.accent_color);
            let lbox = LayoutBox::new(cx, y + 75.0, col_w - 30.0).with_align(Align::Center);
            let next = p.text_block_auto(
                &upper(&item.title),
                &title_font,
                cfg.company_style.color,
                &lbox,
            );
            if !item.text.is_empty() {
                p.text_block_auto(
                    &item.text,
                    &text_font,
                    cfg.body_style.color,
                    &lbox.at_y(next + 4.0),
                );
            }
        }
    }

    let footer_bottom = h - pad;
    let contact_top = p.contact_block(w / 2.0, footer_bottom, inner_w, Align::Center);
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let btn_w = (w * 0.55).floor();
        let btn_h = 84.0;
        let btn = Rect::from_origin_size(
            ((w - btn_w) / 2.0, contact_top - gap / 2.0 - btn_h),
            (btn_w, btn_h),
        );
        let font = p.font_sized(&cfg.company_style, 30, true);
        p.button(btn, &upper(cta), cfg.cta_bg_color, cfg.cta_text_color, &font)?;
    }
    Ok(())
}
