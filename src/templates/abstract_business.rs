//! Portrait flyer with abstract corner shapes, a left-aligned headline stack and feature cards.

use crate::assets::color::{Rgb, Rgba};
use crate::effects::gradient::radial_glow;
use crate::effects::shadow::{ShadowShape, drop_shadow};
use crate::effects::shapes::{accent_line, rounded_rect};
use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

const CARD_RADIUS: f64 = 24.0;

fn shapes(p: &mut Painter<'_>) {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    p.canvas.fill_polygon(
        &[
            Point::new(w * 0.55, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h * 0.32),
        ],
        cfg.primary_color,
    );
    p.canvas.fill_polygon(
        &[
            Point::new(w * 0.78, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h * 0.14),
        ],
        cfg.accent_color.with_alpha(220),
    );
    p.canvas.fill_polygon(
        &[
            Point::new(0.0, h * 0.82),
            Point::new(w * 0.35, h),
            Point::new(0.0, h),
        ],
        cfg.primary_color.with_alpha(40),
    );
    radial_glow(
        p.canvas,
        Point::new(w * 0.1, h * 0.45),
        w * 0.35,
        cfg.accent_color.with_alpha(35),
    );
}

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = f64::from(cfg.padding);
    let gap = f64::from(cfg.section_spacing);
    let lh = f64::from(cfg.line_height);
    let inner_w = w - 2.0 * pad;

    if p.accents() {
        shapes(p);
    }

    let mut y = pad;
    if let Some(logo) = p.logo(Rect::new(pad, y, pad + w * 0.28, y + 110.0)) {
        y = logo.y1;
    } else if let Some(name) = &cfg.company_name {
        let font = p.font(&cfg.company_style, true);
        let lbox = LayoutBox::new(pad, y, inner_w * 0.55);
        y = p.text_block_auto(&upper(name), &font, cfg.company_style.color, &lbox);
    }
    y += gap;

    if let Some(sub) = &cfg.sub_headline {
        let font = p.font_sized(&cfg.body_style, 26, true);
        let lbox = LayoutBox::new(pad, y, inner_w * 0.7);
        y = p.text_block_auto(&upper(sub), &font, cfg.primary_color, &lbox) + 10.0;
    }
    if let Some(headline) = &cfg.headline {
        let lbox = LayoutBox::new(pad, y, inner_w * 0.8)
            .with_line_height(1.1)
            .with_max_height(h * 0.22);
        y = p.fitted_block(
            headline,
            &cfg.headline_style,
            true,
            cfg.headline_style.color,
            &lbox,
        );
    }
    if p.decorate() {
        accent_line(
            p.canvas,
            Point::new(pad, y + 12.0),
            Point::new(pad + 140.0, y + 12.0),
            cfg.accent_color,
            6.0,
            255,
        );
    }
    y += 40.0;
    if let Some(tagline) = &cfg.tagline {
        let font = p.font(&cfg.body_style, true);
        let lbox = LayoutBox::new(pad, y, inner_w);
        y = p.text_block_auto(tagline, &font, cfg.primary_color, &lbox);
    }
    if let Some(body) = &cfg.body_text {
        let font = p.font_sized(&cfg.body_style, cfg.body_style.size.saturating_sub(4), false);
        let lbox = LayoutBox::new(pad, y + 10.0, inner_w * 0.85).with_line_height(lh);
        y = p.text_block_auto(body, &font, cfg.body_style.color, &lbox);
    }
    y += gap / 2.0;

    let photo = Rect::from_origin_size((pad, y), (inner_w, (h * 0.22).floor()));
    if p.photo(photo, true)? {
        y = photo.y1 + gap / 2.0;
    }

    let features = cfg.visible_features();
    if !features.is_empty() {
        let spacing = 24.0;
        let n = features.len() as f64;
        let card_w = (inner_w - spacing * (n - 1.0)) / n;
        let card_h = 220.0;
        let title_font = p.font_sized(&cfg.body_style, 22, true);
        let text_font = p.font_sized(&cfg.body_style, 17, false);
        for (i, item) in features.iter().enumerate() {
            let card =
                Rect::from_origin_size((pad + i as f64 * (card_w + spacing), y), (card_w, card_h));
            if p.shadows() {
                drop_shadow(
                    p.canvas,
                    ShadowShape::RoundedRect {
                        rect: card,
                        radius: CARD_RADIUS,
                    },
                    Vec2::new(0.0, 8.0),
                    6,
                    Rgba::new(11, 31, 58, 40),
                )?;
            }
            rounded_rect(p.canvas, card, CARD_RADIUS, Rgb::WHITE);
            let cx = card.center().x;
            p.feature_badge(item, Point::new(cx, card.y0 + 50.0), 28.0, cfg.primary_color);
            let lbox = LayoutBox::new(cx, card.y0 + 92.0, card_w - 28.0).with_align(Align::Center);
            let next = p.text_block(
                &upper(&item.title),
                &title_font,
                cfg.headline_style.color,
                &lbox,
            );
            if !item.text.is_empty() {
                p.text_block(&item.text, &text_font, cfg.body_style.color, &lbox.at_y(next + 4.0));
            }
        }
        y += card_h + gap / 2.0;
    }

    let social_y = h - pad - 30.0;
    let social_ink = p.ink(
        Rect::new(pad, social_y, w - pad, social_y + 30.0),
        cfg.contact_style.color,
    );
    p.social_row(w / 2.0, social_y, 22, social_ink, cfg.primary_color);
    let contact_top = if cfg.social.entries().is_empty() {
        p.contact_block(w / 2.0, h - pad, inner_w, Align::Center)
    } else {
        p.contact_block(w / 2.0, social_y - 16.0, inner_w, Align::Center)
    };

    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let font = p.font_sized(&cfg.company_style, 28, true);
        let label = upper(cta);
        let btn_w = (p.measure(&label, &font) + 120.0).min(inner_w);
        let top = (contact_top - gap / 2.0 - 76.0).max(y);
        let btn = Rect::from_origin_size(((w - btn_w) / 2.0, top), (btn_w, 76.0));
        p.button(btn, &label, cfg.accent_color, cfg.cta_text_color, &font)?;
    }
    Ok(())
}
