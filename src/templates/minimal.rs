//! Stacked layout driven by the generic layout options: image ratio and position, padding,
//! section spacing, alignment and line height.

use crate::config::resolved::ImagePosition;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, scaled, upper};
use crate::text::layout::{Align, LayoutBox};

const BAND: f64 = 12.0;
const LOGO_H: f64 = 100.0;

fn anchor_x(align: Align, pad: f64, w: f64) -> f64 {
    match align {
        Align::Left => pad,
        Align::Center => w / 2.0,
        Align::Right => w - pad,
    }
}

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = f64::from(cfg.padding);
    let gap = f64::from(cfg.section_spacing);
    let lh = f64::from(cfg.line_height);
    let align = cfg.text_alignment;
    let inner_w = (w - 2.0 * pad).max(1.0);
    let x = anchor_x(align, pad, w);

    if p.accents() {
        p.canvas.fill_rect(Rect::new(0.0, 0.0, w, BAND), cfg.primary_color);
        p.canvas
            .fill_rect(Rect::new(0.0, h - BAND, w, h), cfg.accent_color);
    }

    let mut y = pad;
    let logo_w = w * 0.3;
    let logo_x0 = match align {
        Align::Left => pad,
        Align::Center => (w - logo_w) / 2.0,
        Align::Right => w - pad - logo_w,
    };
    if let Some(logo) = p.logo(Rect::new(logo_x0, y, logo_x0 + logo_w, y + LOGO_H)) {
        y = logo.y1 + gap / 2.0;
    }
    if let Some(name) = &cfg.company_name {
        let font = p.font(&cfg.company_style, true);
        let lbox = LayoutBox::new(x, y, inner_w).with_align(align);
        y = p.text_block_auto(&upper(name), &font, cfg.company_style.color, &lbox) + gap / 2.0;
    }

    let image_h = (h * f64::from(cfg.image_ratio)).floor();
    let has_image = cfg.image_path.is_some();
    if has_image && cfg.image_position == ImagePosition::Top {
        let rect = Rect::from_origin_size((pad, y), (inner_w, image_h));
        if p.photo(rect, true)? {
            y = rect.y1 + gap;
        }
    }

    if let Some(headline) = &cfg.headline {
        let reserved = if has_image && cfg.image_position == ImagePosition::Bottom {
            image_h + gap
        } else {
            0.0
        };
        let room = (h - pad - reserved - y) * 0.45;
        let lbox = LayoutBox::new(x, y, inner_w)
            .with_align(align)
            .with_line_height(1.15)
            .with_max_height(room.max(f64::from(cfg.headline_style.size)));
        y = p.fitted_block(
            headline,
            &cfg.headline_style,
            true,
            cfg.headline_style.color,
            &lbox,
        ) + gap / 3.0;
    }
    if let Some(sub) = &cfg.sub_headline {
        let font = p.font(&cfg.body_style, true);
        let lbox = LayoutBox::new(x, y, inner_w).with_align(align);
        y = p.text_block_auto(sub, &font, cfg.primary_color, &lbox);
    }
    if let Some(tagline) = &cfg.tagline {
        let font = p.font(&cfg.body_style, false);
        let lbox = LayoutBox::new(x, y, inner_w)
            .with_align(align)
            .with_line_height(lh);
        y = p.text_block_auto(tagline, &font, cfg.primary_color, &lbox);
    }
    if let Some(body) = &cfg.body_text {
        let font = p.font(&cfg.body_style, false);
        let lbox = LayoutBox::new(x, y + gap / 3.0, inner_w)
            .with_align(align)
            .with_line_height(lh);
        y = p.text_block_auto(body, &font, cfg.body_style.color, &lbox);
    }

    let features = cfg.visible_features();
    if !features.is_empty() {
        y += gap / 2.0;
        let radius = 22.0;
        let title_font = p.font_sized(&cfg.body_style, scaled(cfg.body_style.size, 4, 5), true);
        let text_font = p.font_sized(&cfg.body_style, scaled(cfg.body_style.size, 2, 3), false);
        for item in features {
            p.feature_badge(item, Point::new(pad + radius, y + radius), radius, cfg.primary_color);
            let tx = pad + radius * 2.0 + 20.0;
            let lbox = LayoutBox::new(tx, y, inner_w - (tx - pad)).with_line_height(lh);
            let next = p.text_block_auto(
                &upper(&item.title),
                &title_font,
                cfg.headline_style.color,
                &lbox,
            );
            let end = if item.text.is_empty() {
                next
            } else {
                p.text_block_auto(&item.text, &text_font, cfg.body_style.color, &lbox.at_y(next))
            };
            y = end.max(y + radius * 2.0) + gap / 3.0;
        }
    }

    let mut footer_top = p.contact_block(x, h - pad, inner_w, align);
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let font = p.font(&cfg.contact_style, true);
        let btn_w = (p.measure(cta, &font) + 80.0).min(inner_w);
        let btn_h = f64::from(font.size_px()) * 2.4;
        let x0 = match align {
            Align::Left => pad,
            Align::Center => (w - btn_w) / 2.0,
            Align::Right => w - pad - btn_w,
        };
        let top = (footer_top - gap / 2.0 - btn_h).max(y);
        let btn = Rect::from_origin_size((x0, top), (btn_w, btn_h));
        p.button(btn, cta, cfg.cta_bg_color, cfg.cta_text_color, &font)?;
        footer_top = top;
    }

    if has_image && cfg.image_position == ImagePosition::Bottom {
        let bottom = footer_top - gap / 2.0;
        let top = (bottom - image_h).max(y + gap / 2.0);
        if bottom - top >= 1.0 {
            p.photo(Rect::new(pad, top, w - pad, bottom), true)?;
        }
    }
    Ok(())
}
