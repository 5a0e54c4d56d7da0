//! Square social post on a dark field with abstract circles, bold copy and social handles.

use crate::assets::color::Rgb;
use crate::effects::gradient::radial_glow;
use crate::effects::shapes::accent_line;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FlyerResult;
use crate::templates::common::{Painter, upper};
use crate::text::layout::{Align, LayoutBox};

fn circle(center: Point, r: f64) -> Rect {
    Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
}

fn shapes(p: &mut Painter<'_>) {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    radial_glow(
        p.canvas,
        Point::new(w * 0.5, h * 0.45),
        w * 0.7,
        cfg.primary_color.with_alpha(60),
    );
    p.canvas
        .fill_ellipse(circle(Point::new(w * 0.95, h * 0.05), w * 0.28), cfg.primary_color);
    p.canvas.fill_ellipse(
        circle(Point::new(w * 0.78, h * 0.2), w * 0.06),
        cfg.accent_color,
    );
    p.canvas.fill_ellipse(
        circle(Point::new(w * 0.02, h * 0.98), w * 0.22),
        cfg.accent_color.with_alpha(90),
    );
    for i in 0..4 {
        let off = f64::from(i) * 26.0;
        accent_line(
            p.canvas,
            Point::new(w * 0.62 + off, h),
            Point::new(w + off, h * 0.62),
            Rgb::WHITE,
            6.0,
            30,
        );
    }
}

pub(crate) fn render(p: &mut Painter<'_>) -> FlyerResult<()> {
    let cfg = p.cfg;
    let (w, h) = (p.w(), p.h());
    let pad = (w * 0.08).floor();
    let inner_w = w - 2.0 * pad;

    if p.accents() {
        shapes(p);
    }

    let mut y = pad;
    if let Some(logo) = p.logo(Rect::new(pad, y, pad + w * 0.25, y + 90.0)) {
        y = logo.y1 + 30.0;
    } else if let Some(name) = &cfg.company_name {
        let font = p.font_sized(&cfg.company_style, 30, true);
        let lbox = LayoutBox::new(pad, y, inner_w * 0.6);
        y = p.text_block_auto(&upper(name), &font, cfg.company_style.color, &lbox) + 30.0;
    } else {
        y += 60.0;
    }

    let photo = Rect::from_origin_size((pad, y), (inner_w, (h * 0.28).floor()));
    if p.photo(photo, true)? {
        y = photo.y1 + 40.0;
    }

    if let Some(sub) = &cfg.sub_headline {
        let font = p.font_sized(&cfg.body_style, 30, true);
        let lbox = LayoutBox::new(pad, y, inner_w);
        y = p.text_block_auto(&upper(sub), &font, cfg.accent_color, &lbox) + 8.0;
    }
    if let Some(headline) = &cfg.headline {
        let lbox = LayoutBox::new(pad, y, inner_w)
            .with_line_height(1.05)
            .with_max_height((h * 0.62 - y).max(h * 0.15));
        y = p.fitted_block(
            headline,
            &cfg.headline_style,
            true,
            cfg.headline_style.color,
            &lbox,
        ) + 16.0;
    }
    if let Some(tagline) = &cfg.tagline {
        let font = p.font_sized(&cfg.body_style, 30, false);
        let lbox = LayoutBox::new(pad, y, inner_w * 0.9).with_line_height(1.3);
        y = p.text_block_auto(tagline, &font, cfg.body_style.color, &lbox);
    }

    let social_y = h - pad - 28.0;
    if cfg.show_cta
        && let Some(cta) = &cfg.cta_text
    {
        let font = p.font_sized(&cfg.company_style, 30, true);
        let btn_h = 78.0;
        let btn_w = (p.measure(cta, &font) + 100.0).min(inner_w);
        let top = (social_y - 40.0 - btn_h).max(y + 20.0);
        let btn = Rect::from_origin_size((pad, top), (btn_w, btn_h));
        p.button(btn, cta, cfg.cta_bg_color, cfg.cta_text_color, &font)?;
    }

    let ink = p.ink(
        Rect::new(pad, social_y, w - pad, social_y + 28.0),
        cfg.contact_style.color,
    );
    p.social_row(w / 2.0, social_y, 20, ink, cfg.accent_color);
    if cfg.social.entries().is_empty() {
        p.contact_block(w - pad, h - pad, inner_w, Align::Right);
    }
    Ok(())
}
