use std::str::FromStr;

use crate::assets::color::{Rgb, Rgba, parse_hex_color};
use crate::config::model::FlyerParams;
use crate::config::preset::preset_for;
use crate::config::resolved::{
    BackgroundKind, Contact, ImagePosition, MAX_FONT_SIZE, ResolvedConfig, Social,
};
use crate::effects::gradient::GradientDirection;
use crate::effects::pattern::PatternKind;
use crate::foundation::math::opacity_to_u8;
use crate::templates::TemplateId;
use crate::text::layout::Align;

const DEFAULT_OVERLAY_OPACITY: f32 = 0.4;

/// Merge built-in defaults, the template preset and caller overrides, in that order.
///
/// Never fails: unusable values are reported with `warn!` and the layer below is kept.
#[tracing::instrument(skip(params), fields(template = ?params.template_id))]
pub fn resolve(params: &FlyerParams) -> ResolvedConfig {
    for key in params.unknown_keys() {
        tracing::warn!(key, "ignoring unknown flyer parameter");
    }

    let template = resolve_template(params.template_id.as_deref());
    let mut cfg = ResolvedConfig {
        template,
        ..ResolvedConfig::default()
    };
    preset_for(template).apply(&mut cfg);

    set_opt(&mut cfg.width, params.flyer_width);
    set_opt(&mut cfg.height, params.flyer_height);

    cfg.image_path = params.image_path.clone();
    cfg.bg_image_path = params.bg_image_path.clone();
    cfg.logo_path = params.logo_path.clone();
    cfg.full_bleed_background = params
        .full_bleed_background
        .unwrap_or(cfg.bg_image_path.is_some());

    if let Some(r) = params.image_ratio {
        if r > 0.0 && r < 1.0 {
            cfg.image_ratio = r;
        } else {
            tracing::warn!(image_ratio = r, "image_ratio must be in (0, 1), keeping default");
        }
    }
    set_parsed(&mut cfg.image_position, params.image_position.as_deref(), "image_position", |s| {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Some(ImagePosition::Top),
            "bottom" => Some(ImagePosition::Bottom),
            _ => None,
        }
    });
    set_opt(&mut cfg.padding, params.padding);
    set_opt(&mut cfg.section_spacing, params.section_spacing);
    set_parsed(&mut cfg.text_alignment, params.text_alignment.as_deref(), "text_alignment", |s| {
        Align::from_str(s).ok()
    });
    if let Some(lh) = params.line_height {
        if lh > 0.0 {
            cfg.line_height = lh;
        } else {
            tracing::warn!(line_height = lh, "line_height must be positive, keeping default");
        }
    }

    set_parsed(&mut cfg.bg_kind, params.bg_type.as_deref(), "bg_type", |s| {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" | "color" => Some(BackgroundKind::Solid),
            "gradient" => Some(BackgroundKind::Gradient),
            _ => None,
        }
    });
    set_color(&mut cfg.bg_color, params.bg_color.as_deref(), "bg_color");
    set_color(&mut cfg.gradient_start, params.gradient_start.as_deref(), "gradient_start");
    set_color(&mut cfg.gradient_end, params.gradient_end.as_deref(), "gradient_end");
    set_parsed(
        &mut cfg.gradient_direction,
        params.gradient_direction.as_deref(),
        "gradient_direction",
        |s| serde_json::from_value::<GradientDirection>(serde_json::Value::from(s.trim())).ok(),
    );
    set_parsed(&mut cfg.pattern, params.pattern.as_deref(), "pattern", |s| {
        serde_json::from_value::<PatternKind>(serde_json::Value::from(s.trim())).ok()
    });
    cfg.overlay = resolve_overlay(params);

    set_color(&mut cfg.primary_color, params.primary_color.as_deref(), "primary_color");
    set_color(&mut cfg.secondary_color, params.secondary_color.as_deref(), "secondary_color");
    set_color(&mut cfg.accent_color, params.accent_color.as_deref(), "accent_color");
    set_opt(&mut cfg.shadow_enabled, params.shadow_enabled);
    set_opt(&mut cfg.accents_enabled, params.accents_enabled);

    if let Some(font) = non_empty(&params.default_font) {
        cfg.default_font = font.clone();
        for style in [
            &mut cfg.company_style,
            &mut cfg.headline_style,
            &mut cfg.body_style,
            &mut cfg.contact_style,
        ] {
            style.font = font.clone();
        }
    }
    let styles = [
        (
            &mut cfg.company_style,
            &params.company_font,
            params.company_font_size,
            &params.company_font_color,
            "company_font_color",
        ),
        (
            &mut cfg.headline_style,
            &params.headline_font,
            params.headline_font_size,
            &params.headline_font_color,
            "headline_font_color",
        ),
        (
            &mut cfg.body_style,
            &params.body_font,
            params.body_font_size,
            &params.body_font_color,
            "body_font_color",
        ),
        (
            &mut cfg.contact_style,
            &params.contact_font,
            params.contact_font_size,
            &params.contact_font_color,
            "contact_font_color",
        ),
    ];
    for (style, font, size, color, field) in styles {
        if let Some(font) = non_empty(font) {
            style.font = font.clone();
        }
        match size {
            Some(0) => tracing::warn!(field, "font size must be positive, keeping default"),
            Some(s) if s > MAX_FONT_SIZE => {
                tracing::warn!(
                    field,
                    size = s,
                    max = MAX_FONT_SIZE,
                    "font size too large, clamping"
                );
                style.size = MAX_FONT_SIZE;
            }
            Some(s) => style.size = s,
            None => {}
        }
        set_color(&mut style.color, color.as_deref(), field);
    }

    set_text(&mut cfg.company_name, &params.company_name);
    set_text(&mut cfg.headline, &params.headline);
    set_text(&mut cfg.sub_headline, &params.sub_headline);
    set_text(&mut cfg.tagline, &params.tagline);
    set_text(&mut cfg.body_text, &params.body_text);
    set_text(&mut cfg.cta_text, &params.cta_text);
    set_opt(&mut cfg.show_cta, params.show_cta);
    cfg.cta_bg_color = cfg.primary_color;
    set_color(&mut cfg.cta_bg_color, params.cta_bg_color.as_deref(), "cta_bg_color");
    set_color(&mut cfg.cta_text_color, params.cta_text_color.as_deref(), "cta_text_color");

    cfg.contact = Contact {
        phone: text_value(&params.contact_phone),
        email: text_value(&params.contact_email),
        address: text_value(&params.contact_address),
        website: text_value(&params.contact_website),
    };
    cfg.social = Social {
        facebook: text_value(&params.facebook),
        whatsapp: text_value(&params.whatsapp),
        instagram: text_value(&params.instagram),
        phone: text_value(&params.phone),
    };
    if let Some(features) = &params.features {
        cfg.features = features.clone();
    }

    tracing::debug!(
        template = cfg.template.as_str(),
        width = cfg.width,
        height = cfg.height,
        full_bleed = cfg.full_bleed_background,
        "flyer config resolved"
    );
    cfg
}

/// Parse a template identifier, falling back to the default template.
pub fn resolve_template(id: Option<&str>) -> TemplateId {
    match id.map(str::trim).filter(|s| !s.is_empty()) {
        None => TemplateId::default(),
        Some(s) => s.parse().unwrap_or_else(|e| {
            tracing::warn!("{e}, using '{}'", TemplateId::default().as_str());
            TemplateId::default()
        }),
    }
}

fn resolve_overlay(params: &FlyerParams) -> Option<Rgba> {
    if !params.overlay_enabled.unwrap_or(false) {
        return None;
    }
    let mut color = Rgb::BLACK;
    set_color(&mut color, params.overlay_color.as_deref(), "overlay_color");
    let mut opacity = params.overlay_opacity.unwrap_or(DEFAULT_OVERLAY_OPACITY);
    // Values above 1 are taken as 0-255 alpha.
    if opacity > 1.0 {
        opacity /= 255.0;
    }
    Some(color.with_alpha(opacity_to_u8(opacity)))
}

fn set_opt<T>(dst: &mut T, src: Option<T>) {
    if let Some(v) = src {
        *dst = v;
    }
}

fn set_color(dst: &mut Rgb, src: Option<&str>, field: &str) {
    let Some(s) = src.filter(|s| !s.trim().is_empty()) else {
        return;
    };
    match parse_hex_color(s) {
        Ok(c) => *dst = c,
        Err(e) => tracing::warn!(field, "{e}, keeping {}", dst.to_hex()),
    }
}

fn set_parsed<T>(
    dst: &mut T,
    src: Option<&str>,
    field: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) {
    let Some(s) = src.filter(|s| !s.trim().is_empty()) else {
        return;
    };
    match parse(s) {
        Some(v) => *dst = v,
        None => tracing::warn!(field, value = s, "unrecognized value, keeping default"),
    }
}

fn non_empty(v: &Option<String>) -> Option<&String> {
    v.as_ref().filter(|s| !s.trim().is_empty())
}

fn text_value(v: &Option<String>) -> Option<String> {
    non_empty(v).map(|s| s.trim().to_owned())
}

/// An explicitly empty string clears the default text.
fn set_text(dst: &mut Option<String>, src: &Option<String>) {
    if let Some(s) = src {
        *dst = if s.trim().is_empty() {
            None
        } else {
            Some(s.clone())
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
