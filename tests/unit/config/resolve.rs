use std::path::PathBuf;

use super::*;
use crate::config::model::FeatureItem;

fn params(v: serde_json::Value) -> FlyerParams {
    FlyerParams::from_json_value(v).unwrap()
}

#[test]
fn empty_params_yield_defaults() {
    let cfg = resolve(&FlyerParams::default());
    assert_eq!(cfg.template, TemplateId::Minimal);
    assert_eq!((cfg.width, cfg.height), (1200, 1600));
    assert_eq!(cfg.bg_color, Rgb::new(0xFD, 0xFD, 0xFD));
    assert_eq!(cfg.primary_color, Rgb::new(0x00, 0x76, 0xBC));
    assert_eq!(cfg.headline_style.size, 85);
    assert_eq!(cfg.features.len(), 3);
    assert!(!cfg.full_bleed_background);
    assert_eq!(cfg.overlay, None);
}

#[test]
fn overrides_win_over_preset() {
    let cfg = resolve(&params(serde_json::json!({
        "template_id": "marketing_agency",
        "headline_font_color": "#FF0000",
        "bg_color": "#000"
    })));
    assert_eq!(cfg.template, TemplateId::Agency);
    assert_eq!(cfg.headline_style.color, Rgb::new(255, 0, 0));
    assert_eq!(cfg.bg_color, Rgb::BLACK);
    // Preset value survives where the caller is silent.
    assert_eq!(cfg.headline_style.size, 120);
}

#[test]
fn social_templates_default_to_square() {
    let cfg = resolve(&params(serde_json::json!({"template_id": "social_post"})));
    assert_eq!(cfg.template, TemplateId::QuoteSocial);
    assert_eq!((cfg.width, cfg.height), (1080, 1080));

    let sized = resolve(&params(serde_json::json!({
        "template_id": "abstract_social",
        "flyer_width": 1200
    })));
    assert_eq!((sized.width, sized.height), (1200, 1080));
}

#[test]
fn unknown_template_falls_back_to_minimal() {
    let cfg = resolve(&params(serde_json::json!({"template_id": "retro_wave"})));
    assert_eq!(cfg.template, TemplateId::Minimal);
    assert_eq!(resolve_template(Some("  ")), TemplateId::Minimal);
    assert_eq!(resolve_template(Some("glass")), TemplateId::GlassCard);
}

#[test]
fn invalid_color_keeps_the_layer_below() {
    let cfg = resolve(&params(serde_json::json!({
        "template_id": "zenith_modern",
        "bg_color": "#12345",
        "primary_color": "not-a-color"
    })));
    assert_eq!(cfg.bg_color, Rgb::new(0x2C, 0x3E, 0x50));
    assert_eq!(cfg.primary_color, Rgb::new(0x00, 0x76, 0xBC));
}

#[test]
fn full_bleed_follows_background_unless_overridden() {
    let with_bg = resolve(&params(serde_json::json!({"bg_image_path": "bg.png"})));
    assert!(with_bg.full_bleed_background);
    assert_eq!(with_bg.bg_image_path, Some(PathBuf::from("bg.png")));

    let forced_off = resolve(&params(serde_json::json!({
        "bg_image_path": "bg.png",
        "full_bleed_background": "false"
    })));
    assert!(!forced_off.full_bleed_background);
}

#[test]
fn empty_text_clears_defaults() {
    let cfg = resolve(&params(serde_json::json!({"tagline": "", "headline": "Hello"})));
    assert_eq!(cfg.tagline, None);
    assert_eq!(cfg.headline.as_deref(), Some("Hello"));
    assert_eq!(cfg.cta_text.as_deref(), Some("WWW.AGENCY-DOMAIN.COM"));
}

#[test]
fn typography_overrides_apply_per_role() {
    let cfg = resolve(&params(serde_json::json!({
        "default_font": "LiberationSans",
        "body_font": "fonts/Custom.ttf",
        "body_font_size": "31",
        "contact_font_size": 0
    })));
    assert_eq!(cfg.headline_style.font, "LiberationSans");
    assert_eq!(cfg.body_style.font, "fonts/Custom.ttf");
    assert_eq!(cfg.body_style.size, 31);
    assert_eq!(cfg.contact_style.size, 24);
}

#[test]
fn overlay_opacity_accepts_fraction_or_byte() {
    let frac = resolve(&params(serde_json::json!({
        "overlay_enabled": "true",
        "overlay_color": "#102030",
        "overlay_opacity": "0.5"
    })));
    assert_eq!(frac.overlay, Some(Rgb::new(0x10, 0x20, 0x30).with_alpha(128)));

    let byte = resolve(&params(serde_json::json!({
        "overlay_enabled": true,
        "overlay_opacity": 100
    })));
    assert_eq!(byte.overlay, Some(Rgb::BLACK.with_alpha(100)));
}

#[test]
fn enumerated_options_parse_and_bad_values_are_ignored() {
    let cfg = resolve(&params(serde_json::json!({
        "text_alignment": "left",
        "image_position": "bottom",
        "bg_type": "gradient",
        "gradient_direction": "diagonal",
        "pattern": "lines"
    })));
    assert_eq!(cfg.text_alignment, Align::Left);
    assert_eq!(cfg.image_position, ImagePosition::Bottom);
    assert_eq!(cfg.bg_kind, BackgroundKind::Gradient);
    assert_eq!(cfg.gradient_direction, GradientDirection::Diagonal);
    assert_eq!(cfg.pattern, PatternKind::Lines);

    let bad = resolve(&params(serde_json::json!({
        "text_alignment": "justify",
        "image_ratio": 3.0,
        "line_height": -1
    })));
    assert_eq!(bad.text_alignment, Align::Center);
    assert_eq!(bad.image_ratio, 0.55);
    assert_eq!(bad.line_height, 1.4);
}

#[test]
fn contact_social_and_features_are_carried() {
    let cfg = resolve(&params(serde_json::json!({
        "contact_phone": " +237 690 000 000 ",
        "contact_email": "",
        "instagram": "@codees_cm",
        "features": [
            {"title": "ONE"},
            {"title": "TWO"},
            {"title": "THREE"},
            {"title": "FOUR"},
            {"title": "FIVE"}
        ]
    })));
    assert_eq!(cfg.contact.lines(), vec!["+237 690 000 000"]);
    assert_eq!(cfg.social.entries(), vec![("@", "@codees_cm")]);
    assert_eq!(cfg.features.len(), 5);
    let visible: Vec<&str> = cfg
        .visible_features()
        .iter()
        .map(|f: &FeatureItem| f.title.as_str())
        .collect();
    assert_eq!(visible, vec!["ONE", "TWO", "THREE"]);
}

#[test]
fn cta_background_follows_primary_by_default() {
    let cfg = resolve(&params(serde_json::json!({"primary_color": "#ABCDEF"})));
    assert_eq!(cfg.cta_bg_color, Rgb::new(0xAB, 0xCD, 0xEF));
}

#[test]
fn oversized_font_sizes_are_clamped() {
    let cfg = resolve(&params(serde_json::json!({
        "headline_font_size": 200000,
        "body_font_size": "2000000000",
        "contact_font_size": 0,
        "company_font_size": 64
    })));
    assert_eq!(cfg.headline_style.size, MAX_FONT_SIZE);
    assert_eq!(cfg.body_style.size, MAX_FONT_SIZE);
    assert_eq!(cfg.contact_style.size, ResolvedConfig::default().contact_style.size);
    assert_eq!(cfg.company_style.size, 64);
}
