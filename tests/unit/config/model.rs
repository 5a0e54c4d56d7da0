use super::*;

fn parse(v: serde_json::Value) -> FlyerParams {
    FlyerParams::from_json_value(v).unwrap()
}

#[test]
fn form_style_strings_parse_as_numbers_and_bools() {
    let p = parse(serde_json::json!({
        "flyer_width": "1080",
        "flyer_height": 1350,
        "image_ratio": "0.4",
        "line_height": 1.3,
        "shadow_enabled": "false",
        "accents_enabled": "on",
        "overlay_enabled": 1,
        "padding": ""
    }));
    assert_eq!(p.flyer_width, Some(1080));
    assert_eq!(p.flyer_height, Some(1350));
    assert_eq!(p.image_ratio, Some(0.4));
    assert_eq!(p.line_height, Some(1.3));
    assert_eq!(p.shadow_enabled, Some(false));
    assert_eq!(p.accents_enabled, Some(true));
    assert_eq!(p.overlay_enabled, Some(true));
    assert_eq!(p.padding, None);
}

#[test]
fn malformed_numbers_are_validation_errors() {
    let err = FlyerParams::from_json_value(serde_json::json!({"flyer_width": "wide"})).unwrap_err();
    assert!(matches!(err, FlyerError::Validation(_)));
    let err = FlyerParams::from_json_value(serde_json::json!({"padding": -3})).unwrap_err();
    assert!(matches!(err, FlyerError::Validation(_)));
}

#[test]
fn features_accept_list_and_encoded_string() {
    let list = parse(serde_json::json!({
        "features": [
            {"title": "ONE", "text": "first"},
            {"icon": "*", "title": "TWO", "desc": "second"}
        ]
    }));
    let items = list.features.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].text, "second");
    assert_eq!(items[1].icon.as_deref(), Some("*"));

    let encoded = parse(serde_json::json!({
        "features": "[{\"title\":\"A\"},{\"title\":\"B\",\"desc\":\"b\"}]"
    }));
    let items = encoded.features.unwrap();
    assert_eq!(items[0].title, "A");
    assert_eq!(items[0].text, "");
    assert_eq!(items[1].text, "b");
}

#[test]
fn broken_feature_string_is_ignored() {
    let p = parse(serde_json::json!({"features": "not json"}));
    assert_eq!(p.features, None);
}

#[test]
fn unknown_keys_are_collected() {
    let p = parse(serde_json::json!({
        "headline": "Hi",
        "layout_type": "split",
        "colour": "#fff"
    }));
    assert_eq!(p.headline.as_deref(), Some("Hi"));
    let unknown: Vec<&str> = p.unknown_keys().collect();
    assert_eq!(unknown, vec!["colour", "layout_type"]);
}

#[test]
fn template_alias_is_accepted() {
    let p = parse(serde_json::json!({"template": "glass"}));
    assert_eq!(p.template_id.as_deref(), Some("glass"));
}

#[test]
fn serialization_skips_absent_fields() {
    let p = parse(serde_json::json!({"headline": "Hi", "flyer_width": "900"}));
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v, serde_json::json!({"headline": "Hi", "flyer_width": 900}));
}

#[test]
fn rebase_only_touches_relative_paths() {
    let mut p = parse(serde_json::json!({
        "image_path": "photo.png",
        "logo_path": "/abs/logo.png",
        "default_font": "DejaVuSans"
    }));
    p.rebase_paths(Path::new("/data/campaign"));
    assert_eq!(p.image_path, Some(PathBuf::from("/data/campaign/photo.png")));
    assert_eq!(p.logo_path, Some(PathBuf::from("/abs/logo.png")));
    assert_eq!(p.default_font.as_deref(), Some("DejaVuSans"));
}

#[test]
fn from_path_reports_missing_file() {
    let err = FlyerParams::from_path("target/definitely/missing/params.json").unwrap_err();
    assert!(err.to_string().contains("open flyer params JSON"));
}
