use super::*;

#[test]
fn canonical_ids_round_trip() {
    for id in TemplateId::ALL {
        assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
    }
}

#[test]
fn legacy_aliases_parse() {
    let cases = [
        ("modern_corporate", TemplateId::Corporate),
        ("marketing_agency", TemplateId::Agency),
        ("codees_hero", TemplateId::Hero),
        ("gradient", TemplateId::Hero),
        ("zenith_modern", TemplateId::GlassCard),
        ("Glass-Card", TemplateId::GlassCard),
        ("codees_minimal", TemplateId::Minimal),
        ("social_post", TemplateId::QuoteSocial),
        (" quote ", TemplateId::QuoteSocial),
    ];
    for (s, want) in cases {
        assert_eq!(s.parse::<TemplateId>().unwrap(), want, "{s}");
    }
}

#[test]
fn unknown_id_is_unsupported_template() {
    let err = "retro_wave".parse::<TemplateId>().unwrap_err();
    assert!(matches!(err, FlyerError::UnsupportedTemplate(ref s) if s == "retro_wave"));
    assert!(err.is_recoverable());
}

#[test]
fn dispatch_table_covers_every_variant_once() {
    for id in TemplateId::ALL {
        let rows = TEMPLATES.iter().filter(|(t, _)| *t == id).count();
        assert_eq!(rows, 1, "{id}");
    }
    assert_eq!(TEMPLATES.len(), TemplateId::ALL.len());
}

#[test]
fn serde_uses_canonical_ids() {
    let json = serde_json::to_string(&TemplateId::AbstractSocial).unwrap();
    assert_eq!(json, "\"abstract_social\"");
    let back: TemplateId = serde_json::from_str("\"zenith_modern\"").unwrap();
    assert_eq!(back, TemplateId::GlassCard);
    assert!(serde_json::from_str::<TemplateId>("\"nope\"").is_err());
}
