//! Per-template defaults layered between the built-in defaults and caller overrides.

use crate::assets::color::Rgb;
use crate::config::resolved::{BackgroundKind, ResolvedConfig};
use crate::effects::pattern::PatternKind;
use crate::templates::TemplateId;

/// Square canvas edge used by the social-media templates.
pub const SOCIAL_EDGE: u32 = 1080;

/// Values a template prefers over the global defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preset {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bg_kind: Option<BackgroundKind>,
    pub bg_color: Option<Rgb>,
    pub gradient_start: Option<Rgb>,
    pub gradient_end: Option<Rgb>,
    pub pattern: Option<PatternKind>,
    pub company_color: Option<Rgb>,
    pub headline_color: Option<Rgb>,
    pub headline_size: Option<u32>,
    pub body_color: Option<Rgb>,
    pub contact_color: Option<Rgb>,
}

impl Preset {
    fn square() -> Self {
        Self {
            width: Some(SOCIAL_EDGE),
            height: Some(SOCIAL_EDGE),
            ..Self::default()
        }
    }

    /// Overwrite `cfg` with every value this preset sets.
    pub fn apply(&self, cfg: &mut ResolvedConfig) {
        fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                *dst = v.clone();
            }
        }
        set(&mut cfg.width, &self.width);
        set(&mut cfg.height, &self.height);
        set(&mut cfg.bg_kind, &self.bg_kind);
        set(&mut cfg.bg_color, &self.bg_color);
        set(&mut cfg.gradient_start, &self.gradient_start);
        set(&mut cfg.gradient_end, &self.gradient_end);
        set(&mut cfg.pattern, &self.pattern);
        set(&mut cfg.company_style.color, &self.company_color);
        set(&mut cfg.headline_style.color, &self.headline_color);
        set(&mut cfg.headline_style.size, &self.headline_size);
        set(&mut cfg.body_style.color, &self.body_color);
        set(&mut cfg.contact_style.color, &self.contact_color);
    }
}

/// Preset for `template`.
pub fn preset_for(template: TemplateId) -> Preset {
    let white = Some(Rgb::WHITE);
    match template {
        TemplateId::Corporate => Preset {
            bg_color: white,
            headline_size: Some(80),
            ..Preset::default()
        },
        TemplateId::Agency => Preset {
            bg_color: Some(Rgb::new(0x1A, 0x1A, 0x1A)),
            company_color: white,
            headline_color: white,
            headline_size: Some(120),
            body_color: Some(Rgb::new(0xBB, 0xBB, 0xBB)),
            contact_color: Some(Rgb::new(0x99, 0x99, 0x99)),
            ..Preset::default()
        },
        TemplateId::Hero => Preset {
            bg_kind: Some(BackgroundKind::Gradient),
            gradient_start: Some(Rgb::new(0x00, 0x76, 0xBC)),
            gradient_end: Some(Rgb::new(0x0B, 0x1F, 0x3A)),
            company_color: white,
            headline_color: white,
            body_color: Some(Rgb::new(0xE8, 0xF1, 0xF8)),
            contact_color: Some(Rgb::new(0xD0, 0xDC, 0xE8)),
            ..Preset::default()
        },
        TemplateId::GlassCard => Preset {
            bg_color: Some(Rgb::new(0x2C, 0x3E, 0x50)),
            company_color: white,
            headline_color: white,
            headline_size: Some(70),
            body_color: Some(Rgb::new(0xEC, 0xF0, 0xF1)),
            contact_color: Some(Rgb::new(0xEC, 0xF0, 0xF1)),
            ..Preset::default()
        },
        TemplateId::Minimal => Preset::default(),
        TemplateId::QuoteSocial => Preset {
            bg_color: white,
            pattern: Some(PatternKind::Dots),
            ..Preset::square()
        },
        TemplateId::AbstractBusiness => Preset {
            bg_color: Some(Rgb::new(0xF7, 0xF9, 0xFC)),
            headline_color: Some(Rgb::new(0x0B, 0x1F, 0x3A)),
            headline_size: Some(76),
            ..Preset::default()
        },
        TemplateId::AbstractSocial => Preset {
            bg_color: Some(Rgb::new(0x0B, 0x1F, 0x3A)),
            company_color: white,
            headline_color: white,
            headline_size: Some(96),
            body_color: Some(Rgb::new(0xDC, 0xE6, 0xF2)),
            contact_color: Some(Rgb::new(0xDC, 0xE6, 0xF2)),
            ..Preset::square()
        },
    }
}
