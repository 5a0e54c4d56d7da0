//! Flyer layout programs.
//!
//! Each template is one variant of [`TemplateId`] with one render function, registered in
//! [`TEMPLATES`]. Adding a template means adding a variant, a module and a table row.

use std::str::FromStr;

use crate::foundation::error::{FlyerError, FlyerResult};

pub(crate) mod abstract_business;
pub(crate) mod abstract_social;
pub(crate) mod agency;
pub(crate) mod common;
pub(crate) mod corporate;
pub(crate) mod glass_card;
pub(crate) mod hero;
pub(crate) mod minimal;
pub(crate) mod quote_social;

pub use common::Painter;

/// Closed set of flyer layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Clean white layout with a framed photo and a three-column feature row.
    Corporate,
    /// Dark, high-contrast layout with oversized left-aligned headline.
    Agency,
    /// Gradient background with a hero photo and pill call-to-action.
    Hero,
    /// Full-bleed photo behind a frosted glass card.
    GlassCard,
    /// Configurable stacked layout driven by ratio, padding and alignment options.
    #[default]
    Minimal,
    /// Square social post with framed photo and dotted background.
    QuoteSocial,
    /// Portrait flyer with abstract shapes and feature cards.
    AbstractBusiness,
    /// Square social post with abstract shapes and social handles.
    AbstractSocial,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Corporate,
        TemplateId::Agency,
        TemplateId::Hero,
        TemplateId::GlassCard,
        TemplateId::Minimal,
        TemplateId::QuoteSocial,
        TemplateId::AbstractBusiness,
        TemplateId::AbstractSocial,
    ];

    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Agency => "agency",
            Self::Hero => "hero",
            Self::GlassCard => "glass_card",
            Self::Minimal => "minimal",
            Self::QuoteSocial => "quote_social",
            Self::AbstractBusiness => "abstract_business",
            Self::AbstractSocial => "abstract_social",
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = FlyerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase().replace('-', "_");
        let t = match id.as_str() {
            "corporate" | "modern_corporate" => Self::Corporate,
            "agency" | "marketing_agency" => Self::Agency,
            "hero" | "codees_hero" | "gradient" => Self::Hero,
            "glass_card" | "zenith_modern" | "glass" => Self::GlassCard,
            "minimal" | "codees_minimal" => Self::Minimal,
            "quote_social" | "social_post" | "quote" => Self::QuoteSocial,
            "abstract_business" => Self::AbstractBusiness,
            "abstract_social" => Self::AbstractSocial,
            _ => return Err(FlyerError::unsupported_template(s.trim())),
        };
        Ok(t)
    }
}

impl serde::Serialize for TemplateId {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for TemplateId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub type RenderFn = fn(&mut Painter<'_>) -> FlyerResult<()>;

/// Dispatch table, one row per [`TemplateId`] variant.
pub const TEMPLATES: [(TemplateId, RenderFn); 8] = [
    (TemplateId::Corporate, corporate::render),
    (TemplateId::Agency, agency::render),
    (TemplateId::Hero, hero::render),
    (TemplateId::GlassCard, glass_card::render),
    (TemplateId::Minimal, minimal::render),
    (TemplateId::QuoteSocial, quote_social::render),
    (TemplateId::AbstractBusiness, abstract_business::render),
    (TemplateId::AbstractSocial, abstract_social::render),
];

/// Look up the render function for `id`.
pub fn renderer_for(id: TemplateId) -> RenderFn {
    TEMPLATES
        .iter()
        .find(|(t, _)| *t == id)
        .map(|(_, f)| *f)
        .unwrap_or(minimal::render)
}

/// Run the template selected by the painter's config.
pub fn render_template(painter: &mut Painter<'_>) -> FlyerResult<()> {
    let id = painter.cfg.template;
    tracing::debug!(template = id.as_str(), "dispatching template");
    renderer_for(id)(painter)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/mod.rs"]
mod tests;
