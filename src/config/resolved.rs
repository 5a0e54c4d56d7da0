use std::path::PathBuf;

use crate::assets::color::{Rgb, Rgba};
use crate::config::model::FeatureItem;
use crate::effects::gradient::GradientDirection;
use crate::effects::pattern::PatternKind;
use crate::templates::TemplateId;
use crate::text::layout::Align;

/// Font reference, size and color for one text role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font: String,
    pub size: u32,
    pub color: Rgb,
}

impl TextStyle {
    fn new(size: u32, color: Rgb) -> Self {
        Self {
            font: DEFAULT_FONT.to_owned(),
            size,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Solid,
    Gradient,
}

/// Where the main photo sits in templates that stack image and text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl Contact {
    /// Present fields in display order.
    pub fn lines(&self) -> Vec<&str> {
        [&self.phone, &self.email, &self.website, &self.address]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Social {
    pub facebook: Option<String>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
}

impl Social {
    /// `(short label, value)` for each present handle.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("f", &self.facebook),
            ("w", &self.whatsapp),
            ("@", &self.instagram),
            ("☎", &self.phone),
        ]
        .into_iter()
        .filter_map(|(label, v)| v.as_deref().map(|v| (label, v)))
        .collect()
    }
}

pub const DEFAULT_FONT: &str = "DejaVuSans";
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 1600;
/// Maximum number of feature blocks any template draws.
pub const MAX_FEATURES: usize = 3;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: u32 = 2048;

/// Fully merged render parameters. Every field has a value.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub template: TemplateId,
    /// Not validated here; rendering rejects sizes outside `1..=16384`.
    pub width: u32,
    pub height: u32,

    pub image_path: Option<PathBuf>,
    pub bg_image_path: Option<PathBuf>,
    pub logo_path: Option<PathBuf>,
    /// Templates skip their own decorative backgrounds and derive text contrast from the pixels.
    pub full_bleed_background: bool,

    pub image_ratio: f32,
    pub image_position: ImagePosition,
    pub padding: u32,
    pub section_spacing: u32,
    pub text_alignment: Align,
    pub line_height: f32,

    pub bg_kind: BackgroundKind,
    pub bg_color: Rgb,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
    pub gradient_direction: GradientDirection,
    pub overlay: Option<Rgba>,
    pub pattern: PatternKind,

    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub accent_color: Rgb,
    pub shadow_enabled: bool,
    pub accents_enabled: bool,

    pub default_font: String,
    pub company_style: TextStyle,
    pub headline_style: TextStyle,
    pub body_style: TextStyle,
    pub contact_style: TextStyle,

    pub company_name: Option<String>,
    pub headline: Option<String>,
    pub sub_headline: Option<String>,
    pub tagline: Option<String>,
    pub body_text: Option<String>,
    pub cta_text: Option<String>,
    pub show_cta: bool,
    pub cta_bg_color: Rgb,
    pub cta_text_color: Rgb,

    pub contact: Contact,
    pub social: Social,
    pub features: Vec<FeatureItem>,
}

impl ResolvedConfig {
    /// Features that will actually be drawn.
    pub fn visible_features(&self) -> &[FeatureItem] {
        &self.features[..self.features.len().min(MAX_FEATURES)]
    }
}

fn feature(title: &str, text: &str) -> FeatureItem {
    FeatureItem {
        title: title.to_owned(),
        text: text.to_owned(),
        icon: None,
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let primary = Rgb::new(0x00, 0x76, 0xBC);
        Self {
            template: TemplateId::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            image_path: None,
            bg_image_path: None,
            logo_path: None,
            full_bleed_background: false,

            image_ratio: 0.55,
            image_position: ImagePosition::Top,
            padding: 80,
            section_spacing: 50,
            text_alignment: Align::Center,
            line_height: 1.4,

            bg_kind: BackgroundKind::Solid,
            bg_color: Rgb::new(0xFD, 0xFD, 0xFD),
            gradient_start: primary,
            gradient_end: Rgb::new(0x0B, 0x1F, 0x3A),
            gradient_direction: GradientDirection::Vertical,
            overlay: None,
            pattern: PatternKind::Dots,

            primary_color: primary,
            secondary_color: Rgb::new(0x11, 0x11, 0x11),
            accent_color: Rgb::new(0xED, 0x1C, 0x24),
            shadow_enabled: true,
            accents_enabled: true,

            default_font: DEFAULT_FONT.to_owned(),
            company_style: TextStyle::new(42, Rgb::new(0x2C, 0x3E, 0x50)),
            headline_style: TextStyle::new(85, Rgb::new(0x2C, 0x3E, 0x50)),
            body_style: TextStyle::new(28, Rgb::new(0x34, 0x49, 0x5E)),
            contact_style: TextStyle::new(24, Rgb::new(0x7F, 0x8C, 0x8D)),

            company_name: None,
            headline: Some("MODERN SOLUTIONS FOR YOUR BUSINESS".to_owned()),
            sub_headline: None,
            tagline: Some("ELEVATING YOUR VISION".to_owned()),
            body_text: None,
            cta_text: Some("WWW.AGENCY-DOMAIN.COM".to_owned()),
            show_cta: true,
            cta_bg_color: primary,
            cta_text_color: Rgb::WHITE,

            contact: Contact::default(),
            social: Social::default(),
            features: vec![
                feature(
                    "INNOVATION",
                    "Driving forward with cutting-edge technology and creative strategies.",
                ),
                feature(
                    "STRATEGY",
                    "Tailored approaches designed to maximize your market impact.",
                ),
                feature(
                    "RESULTS",
                    "Measuring success through tangible growth and performance metrics.",
                ),
            ],
        }
    }
}
