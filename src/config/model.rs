use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::error::{FlyerError, FlyerResult};

/// One repeated "feature" block (icon, title, short description).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "desc")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Caller-supplied flyer options, every field optional.
///
/// Numbers and booleans are accepted either as JSON values or as strings (`"1200"`, `"true"`), the
/// way HTML forms submit them. Keys not listed here are kept in [`FlyerParams::extra`] and reported
/// during resolution instead of being silently passed along.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerParams {
    #[serde(alias = "template", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub flyer_width: Option<u32>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub flyer_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_image_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
    #[serde(deserialize_with = "opt_bool", skip_serializing_if = "Option::is_none")]
    pub full_bleed_background: Option<bool>,

    #[serde(deserialize_with = "opt_f32", skip_serializing_if = "Option::is_none")]
    pub image_ratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_position: Option<String>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<String>,
    #[serde(deserialize_with = "opt_f32", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_direction: Option<String>,
    #[serde(deserialize_with = "opt_bool", skip_serializing_if = "Option::is_none")]
    pub overlay_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
    #[serde(deserialize_with = "opt_f32", skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(deserialize_with = "opt_bool", skip_serializing_if = "Option::is_none")]
    pub shadow_enabled: Option<bool>,
    #[serde(deserialize_with = "opt_bool", skip_serializing_if = "Option::is_none")]
    pub accents_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_font: Option<String>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub company_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_font: Option<String>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub headline_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_font: Option<String>,
    #[serde(deserialize_with = "opt_u32", skip_serializing_if = "Option::is_none")]
    pub contact_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_font_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "opt_bool", skip_serializing_if = "Option::is_none")]
    pub show_cta: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(deserialize_with = "opt_features", skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureItem>>,

    /// Unrecognized keys, reported and otherwise ignored.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FlyerParams {
    /// Parse params from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlyerResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlyerError::validation(format!("parse flyer params JSON: {e}")))
    }

    /// Parse params from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlyerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlyerError::validation(format!("open flyer params JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_json_value(value: serde_json::Value) -> FlyerResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| FlyerError::validation(format!("parse flyer params JSON: {e}")))
    }

    /// Keys that did not match any recognized option.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Make relative asset paths relative to `base` instead of the working directory.
    pub fn rebase_paths(&mut self, base: &Path) {
        for path in [
            &mut self.image_path,
            &mut self.bg_image_path,
            &mut self.logo_path,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        for font in [
            &mut self.default_font,
            &mut self.company_font,
            &mut self.headline_font,
            &mut self.body_font,
            &mut self.contact_font,
        ]
        .into_iter()
        .flatten()
        {
            // Family names stay as they are; only file references are rebased.
            let p = Path::new(font.as_str());
            if p.is_relative() && p.extension().is_some() {
                let rebased = base.join(p);
                if rebased.is_file() {
                    *font = rebased.to_string_lossy().into_owned();
                }
            }
        }
    }
}

/// A JSON scalar as submitted by forms or typed clients.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    fn number(self) -> Result<Option<f64>, String> {
        match self {
            Self::Int(i) => Ok(Some(i as f64)),
            Self::Float(f) => Ok(Some(f)),
            Self::Str(s) if s.trim().is_empty() => Ok(None),
            Self::Str(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("expected a number, got '{s}'")),
            Self::Bool(b) => Err(format!("expected a number, got {b}")),
        }
    }

    fn boolean(self) -> Result<Option<bool>, String> {
        match self {
            Self::Bool(b) => Ok(Some(b)),
            Self::Int(0) => Ok(Some(false)),
            Self::Int(1) => Ok(Some(true)),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "" => Ok(None),
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(format!("expected a boolean, got '{s}'")),
            },
            Self::Int(i) => Err(format!("expected a boolean, got {i}")),
            Self::Float(f) => Err(format!("expected a boolean, got {f}")),
        }
    }
}

fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let Some(v) = Option::<Scalar>::deserialize(d)? else {
        return Ok(None);
    };
    match v.number().map_err(D::Error::custom)? {
        None => Ok(None),
        Some(f) if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) => {
            Ok(Some(f.round() as u32))
        }
        Some(f) => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {f}"
        ))),
    }
}

fn opt_f32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
    let Some(v) = Option::<Scalar>::deserialize(d)? else {
        return Ok(None);
    };
    match v.number().map_err(D::Error::custom)? {
        Some(f) if !f.is_finite() => Err(D::Error::custom("expected a finite number")),
        other => Ok(other.map(|f| f as f32)),
    }
}

fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    match Option::<Scalar>::deserialize(d)? {
        None => Ok(None),
        Some(v) => v.boolean().map_err(D::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeaturesRepr {
    List(Vec<FeatureItem>),
    Encoded(String),
}

fn opt_features<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<FeatureItem>>, D::Error> {
    match Option::<FeaturesRepr>::deserialize(d)? {
        None => Ok(None),
        Some(FeaturesRepr::List(items)) => Ok(Some(items)),
        Some(FeaturesRepr::Encoded(s)) if s.trim().is_empty() => Ok(None),
        Some(FeaturesRepr::Encoded(s)) => match serde_json::from_str::<Vec<FeatureItem>>(&s) {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                tracing::warn!("ignoring features string that is not a JSON list: {e}");
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
