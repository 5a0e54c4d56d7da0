//! Flyerkit renders marketing flyers and social posts from a flat set of parameters.
//!
//! The pipeline is:
//!
//! - Parse caller [`FlyerParams`] (JSON) and [`resolve`] them into a [`ResolvedConfig`]
//! - [`render_flyer`] allocates a canvas, paints the background and dispatches to one of the
//!   [`TemplateId`] layouts
//! - [`encode_png`] serializes the finished raster
//!
//! Rendering is synchronous and single-threaded per call. The font cache is the only state shared
//! between calls, so independent flyers can be rendered in parallel.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod config;
pub(crate) mod effects;
/// Output encoders.
pub mod encode;
/// Canvas and rendering pipeline.
pub mod render;
/// Template identifiers and layouts.
pub mod templates;
pub(crate) mod text;

pub use crate::assets::color::{Rgb, Rgba, brightness, contrast_color, parse_hex_color};
pub use crate::assets::decode::load_image;
pub use crate::assets::font::{FontHandle, font_cache_len, resolve_font};
pub use crate::config::model::{FeatureItem, FlyerParams};
pub use crate::config::resolve::{resolve, resolve_template};
pub use crate::config::resolved::{
    BackgroundKind, Contact, ImagePosition, ResolvedConfig, Social, TextStyle,
};
pub use crate::effects::gradient::GradientDirection;
pub use crate::effects::pattern::PatternKind;
pub use crate::encode::png::encode_png;
pub use crate::foundation::core::{CanvasSize, Point, Rect, Vec2};
pub use crate::foundation::error::{FlyerError, FlyerResult};
pub use crate::render::canvas::Canvas;
pub use crate::render::flyer::{render_flyer, render_flyer_png};
pub use crate::templates::TemplateId;
pub use crate::text::engine::TextEngine;
pub use crate::text::fit::fit_font_size;
pub use crate::text::layout::{Align, LayoutBox, layout_and_draw};
