//! Building blocks shared by the templates.

use std::path::Path;
use std::sync::Arc;

use crate::assets::color::{Rgb, Rgba, contrast_color};
use crate::assets::decode::load_image;
use crate::assets::font::{FontHandle, resolve_font};
use crate::config::model::FeatureItem;
use crate::config::resolved::{ResolvedConfig, TextStyle};
use crate::effects::image_fit::{logo_thumbnail, resize_to_fill};
use crate::effects::shadow::{ShadowShape, drop_shadow};
use crate::effects::shapes::rounded_pill;
use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{FlyerError, FlyerResult};
use crate::render::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::fit::fit_font_size_with;
use crate::text::layout::{Align, LayoutBox, layout_and_draw};

/// Smallest size the fit solver may shrink a headline to.
pub const MIN_HEADLINE_SIZE: u32 = 24;

/// Everything a template needs for one render.
pub struct Painter<'a> {
    pub canvas: &'a mut Canvas,
    pub text: &'a mut TextEngine,
    pub cfg: &'a ResolvedConfig,
    /// A background asset actually covers the canvas.
    pub full_bleed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(
        canvas: &'a mut Canvas,
        text: &'a mut TextEngine,
        cfg: &'a ResolvedConfig,
        full_bleed: bool,
    ) -> Self {
        Self {
            canvas,
            text,
            cfg,
            full_bleed,
        }
    }

    pub fn w(&self) -> f64 {
        self.canvas.size().w()
    }

    pub fn h(&self) -> f64 {
        self.canvas.size().h()
    }

    /// Decorative backgrounds and shapes are drawn only without a full-bleed asset.
    pub fn decorate(&self) -> bool {
        !self.full_bleed
    }

    pub fn accents(&self) -> bool {
        self.decorate() && self.cfg.accents_enabled
    }

    pub fn shadows(&self) -> bool {
        self.cfg.shadow_enabled
    }

    pub fn font(&self, style: &TextStyle, bold: bool) -> Arc<FontHandle> {
        resolve_font(&style.font, style.size, bold)
    }

    pub fn font_sized(&self, style: &TextStyle, size: u32, bold: bool) -> Arc<FontHandle> {
        resolve_font(&style.font, size.max(1), bold)
    }

    /// Text color for a block over `region`: `preferred` normally, contrast with the actual
    /// pixels when a full-bleed background sits underneath.
    pub fn ink(&mut self, region: Rect, preferred: Rgb) -> Rgb {
        if !self.full_bleed {
            return preferred;
        }
        let under = self
            .canvas
            .average_color(region)
            .unwrap_or(self.cfg.bg_color);
        contrast_color(under)
    }

    /// Wrap and draw `text`; returns the next Y.
    pub fn text_block(
        &mut self,
        text: &str,
        font: &FontHandle,
        color: impl Into<Rgba>,
        lbox: &LayoutBox,
    ) -> f64 {
        layout_and_draw(self.canvas, self.text, text, font, color, lbox)
    }

    /// Draw `text` with contrast-aware color. `region_h` is the expected block height.
    pub fn text_block_auto(
        &mut self,
        text: &str,
        font: &FontHandle,
        preferred: Rgb,
        lbox: &LayoutBox,
    ) -> f64 {
        let region = block_region(lbox, f64::from(font.size_px()) * lbox.line_height * 2.0);
        let color = self.ink(region, preferred);
        self.text_block(text, font, color, lbox)
    }

    /// Shrink `style`'s size until `text` fits `lbox`'s height, then draw it.
    pub fn fitted_block(
        &mut self,
        text: &str,
        style: &TextStyle,
        bold: bool,
        preferred: Rgb,
        lbox: &LayoutBox,
    ) -> f64 {
        self.fitted_block_sized(text, style, style.size, bold, preferred, lbox)
    }

    pub fn fitted_block_sized(
        &mut self,
        text: &str,
        style: &TextStyle,
        initial: u32,
        bold: bool,
        preferred: Rgb,
        lbox: &LayoutBox,
    ) -> f64 {
        let min = MIN_HEADLINE_SIZE.min(initial);
        let size = fit_font_size_with(self.text, text, &style.font, lbox, initial, bold, min);
        let font = self.font_sized(style, size, bold);
        let region = block_region(lbox, lbox.max_height.unwrap_or(f64::from(size)));
        let color = self.ink(region, preferred);
        self.text_block(text, &font, color, lbox)
    }

    /// Width of a single line.
    pub fn measure(&mut self, text: &str, font: &FontHandle) -> f64 {
        f64::from(self.text.measure(text, font))
    }

    /// Draw a single unwrapped line anchored at `x` per `align`.
    pub fn line(
        &mut self,
        text: &str,
        font: &FontHandle,
        color: impl Into<Rgba>,
        x: f64,
        y: f64,
        align: Align,
    ) {
        let w = self.measure(text, font);
        self.text
            .draw_line(self.canvas, text, font, color.into(), align.line_x(x, w), y);
    }

    /// Load `path`, logging and returning `None` when it is absent or unreadable.
    pub fn load(&self, path: Option<&Path>, what: &str) -> Option<image::RgbaImage> {
        let path = path?;
        match load_image(path) {
            Ok(img) => Some(img),
            Err(e @ FlyerError::AssetNotFound { .. }) => {
                tracing::warn!(asset = what, "{e}, skipping");
                None
            }
            Err(e) => {
                tracing::warn!(asset = what, "cannot load {}: {e:#}, skipping", path.display());
                None
            }
        }
    }

    /// Paste the main photo cropped to fill `rect`. Returns whether anything was drawn.
    pub fn photo(&mut self, rect: Rect, shadow: bool) -> FlyerResult<bool> {
        let Some(img) = self.load(self.cfg.image_path.as_deref(), "image") else {
            return Ok(false);
        };
        self.paste_fill(&img, rect, shadow)?;
        Ok(true)
    }

    pub fn paste_fill(
        &mut self,
        img: &image::RgbaImage,
        rect: Rect,
        shadow: bool,
    ) -> FlyerResult<()> {
        let (w, h) = (rect.width().round() as u32, rect.height().round() as u32);
        if w == 0 || h == 0 {
            return Ok(());
        }
        if shadow && self.shadows() {
            drop_shadow(
                self.canvas,
                ShadowShape::Rect(rect),
                Vec2::new(15.0, 15.0),
                10,
                Rgba::new(0, 0, 0, 80),
            )?;
        }
        let fitted = resize_to_fill(img, w, h)?;
        self.canvas
            .draw_image(&fitted, rect.x0.round() as i64, rect.y0.round() as i64);
        Ok(())
    }

    /// Place the logo inside `bounds` when configured and loadable.
    pub fn logo(&mut self, bounds: Rect) -> Option<Rect> {
        let img = self.load(self.cfg.logo_path.as_deref(), "logo")?;
        Some(logo_thumbnail(self.canvas, &img, bounds))
    }

    /// Pill button with centered label and optional soft shadow.
    pub fn button(
        &mut self,
        rect: Rect,
        label: &str,
        fill: Rgb,
        ink: Rgb,
        font: &FontHandle,
    ) -> FlyerResult<()> {
        if self.shadows() {
            drop_shadow(
                self.canvas,
                ShadowShape::RoundedRect {
                    rect,
                    radius: rect.height() / 2.0,
                },
                Vec2::new(8.0, 8.0),
                8,
                Rgba::new(0, 0, 0, 50),
            )?;
        }
        rounded_pill(self.canvas, rect, fill);
        let y = rect.center().y - f64::from(font.size_px()) * 0.55;
        self.line(label, font, ink, rect.center().x, y, Align::Center);
        Ok(())
    }

    /// Circular feature badge with the item's icon (or initial) inside.
    pub fn feature_badge(&mut self, item: &FeatureItem, center: Point, radius: f64, fill: Rgb) {
        let bounds = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        self.canvas.fill_ellipse(bounds, fill);
        let glyph = feature_glyph(item);
        if glyph.is_empty() {
            return;
        }
        let size = (radius * 0.9).round().max(1.0) as u32;
        let font = resolve_font(&self.cfg.default_font, size, true);
        let ink = contrast_color(fill);
        self.line(
            &glyph,
            &font,
            ink,
            center.x,
            center.y - f64::from(size) * 0.55,
            Align::Center,
        );
    }

    /// Contact lines stacked upward from `bottom`; returns the top Y of the block.
    pub fn contact_block(&mut self, x: f64, bottom: f64, max_width: f64, align: Align) -> f64 {
        let lines: Vec<String> = self
            .cfg
            .contact
            .lines()
            .into_iter()
            .map(str::to_owned)
            .collect();
        if lines.is_empty() {
            return bottom;
        }
        let style = &self.cfg.contact_style;
        let font = self.font(style, false);
        let lh = f64::from(style.size) * f64::from(self.cfg.line_height);
        let top = bottom - lh * lines.len() as f64;
        let color = self.ink(Rect::new(x - max_width, top, x + max_width, bottom), style.color);
        let lbox = LayoutBox::new(x, top, max_width)
            .with_align(align)
            .with_line_height(f64::from(self.cfg.line_height));
        self.text_block(&lines.join("\n"), &font, color, &lbox);
        top
    }

    /// Social handles in one row centered on `center_x`.
    pub fn social_row(&mut self, center_x: f64, y: f64, size: u32, color: Rgb, accent: Rgb) {
        let entries: Vec<(String, String)> = self
            .cfg
            .social
            .entries()
            .into_iter()
            .map(|(l, v)| (l.to_owned(), v.to_owned()))
            .collect();
        if entries.is_empty() {
            return;
        }
        let font = resolve_font(&self.cfg.default_font, size, false);
        let badge_r = f64::from(size) * 0.75;
        let gap = f64::from(size) * 1.5;
        let widths: Vec<f64> = entries
            .iter()
            .map(|(_, v)| self.measure(v, &font))
            .collect();
        let total: f64 = widths
            .iter()
            .map(|w| w + badge_r * 2.0 + f64::from(size) * 0.5)
            .sum::<f64>()
            + gap * (entries.len() - 1) as f64;

        let mut x = center_x - total / 2.0;
        for ((label, value), w) in entries.iter().zip(widths) {
            let item = FeatureItem {
                icon: Some(label.clone()),
                ..FeatureItem::default()
            };
            let center = Point::new(x + badge_r, y + f64::from(size) * 0.5);
            self.feature_badge(&item, center, badge_r, accent);
            x += badge_r * 2.0 + f64::from(size) * 0.5;
            self.line(value, &font, color, x, y, Align::Left);
            x += w + gap;
        }
    }
}

/// Text in a feature badge: the icon when given, else the title's first letter.
pub fn feature_glyph(item: &FeatureItem) -> String {
    match item.icon.as_deref().map(str::trim) {
        Some(icon) if !icon.is_empty() => icon.chars().take(2).collect(),
        _ => item
            .title
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
    }
}

/// Area a block anchored by `lbox` is expected to cover.
pub fn block_region(lbox: &LayoutBox, height: f64) -> Rect {
    let (x0, x1) = match lbox.align {
        Align::Left => (lbox.origin.x, lbox.origin.x + lbox.max_width),
        Align::Center => (
            lbox.origin.x - lbox.max_width / 2.0,
            lbox.origin.x + lbox.max_width / 2.0,
        ),
        Align::Right => (lbox.origin.x - lbox.max_width, lbox.origin.x),
    };
    Rect::new(x0, lbox.origin.y, x1, lbox.origin.y + height.max(1.0))
}

/// Uppercased copy, used for headline-style blocks.
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// `size * num / den` without intermediate overflow, at least 1px.
pub fn scaled(size: u32, num: u32, den: u32) -> u32 {
    let v = u64::from(size) * u64::from(num) / u64::from(den.max(1));
    u32::try_from(v).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/common.rs"]
mod tests;
