use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::assets::color::Rgba;
use crate::assets::font::{FontFace, FontHandle, OutlineFace, builtin_advance_em};
use crate::render::canvas::Canvas;

/// Fraction of the em box filled by a built-in glyph block, horizontally.
const BLOCK_INSET: f32 = 0.12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Per-render text measurement and drawing.
///
/// Owns the Parley contexts (which are not `Sync`), so every render call creates its own engine
/// while sharing immutable [`FontHandle`]s through the process-wide cache.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    families: HashMap<PathBuf, Option<String>>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Exact pixel width of a single line of text.
    pub fn measure(&mut self, text: &str, font: &FontHandle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        if let FontFace::Outline(face) = font.face()
            && let Some(layout) = self.shape(text, face, font, TextBrush::default())
        {
            return layout.width();
        }
        builtin_width(text, font)
    }

    /// Draw one line with its top-left corner at `(x, y)`.
    pub fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &FontHandle,
        color: Rgba,
        x: f64,
        y: f64,
    ) {
        if text.trim().is_empty() || color.a == 0 {
            return;
        }
        if let FontFace::Outline(face) = font.face() {
            let brush = TextBrush {
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            };
            if let Some(layout) = self.shape(text, face, font, brush) {
                draw_layout(canvas, &layout, face, x, y);
                return;
            }
        }
        draw_builtin(canvas, text, font, color, x, y);
    }

    fn family_for(&mut self, face: &OutlineFace) -> Option<String> {
        if let Some(cached) = self.families.get(&face.path) {
            return cached.clone();
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.blob.data().to_vec()),
            None,
        );
        let name = families
            .first()
            .and_then(|(id, _)| self.font_ctx.collection.family_name(*id))
            .map(str::to_owned);
        if name.is_none() {
            tracing::warn!(
                path = %face.path.display(),
                "font file has no usable family, drawing with built-in face"
            );
        }
        self.families.insert(face.path.clone(), name.clone());
        name
    }

    fn shape(
        &mut self,
        text: &str,
        face: &OutlineFace,
        font: &FontHandle,
        brush: TextBrush,
    ) -> Option<parley::Layout<TextBrush>> {
        let family = self.family_for(face)?;
        let weight = if font.is_bold() {
            parley::style::FontWeight::BOLD
        } else {
            parley::style::FontWeight::NORMAL
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px()));
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }
}

fn draw_layout(
    canvas: &mut Canvas,
    layout: &parley::Layout<TextBrush>,
    face: &OutlineFace,
    x: f64,
    y: f64,
) {
    let ctx = canvas.ctx();
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&face.data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

fn builtin_scale(font: &FontHandle) -> f32 {
    if font.is_bold() {
        font.size_px() * 1.05
    } else {
        font.size_px()
    }
}

fn builtin_width(text: &str, font: &FontHandle) -> f32 {
    let scale = builtin_scale(font);
    text.chars().map(|c| builtin_advance_em(c) * scale).sum()
}

/// Render each non-space character as a solid block sitting on the baseline.
fn draw_builtin(canvas: &mut Canvas, text: &str, font: &FontHandle, color: Rgba, x: f64, y: f64) {
    let scale = builtin_scale(font);
    let size = f64::from(font.size_px());
    let baseline = y + size * 0.92;
    let mut path = vello_cpu::kurbo::BezPath::new();
    let mut cx = x;
    for ch in text.chars() {
        let adv = f64::from(builtin_advance_em(ch) * scale);
        if !ch.is_whitespace() {
            let top = if ch.is_lowercase() {
                y + size * 0.42
            } else {
                y + size * 0.22
            };
            let inset = adv * f64::from(BLOCK_INSET);
            let r = vello_cpu::kurbo::Rect::new(cx + inset, top, cx + adv - inset, baseline);
            path.extend(vello_cpu::kurbo::Shape::path_elements(&r, 0.1));
        }
        cx += adv;
    }
    if path.elements().is_empty() {
        return;
    }
    let ctx = canvas.ctx();
    ctx.set_paint(color.to_cpu());
    ctx.fill_path(&path);
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
