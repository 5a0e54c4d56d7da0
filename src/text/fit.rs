use crate::assets::font::resolve_font;
use crate::text::engine::TextEngine;
use crate::text::layout::{DEFAULT_LINE_HEIGHT, LayoutBox, plan_block};

/// Shrink step for `size`: 4px above 40px, 2px otherwise.
fn decay_step(size: u32) -> u32 {
    if size > 40 { 4 } else { 2 }
}

/// Largest size on the decay schedule from `initial_size` whose wrapped block fits `max_height`.
///
/// Best effort: `min_size` is returned when nothing fits.
#[allow(clippy::too_many_arguments)]
pub fn fit_font_size(
    engine: &mut TextEngine,
    text: &str,
    font_ref: &str,
    max_width: f64,
    max_height: f64,
    initial_size: u32,
    bold: bool,
    min_size: u32,
) -> u32 {
    fit_font_size_with(
        engine,
        text,
        font_ref,
        &LayoutBox::new(0.0, 0.0, max_width)
            .with_max_height(max_height)
            .with_line_height(DEFAULT_LINE_HEIGHT),
        initial_size,
        bold,
        min_size,
    )
}

/// [`fit_font_size`] against an explicit box (line height taken from the box).
pub fn fit_font_size_with(
    engine: &mut TextEngine,
    text: &str,
    font_ref: &str,
    layout: &LayoutBox,
    initial_size: u32,
    bold: bool,
    min_size: u32,
) -> u32 {
    let min_size = min_size.max(1);
    let Some(max_height) = layout.max_height else {
        return initial_size.max(min_size);
    };

    let mut size = initial_size;
    // A non-blank block is at least one line tall, so oversized starts skip layout entirely.
    if !text.trim().is_empty() && layout.line_height > 0.0 {
        while size > min_size && f64::from(size) * layout.line_height > max_height {
            size = size.saturating_sub(decay_step(size));
        }
    }
    while size > min_size {
        let font = resolve_font(font_ref, size, bold);
        let plan = plan_block(engine, text, &font, layout);
        if plan.height() <= max_height {
            return size;
        }
        size = size.saturating_sub(decay_step(size));
    }

    tracing::debug!(min_size, initial_size, "font fit reached minimum size");
    min_size
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
