//! Multi-line block placement.
//!
//! Wrapping uses a character budget derived from the width of `"x"`; only alignment measures each
//! line exactly, at draw time. Callers stack blocks by feeding the returned `next_y` into the next
//! block's origin.

use crate::assets::color::Rgba;
use crate::assets::font::FontHandle;
use crate::foundation::core::Point;
use crate::render::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::wrap::{split_paragraphs, wrap_paragraph};

pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

/// Horizontal anchoring of each line relative to the layout origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Origin is the left edge.
    #[default]
    Left,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    Right,
}

impl Align {
    /// Left edge of a line of `width` pixels anchored at `origin_x`.
    pub fn line_x(self, origin_x: f64, width: f64) -> f64 {
        match self {
            Self::Left => origin_x,
            Self::Center => origin_x - width / 2.0,
            Self::Right => origin_x - width,
        }
    }
}

impl std::str::FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Ok(Self::Left),
            "center" | "centre" | "middle" => Ok(Self::Center),
            "right" | "end" => Ok(Self::Right),
            other => Err(format!("unknown alignment '{other}'")),
        }
    }
}

/// Placement constraint for one text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    pub origin: Point,
    pub max_width: f64,
    /// Height budget consulted by the fit solver; layout itself never clips.
    pub max_height: Option<f64>,
    pub align: Align,
    pub line_height: f64,
}

impl LayoutBox {
    pub fn new(x: f64, y: f64, max_width: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            max_width,
            max_height: None,
            align: Align::Left,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Same box with its origin moved down to `y`.
    pub fn at_y(mut self, y: f64) -> Self {
        self.origin.y = y;
        self
    }
}

/// One wrapped line and the top of its line box.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedLine {
    pub text: String,
    pub y: f64,
}

/// Result of laying out a block without drawing it.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockPlan {
    pub lines: Vec<PlannedLine>,
    pub start_y: f64,
    pub end_y: f64,
    pub chars_per_line: usize,
}

impl BlockPlan {
    pub fn height(&self) -> f64 {
        self.end_y - self.start_y
    }
}

/// Break `text` into positioned lines. Pure apart from font measurement.
pub fn plan_block(
    engine: &mut TextEngine,
    text: &str,
    font: &FontHandle,
    layout: &LayoutBox,
) -> BlockPlan {
    let start_y = layout.origin.y;
    let x_width = f64::from(engine.measure("x", font));
    let chars_per_line = if x_width > 0.0 && layout.max_width.is_finite() {
        ((layout.max_width / x_width).floor().max(1.0)) as usize
    } else {
        1
    };

    let mut plan = BlockPlan {
        lines: Vec::new(),
        start_y,
        end_y: start_y,
        chars_per_line,
    };
    if text.is_empty() {
        return plan;
    }

    let advance = f64::from(font.size_px()) * layout.line_height;
    let mut y = start_y;
    for paragraph in split_paragraphs(text) {
        if paragraph.trim().is_empty() {
            y += advance / 2.0;
            continue;
        }
        for line in wrap_paragraph(&paragraph, chars_per_line) {
            plan.lines.push(PlannedLine { text: line, y });
            y += advance;
        }
    }
    plan.end_y = y;
    plan
}

/// Wrap, align and draw `text`; returns the Y immediately below the block.
pub fn layout_and_draw(
    canvas: &mut Canvas,
    engine: &mut TextEngine,
    text: &str,
    font: &FontHandle,
    color: impl Into<Rgba>,
    layout: &LayoutBox,
) -> f64 {
    let color = color.into();
    let plan = plan_block(engine, text, font, layout);
    for line in &plan.lines {
        let width = f64::from(engine.measure(&line.text, font));
        let x = layout.align.line_x(layout.origin.x, width);
        engine.draw_line(canvas, &line.text, font, color, x, line.y);
    }
    plan.end_y
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
