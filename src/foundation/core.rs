use crate::foundation::error::{FlyerError, FlyerResult};

pub use kurbo::{Point, Rect, Vec2};

/// Largest accepted canvas edge. The raster backend addresses pixels with `u16`.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Create validated canvas dimensions.
    pub fn new(width: u32, height: u32) -> FlyerResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlyerError::validation(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
            return Err(FlyerError::validation(format!(
                "canvas dimensions {width}x{height} exceed {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Rectangle covering the whole canvas.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

/// Integer pixel rectangle clamped to a surface, `x1`/`y1` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelRect {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl PixelRect {
    /// Round `rect` outward and clamp it to `width x height`. `None` when nothing remains.
    pub(crate) fn clamped(rect: Rect, width: u32, height: u32) -> Option<Self> {
        let r = rect.abs();
        let x0 = r.x0.floor().clamp(0.0, f64::from(width)) as u32;
        let y0 = r.y0.floor().clamp(0.0, f64::from(height)) as u32;
        let x1 = r.x1.ceil().clamp(0.0, f64::from(width)) as u32;
        let y1 = r.y1.ceil().clamp(0.0, f64::from(height)) as u32;
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self { x0, y0, x1, y1 })
    }

    pub(crate) fn width(self) -> u32 {
        self.x1 - self.x0
    }

    pub(crate) fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
