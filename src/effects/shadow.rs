use crate::assets::color::Rgba;
use crate::effects::blur::box_blur_rgba8_premul;
use crate::foundation::core::{PixelRect, Point, Rect, Vec2};
use crate::foundation::error::FlyerResult;
use crate::render::canvas::{Canvas, raster_layer, rect_to_cpu};

/// Radius of one softening pass.
const SHADOW_PASS_RADIUS: u32 = 2;

/// Outline of a shadow-casting element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowShape {
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f64 },
    Ellipse(Rect),
}

impl ShadowShape {
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Rect(r) | Self::RoundedRect { rect: r, .. } | Self::Ellipse(r) => r,
        }
    }

    fn translated(&self, offset: Vec2) -> Self {
        match *self {
            Self::Rect(r) => Self::Rect(r + offset),
            Self::RoundedRect { rect, radius } => Self::RoundedRect {
                rect: rect + offset,
                radius,
            },
            Self::Ellipse(r) => Self::Ellipse(r + offset),
        }
    }

    fn to_path(self) -> vello_cpu::kurbo::BezPath {
        use vello_cpu::kurbo::Shape as _;
        match self {
            Self::Rect(r) => rect_to_cpu(r).to_path(0.1),
            Self::RoundedRect { rect, radius } => {
                vello_cpu::kurbo::RoundedRect::from_rect(rect_to_cpu(rect), radius.max(0.0))
                    .to_path(0.1)
            }
            Self::Ellipse(r) => vello_cpu::kurbo::Ellipse::from_rect(rect_to_cpu(r)).to_path(0.1),
        }
    }
}

/// Soft shadow of `shape` shifted by `offset`, softened by `iterations` small box-blur passes.
///
/// Draw the casting element afterwards so it sits on top of its shadow.
pub fn drop_shadow(
    canvas: &mut Canvas,
    shape: ShadowShape,
    offset: Vec2,
    iterations: u32,
    color: Rgba,
) -> FlyerResult<()> {
    if color.a == 0 {
        return Ok(());
    }
    let shadow = shape.translated(offset);
    let reach = f64::from(SHADOW_PASS_RADIUS * iterations.max(1));
    let Some(bounds) = PixelRect::clamped(
        shadow.bounds().inflate(reach, reach),
        canvas.width(),
        canvas.height(),
    ) else {
        return Ok(());
    };

    let origin = Point::new(f64::from(bounds.x0), f64::from(bounds.y0));
    let path = shadow.to_path();
    let mut layer = raster_layer(bounds.width(), bounds.height(), origin, |ctx| {
        ctx.set_paint(color.to_cpu());
        ctx.fill_path(&path);
    })?;
    for _ in 0..iterations {
        layer.data =
            box_blur_rgba8_premul(&layer.data, layer.width, layer.height, SHADOW_PASS_RADIUS)?;
    }

    canvas.draw_layer(&layer, i64::from(bounds.x0), i64::from(bounds.y0), 1.0);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
