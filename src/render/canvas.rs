use vello_cpu::kurbo::Shape as _;

use crate::assets::color::{Rgb, Rgba};
use crate::effects::composite::{Layer, blend_over, composite_layer_at};
use crate::foundation::core::{CanvasSize, PixelRect, Point, Rect};
use crate::foundation::error::{FlyerError, FlyerResult};

/// Mutable premultiplied RGBA8 raster owned by a single render call.
///
/// Vector drawing (rects, paths, glyphs) is batched in a `vello_cpu::RenderContext` and composited
/// onto the pixmap on [`Canvas::flush`]. Every pixel-level accessor flushes first, so callers can
/// freely interleave vector and raster operations in painter's order.
pub struct Canvas {
    size: CanvasSize,
    pixmap: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
    scratch: Option<vello_cpu::Pixmap>,
    pending: bool,
}

impl Canvas {
    /// Allocate a canvas filled with an opaque background color.
    pub fn new(size: CanvasSize, fill: Rgb) -> FlyerResult<Self> {
        let (w, h) = dims_u16(size)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let px = fill.opaque().to_premul();
        for dst in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
        Ok(Self {
            size,
            pixmap,
            ctx: vello_cpu::RenderContext::new(w, h),
            scratch: None,
            pending: false,
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Access the batched vector context; marks the batch dirty.
    pub(crate) fn ctx(&mut self) -> &mut vello_cpu::RenderContext {
        self.pending = true;
        &mut self.ctx
    }

    /// Composite pending vector drawing onto the pixmap.
    pub fn flush(&mut self) {
        if !self.pending {
            return;
        }
        let mut scratch = self
            .scratch
            .take()
            .unwrap_or_else(|| vello_cpu::Pixmap::new(self.pixmap.width(), self.pixmap.height()));
        scratch.data_as_u8_slice_mut().fill(0);

        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut scratch);
        blend_over(
            self.pixmap.data_as_u8_slice_mut(),
            scratch.data_as_u8_slice(),
            1.0,
        );
        self.ctx.reset();
        self.scratch = Some(scratch);
        self.pending = false;
    }

    /// Flushed premultiplied pixel bytes.
    pub fn pixels(&mut self) -> &[u8] {
        self.flush();
        self.pixmap.data_as_u8_slice()
    }

    /// Flushed mutable premultiplied pixel bytes.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.flush();
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&mut self, x: u32, y: u32) -> [u8; 4] {
        let w = self.width() as usize;
        let i = (y as usize * w + x as usize) * 4;
        let px = self.pixels();
        [px[i], px[i + 1], px[i + 2], px[i + 3]]
    }

    pub fn fill_rect(&mut self, rect: Rect, color: impl Into<Rgba>) {
        let color = color.into();
        if color.a == 0 {
            return;
        }
        let ctx = self.ctx();
        ctx.set_paint(color.to_cpu());
        ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub fn stroke_rect(&mut self, rect: Rect, width: f64, color: impl Into<Rgba>) {
        let path = rect_to_cpu(rect).to_path(0.1);
        self.stroke_path(&path, width, color.into());
    }

    pub fn fill_ellipse(&mut self, bounds: Rect, color: impl Into<Rgba>) {
        let color = color.into();
        let b = rect_to_cpu(bounds);
        let ellipse = vello_cpu::kurbo::Ellipse::from_rect(b);
        let ctx = self.ctx();
        ctx.set_paint(color.to_cpu());
        ctx.fill_path(&ellipse.to_path(0.1));
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: impl Into<Rgba>) {
        let color = color.into();
        let rr = vello_cpu::kurbo::RoundedRect::from_rect(rect_to_cpu(rect), radius.max(0.0));
        let ctx = self.ctx();
        ctx.set_paint(color.to_cpu());
        ctx.fill_path(&rr.to_path(0.1));
    }

    pub fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        width: f64,
        color: impl Into<Rgba>,
    ) {
        let rr = vello_cpu::kurbo::RoundedRect::from_rect(rect_to_cpu(rect), radius.max(0.0));
        self.stroke_path(&rr.to_path(0.1), width, color.into());
    }

    pub fn stroke_line(&mut self, start: Point, end: Point, width: f64, color: impl Into<Rgba>) {
        let line = vello_cpu::kurbo::Line::new(point_to_cpu(start), point_to_cpu(end));
        self.stroke_path(&line.to_path(0.1), width, color.into());
    }

    pub fn fill_polygon(&mut self, points: &[Point], color: impl Into<Rgba>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();
        self.fill_path(&path, color.into());
    }

    pub(crate) fn fill_path(&mut self, path: &vello_cpu::kurbo::BezPath, color: Rgba) {
        if color.a == 0 || path.elements().is_empty() {
            return;
        }
        let ctx = self.ctx();
        ctx.set_paint(color.to_cpu());
        ctx.fill_path(path);
    }

    pub(crate) fn stroke_path(
        &mut self,
        path: &vello_cpu::kurbo::BezPath,
        width: f64,
        color: Rgba,
    ) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        let ctx = self.ctx();
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        ctx.set_paint(color.to_cpu());
        ctx.stroke_path(path);
    }

    /// Composite a premultiplied layer with its top-left at `(x, y)`.
    pub fn draw_layer(&mut self, layer: &Layer, x: i64, y: i64, opacity: f32) {
        let (w, h) = (self.width(), self.height());
        composite_layer_at(self.pixels_mut(), w, h, layer, x, y, opacity);
    }

    /// Composite a straight-alpha image with its top-left at `(x, y)`.
    pub fn draw_image(&mut self, img: &image::RgbaImage, x: i64, y: i64) {
        self.draw_layer(&Layer::from_rgba_image(img), x, y, 1.0);
    }

    /// Mean color of the pixels under `rect`, sampled on a sparse grid for large regions.
    pub fn average_color(&mut self, rect: Rect) -> Option<Rgb> {
        let (w, h) = (self.width(), self.height());
        let r = PixelRect::clamped(rect, w, h)?;
        let area = u64::from(r.width()) * u64::from(r.height());
        let step = ((area as f64 / 16_384.0).sqrt().floor() as u32).max(1);

        let px = self.pixels();
        let mut sum = [0u64; 3];
        let mut n = 0u64;
        for y in (r.y0..r.y1).step_by(step as usize) {
            for x in (r.x0..r.x1).step_by(step as usize) {
                let i = (y as usize * w as usize + x as usize) * 4;
                for c in 0..3 {
                    sum[c] += u64::from(px[i + c]);
                }
                n += 1;
            }
        }
        if n == 0 {
            return None;
        }
        let avg = |s: u64| -> u8 { ((s + n / 2) / n).min(255) as u8 };
        Some(Rgb::new(avg(sum[0]), avg(sum[1]), avg(sum[2])))
    }

    /// Flatten to an RGB image; alpha is dropped after un-premultiplying.
    pub fn into_rgb_image(mut self) -> FlyerResult<image::RgbImage> {
        let (w, h) = (self.width(), self.height());
        let px = self.pixels();
        let mut rgb = Vec::with_capacity((w as usize) * (h as usize) * 3);
        for p in px.chunks_exact(4) {
            let a = u16::from(p[3]);
            if a == 255 || a == 0 {
                rgb.extend_from_slice(&p[..3]);
            } else {
                for &c in &p[..3] {
                    rgb.push(((u16::from(c) * 255 + a / 2) / a).min(255) as u8);
                }
            }
        }
        image::RgbImage::from_raw(w, h, rgb)
            .ok_or_else(|| FlyerError::validation("canvas buffer size mismatch"))
    }
}

/// Rasterize vector drawing into a standalone transparent layer.
///
/// `origin` is the canvas position of the layer's top-left pixel; `draw` receives a context whose
/// transform maps canvas coordinates into the layer.
pub(crate) fn raster_layer(
    width: u32,
    height: u32,
    origin: Point,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> FlyerResult<Layer> {
    let (w, h) = dims_u16(CanvasSize::new(width, height)?)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((-origin.x, -origin.y)));
    draw(&mut ctx);
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(Layer {
        width,
        height,
        data: pixmap.data_as_u8_slice().to_vec(),
    })
}

fn dims_u16(size: CanvasSize) -> FlyerResult<(u16, u16)> {
    let w: u16 = size
        .width
        .try_into()
        .map_err(|_| FlyerError::validation("canvas width exceeds u16"))?;
    let h: u16 = size
        .height
        .try_into()
        .map_err(|_| FlyerError::validation("canvas height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
