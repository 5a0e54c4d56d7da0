use crate::foundation::math::{mul_div255_u8, opacity_to_u8};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8, with an extra `opacity` applied to `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = u16::from(opacity_to_u8(opacity));
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// `over` applied pixel-wise across two premultiplied buffers of the same size.
pub fn blend_over(dst: &mut [u8], src: &[u8], opacity: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
}

/// Fill every pixel of a premultiplied buffer with `color` composited over it.
pub fn tint_in_place(dst: &mut [u8], color: PremulRgba8) {
    if color[3] == 0 {
        return;
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], color, 1.0);
        d.copy_from_slice(&out);
    }
}

/// A premultiplied RGBA8 buffer with dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Layer {
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Premultiply a straight-alpha image.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }
}

/// Composite `src` over the `dst_w x dst_h` buffer with its top-left at `(x, y)`, clipped.
pub fn composite_layer_at(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &Layer,
    x: i64,
    y: i64,
    opacity: f32,
) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(i64::from(dst_w));
    let y1 = (y + i64::from(src.height)).min(i64::from(dst_h));
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        for dx in x0..x1 {
            let sx = (dx - x) as usize;
            let si = (sy * src.width as usize + sx) * 4;
            let s = [
                src.data[si],
                src.data[si + 1],
                src.data[si + 2],
                src.data[si + 3],
            ];
            if s[3] == 0 {
                continue;
            }
            let di = (dy as usize * dst_w as usize + dx as usize) * 4;
            let out = over(
                [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]],
                s,
                opacity,
            );
            dst[di..di + 4].copy_from_slice(&out);
        }
    }
}

/// Copy the `w x h` region at `(x, y)` out of a `stride_w`-wide buffer.
pub fn copy_region(src: &[u8], stride_w: u32, x: u32, y: u32, w: u32, h: u32) -> Layer {
    let mut out = Layer::transparent(w, h);
    let row_bytes = w as usize * 4;
    for row in 0..h as usize {
        let si = ((y as usize + row) * stride_w as usize + x as usize) * 4;
        let di = row * row_bytes;
        out.data[di..di + row_bytes].copy_from_slice(&src[si..si + row_bytes]);
    }
    out
}

/// Overwrite the region at `(x, y)` with `layer` (no blending).
pub fn write_region(dst: &mut [u8], stride_w: u32, x: u32, y: u32, layer: &Layer) {
    let row_bytes = layer.width as usize * 4;
    for row in 0..layer.height as usize {
        let di = ((y as usize + row) * stride_w as usize + x as usize) * 4;
        let si = row * row_bytes;
        dst[di..di + row_bytes].copy_from_slice(&layer.data[si..si + row_bytes]);
    }
}

pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
