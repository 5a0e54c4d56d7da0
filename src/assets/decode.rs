use std::path::Path;

use anyhow::Context;

use crate::assets::svg_raster::{rasterize_svg_to_rgba8, svg_raster_size};
use crate::foundation::error::{FlyerError, FlyerResult};

/// SVGs are rasterized so that their longer edge is at least this many pixels.
const SVG_MIN_LONG_EDGE: u32 = 1024;

/// Load a raster (PNG/JPEG/GIF/...) or SVG image from disk as straight-alpha RGBA8.
///
/// A missing file is reported as [`FlyerError::AssetNotFound`]; callers skip the visual element.
pub fn load_image(path: impl AsRef<Path>) -> FlyerResult<image::RgbaImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(FlyerError::asset_not_found(path));
    }
    let bytes = std::fs::read(path).map_err(|_| FlyerError::asset_not_found(path))?;

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        return decode_svg(&bytes)
            .with_context(|| format!("decode svg '{}'", path.display()))
            .map_err(FlyerError::from);
    }

    decode_image(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))
        .map_err(FlyerError::from)
}

/// Decode encoded raster bytes into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> anyhow::Result<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Parse and rasterize SVG bytes into straight-alpha RGBA8.
pub fn decode_svg(bytes: &[u8]) -> anyhow::Result<image::RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let (w, h) = svg_raster_size(&tree, SVG_MIN_LONG_EDGE)?;
    let mut rgba = rasterize_svg_to_rgba8(&tree, w, h)?;
    unpremultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(w, h, rgba).context("svg raster buffer size mismatch")
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
