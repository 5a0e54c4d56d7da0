/// Largest raster edge produced for an SVG asset.
const MAX_DIM: u32 = 8_192;

/// Raster size for `tree`, upscaled uniformly until the longer edge reaches `min_long_edge`.
pub fn svg_raster_size(tree: &usvg::Tree, min_long_edge: u32) -> anyhow::Result<(u32, u32)> {
    let size = tree.size();
    let (w, h) = (size.width(), size.height());
    if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        anyhow::bail!("svg has invalid width/height");
    }

    let long = w.max(h);
    let scale = ((min_long_edge as f32) / long).max(1.0);
    let out_w = ((w * scale).ceil() as u32).clamp(1, MAX_DIM);
    let out_h = ((h * scale).ceil() as u32).clamp(1, MAX_DIM);
    Ok((out_w, out_h))
}

/// Render `tree` stretched to `width x height`, returning premultiplied RGBA8.
pub fn rasterize_svg_to_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> anyhow::Result<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("failed to allocate svg pixmap {width}x{height}"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}
