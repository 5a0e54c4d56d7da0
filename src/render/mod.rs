//! Raster target and the end-to-end flyer pipeline.

/// Premultiplied RGBA8 canvas with batched vector drawing.
pub mod canvas;
/// Config-to-pixels pipeline.
pub mod flyer;
