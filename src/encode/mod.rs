//! Output encoders.

/// PNG encoding of finished rasters.
pub mod png;
