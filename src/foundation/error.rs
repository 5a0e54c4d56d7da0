use std::path::{Path, PathBuf};

/// Crate-wide result alias.
pub type FlyerResult<T> = Result<T, FlyerError>;

/// Errors surfaced by the flyer engine.
///
/// Only [`FlyerError::Encoding`] and [`FlyerError::Validation`] are fatal for a render; the other
/// variants are recovered locally by the layer that observes them (color fallback, skipped asset,
/// default template).
#[derive(thiserror::Error, Debug)]
pub enum FlyerError {
    /// Malformed hex color string.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Referenced image, logo, background or font file is missing or unreadable.
    #[error("asset not found: {}", path.display())]
    AssetNotFound {
        /// Path that failed to load.
        path: PathBuf,
    },

    /// Template identifier outside the closed template set.
    #[error("unsupported template: {0}")]
    UnsupportedTemplate(String),

    /// Output serialization failure.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Caller contract violation (bad canvas size, malformed parameters).
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlyerError {
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColorFormat(msg.into())
    }

    pub fn asset_not_found(path: impl AsRef<Path>) -> Self {
        Self::AssetNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn unsupported_template(id: impl Into<String>) -> Self {
        Self::UnsupportedTemplate(id.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return `true` for errors a render recovers from by degrading output.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidColorFormat(_) | Self::AssetNotFound { .. } | Self::UnsupportedTemplate(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
