//! Colormap error types.

use thiserror::Error;

/// Result type for colormap operations.
pub type CmapResult<T> = Result<T, CmapError>;

/// Errors that can occur during color mapping.
#[derive(Debug, Error)]
pub enum CmapError {
    /// Colormap name is not recognized.
    #[error("unknown colormap: '{0}'")]
    UnknownColormap(String),

    /// Explicit value range is empty or inverted.
    #[error("invalid vrange: [{min}, {max}] (min must be < max)")]
    InvalidRange {
        /// Range minimum.
        min: f64,
        /// Range maximum.
        max: f64,
    },

    /// No data to derive a default range from.
    #[error("cannot map an empty scalar vector")]
    EmptyInput,
}
