//! Unified error type for the public API.

use thiserror::Error;

/// Result type for top-level wbplot operations.
pub type Result<T> = std::result::Result<T, WbplotError>;

/// Any failure the image-writing pipeline can produce.
///
/// Wraps the per-layer errors; every variant is fatal and unrecovered.
#[derive(Debug, Error)]
pub enum WbplotError {
    /// Scalar-vector or hemisphere validation failure.
    #[error(transparent)]
    Validation(#[from] wbplot_core::Error),

    /// Colormap lookup or range failure.
    #[error(transparent)]
    Cmap(#[from] wbplot_cmap::CmapError),

    /// Container I/O or metadata failure.
    #[error(transparent)]
    Cifti(#[from] wbplot_cifti::CiftiError),
}
