//! Error types for CIFTI container operations.

use thiserror::Error;

/// Result type for CIFTI operations.
pub type CiftiResult<T> = Result<T, CiftiError>;

/// Errors that can occur during CIFTI container round-trips.
#[derive(Debug, Error)]
pub enum CiftiError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or corrupted container file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// XML error in the embedded CIFTI extension.
    #[error("XML error: {0}")]
    Xml(String),

    /// Payload element count does not match the template.
    #[error("dimension mismatch: template holds {expected} elements, got {got}")]
    DimensionMismatch {
        /// Element count of the template payload.
        expected: usize,
        /// Element count supplied by the caller.
        got: usize,
    },

    /// Label-table entry count does not match the supplied colors.
    ///
    /// `labels` excludes the reserved background entry.
    #[error("label table has {labels} colorable entries, got {colors} colors")]
    LabelTableMismatch {
        /// Colorable label entries (background excluded).
        labels: usize,
        /// Colors supplied by the caller.
        colors: usize,
    },

    /// The file carries no CIFTI XML extension to patch.
    #[error("no CIFTI extension found in file")]
    MissingExtension,

    /// Payload data type this crate does not decode.
    #[error("unsupported NIfTI datatype code: {0}")]
    UnsupportedDataType(i16),
}
