//! Error types for scalar-vector and hemisphere validation.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating scalar input.
///
/// All validation failures are hard errors: a vector of the wrong
/// length or an unrecognized hemisphere tag can never be written to
/// a CIFTI file, so there is no recovery path.
#[derive(Debug, Error)]
pub enum Error {
    /// Scalar vector length does not match the expected size for its kind.
    #[error("{kind} scalars must have length {expected}, got {got}")]
    LengthMismatch {
        /// Vector kind ("unilateral parcellated", "bilateral parcellated", "dense").
        kind: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        got: usize,
    },

    /// Hemisphere tag is not in the recognized set.
    #[error("'{0}' is not a valid hemisphere")]
    InvalidHemisphere(String),
}

impl Error {
    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(kind: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch {
            kind,
            expected,
            got,
        }
    }
}
