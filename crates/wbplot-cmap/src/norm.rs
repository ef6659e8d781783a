//! Linear normalization of scalar values into `[0, 1]`.

use crate::error::{CmapError, CmapResult};

/// A linear normalizer mapping `[vmin, vmax]` onto `[0, 1]`.
///
/// Values outside the range are clamped. A degenerate range
/// (`vmax <= vmin`, possible when a vector is constant and the range is
/// derived from the data) maps everything to 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    /// Range minimum.
    pub vmin: f64,
    /// Range maximum.
    pub vmax: f64,
}

impl Normalize {
    /// Creates a normalizer over an explicit range.
    ///
    /// # Errors
    ///
    /// Returns [`CmapError::InvalidRange`] if `vmin >= vmax` or either
    /// bound is not finite.
    pub fn new(vmin: f64, vmax: f64) -> CmapResult<Self> {
        if !vmin.is_finite() || !vmax.is_finite() || vmin >= vmax {
            return Err(CmapError::InvalidRange {
                min: vmin,
                max: vmax,
            });
        }
        Ok(Self { vmin, vmax })
    }

    /// Creates a normalizer spanning the min/max of the data.
    ///
    /// # Errors
    ///
    /// Returns [`CmapError::EmptyInput`] for an empty slice.
    pub fn from_data(data: &[f64]) -> CmapResult<Self> {
        if data.is_empty() {
            return Err(CmapError::EmptyInput);
        }
        let vmin = data.iter().copied().fold(f64::INFINITY, f64::min);
        let vmax = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self { vmin, vmax })
    }

    /// Normalizes a value into `[0, 1]`, clamping out-of-range input.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.vmin) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn maps_range_linearly() {
        let norm = Normalize::new(-1.0, 1.0).unwrap();
        assert_relative_eq!(norm.apply(-1.0), 0.0);
        assert_relative_eq!(norm.apply(0.0), 0.5);
        assert_relative_eq!(norm.apply(1.0), 1.0);
    }

    #[test]
    fn clamps_outside_range() {
        let norm = Normalize::new(0.0, 10.0).unwrap();
        assert_eq!(norm.apply(-5.0), 0.0);
        assert_eq!(norm.apply(25.0), 1.0);
    }

    #[test]
    fn rejects_inverted_or_empty_range() {
        assert!(Normalize::new(1.0, 1.0).is_err());
        assert!(Normalize::new(2.0, -2.0).is_err());
        assert!(Normalize::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn from_data_uses_min_max() {
        let norm = Normalize::from_data(&[3.0, -2.0, 7.0, 0.0]).unwrap();
        assert_eq!(norm.vmin, -2.0);
        assert_eq!(norm.vmax, 7.0);
        assert!(Normalize::from_data(&[]).is_err());
    }

    #[test]
    fn constant_data_maps_to_midpoint() {
        let norm = Normalize::from_data(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(norm.apply(4.0), 0.5);
    }
}
