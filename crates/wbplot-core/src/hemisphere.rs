//! Hemisphere tags and unilateral-to-bilateral padding.
//!
//! Parcellated data frequently arrives for a single hemisphere, while the
//! dlabel template stores both. [`map_unilateral_to_bilateral`] zero-pads
//! the hemisphere that was not supplied; zeros render as "no data" grey
//! downstream.

use crate::error::{Error, Result};
use crate::scalars::{BILATERAL_PARCELS, UNILATERAL_PARCELS};

/// A cortical hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Left hemisphere (parcel indices `[0, 180)` in bilateral order).
    Left,
    /// Right hemisphere (parcel indices `[180, 360)` in bilateral order).
    Right,
}

impl Hemisphere {
    /// Parses a hemisphere tag, tolerating common spelling variants.
    ///
    /// Recognized tags:
    ///
    /// - `"left"`, `"l"`, `"L"` → `Some(Left)`
    /// - `"right"`, `"r"`, `"R"` → `Some(Right)`
    /// - `None`, `"lr"`, `"LR"` → `None` (data is already bilateral)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHemisphere`] for any other string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wbplot_core::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::parse(Some("L")).unwrap(), Some(Hemisphere::Left));
    /// assert_eq!(Hemisphere::parse(Some("right")).unwrap(), Some(Hemisphere::Right));
    /// assert_eq!(Hemisphere::parse(None).unwrap(), None);
    /// assert!(Hemisphere::parse(Some("up")).is_err());
    /// ```
    pub fn parse(tag: Option<&str>) -> Result<Option<Self>> {
        match tag {
            None => Ok(None),
            Some("left") | Some("l") | Some("L") => Ok(Some(Hemisphere::Left)),
            Some("right") | Some("r") | Some("R") => Ok(Some(Hemisphere::Right)),
            Some("lr") | Some("LR") => Ok(None),
            Some(other) => Err(Error::InvalidHemisphere(other.to_string())),
        }
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Hemisphere::Left => "left",
            Hemisphere::Right => "right",
        }
    }
}

/// Pads a unilateral parcellated vector to bilateral order.
///
/// The contralateral hemisphere is filled with zeros. With
/// `hemisphere == None` the input is treated as already bilateral and
/// returned unchanged (the caller is responsible for its length).
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if a hemisphere is given and
/// `pscalars` is not exactly 180 elements long.
///
/// # Example
///
/// ```rust
/// use wbplot_core::{map_unilateral_to_bilateral, Hemisphere};
///
/// let left = vec![1.0; 180];
/// let lr = map_unilateral_to_bilateral(&left, Some(Hemisphere::Left)).unwrap();
/// assert_eq!(lr.len(), 360);
/// assert_eq!(lr[0], 1.0);
/// assert_eq!(lr[180], 0.0);
/// ```
pub fn map_unilateral_to_bilateral(
    pscalars: &[f64],
    hemisphere: Option<Hemisphere>,
) -> Result<Vec<f64>> {
    let Some(hemisphere) = hemisphere else {
        return Ok(pscalars.to_vec());
    };
    crate::scalars::check_pscalars_unilateral(pscalars)?;

    let mut bilateral = vec![0.0; BILATERAL_PARCELS];
    let range = match hemisphere {
        Hemisphere::Left => 0..UNILATERAL_PARCELS,
        Hemisphere::Right => UNILATERAL_PARCELS..BILATERAL_PARCELS,
    };
    bilateral[range].copy_from_slice(pscalars);
    Ok(bilateral)
}
