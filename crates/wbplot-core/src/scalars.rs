//! Scalar-vector kinds and length validation.
//!
//! Three fixed-length vector kinds exist in the HCP MMP1.0 / grayordinate
//! space this crate targets:
//!
//! | Kind | Length | One value per |
//! |------|--------|---------------|
//! | Unilateral parcellated | 180 | cortical parcel, one hemisphere |
//! | Bilateral parcellated | 360 | cortical parcel, both hemispheres |
//! | Dense | 91282 | grayordinate (vertex/voxel), whole brain |
//!
//! Length is an invariant, not a convention: a vector of any other length
//! cannot be aligned with the template files and is rejected outright.

use crate::error::{Error, Result};

/// Parcels per hemisphere in the HCP MMP1.0 parcellation.
pub const UNILATERAL_PARCELS: usize = 180;

/// Parcels across both hemispheres (180 left + 180 right).
pub const BILATERAL_PARCELS: usize = 360;

/// Grayordinates (surface vertices + subcortical voxels) in the standard
/// 32k_fs_LR dense space.
pub const DENSE_GRAYORDINATES: usize = 91282;

/// Validates a unilateral parcellated scalar vector.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] unless `pscalars` has exactly
/// [`UNILATERAL_PARCELS`] elements.
pub fn check_pscalars_unilateral(pscalars: &[f64]) -> Result<()> {
    if pscalars.len() != UNILATERAL_PARCELS {
        return Err(Error::length_mismatch(
            "unilateral parcellated",
            UNILATERAL_PARCELS,
            pscalars.len(),
        ));
    }
    Ok(())
}

/// Validates a bilateral parcellated scalar vector.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] unless `pscalars` has exactly
/// [`BILATERAL_PARCELS`] elements.
pub fn check_pscalars_bilateral(pscalars: &[f64]) -> Result<()> {
    if pscalars.len() != BILATERAL_PARCELS {
        return Err(Error::length_mismatch(
            "bilateral parcellated",
            BILATERAL_PARCELS,
            pscalars.len(),
        ));
    }
    Ok(())
}

/// Validates a dense scalar vector.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] unless `dscalars` has exactly
/// [`DENSE_GRAYORDINATES`] elements.
pub fn check_dscalars(dscalars: &[f64]) -> Result<()> {
    if dscalars.len() != DENSE_GRAYORDINATES {
        return Err(Error::length_mismatch(
            "dense",
            DENSE_GRAYORDINATES,
            dscalars.len(),
        ));
    }
    Ok(())
}
