//! # wbplot-core
//!
//! Core types for CIFTI scalar visualization.
//!
//! This crate provides the foundational types used throughout the wbplot
//! workspace:
//!
//! - [`Hemisphere`] - Hemisphere tags with tolerant parsing and
//!   unilateral-to-bilateral zero padding
//! - [`Rgba`] - Normalized RGBA color
//! - [`scalars`] - Fixed vector lengths and hard length validation
//! - [`Error`], [`Result`] - Validation error types
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! wbplot-core (this crate)
//!    ^
//!    |
//!    +-- wbplot-cmap (colormaps, scalar-to-color mapping)
//!    +-- wbplot-cifti (CIFTI container round-trip)
//!    +-- wbplot (public API)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hemisphere;
pub mod rgba;
pub mod scalars;

pub use error::{Error, Result};
pub use hemisphere::{map_unilateral_to_bilateral, Hemisphere};
pub use rgba::Rgba;
pub use scalars::{
    check_dscalars, check_pscalars_bilateral, check_pscalars_unilateral, BILATERAL_PARCELS,
    DENSE_GRAYORDINATES, UNILATERAL_PARCELS,
};
