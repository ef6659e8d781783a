//! # wbplot-cmap
//!
//! Colormaps and scalar-to-RGBA mapping.
//!
//! This crate turns scalar vectors into per-element RGBA colors for
//! embedding in CIFTI label tables:
//!
//! - [`Colormap`] - Named piecewise-linear colormaps with case-insensitive
//!   lookup
//! - [`Normalize`] - Linear normalization of a value range into `[0, 1]`
//! - [`ScalarMapper`] - The normalize-then-lookup pipeline with the
//!   masked-zero override
//! - [`map_with`] - Custom color functions that bypass the pipeline
//!
//! # Quick Start
//!
//! ```rust
//! use wbplot_cmap::{Colormap, ScalarMapper};
//!
//! let mapper = ScalarMapper::new(Colormap::Magma);
//! let colors = mapper.map(&[0.3, 0.7, 1.0]).unwrap();
//! assert_eq!(colors.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod mapper;
pub mod norm;
pub mod scheme;

pub use error::{CmapError, CmapResult};
pub use mapper::{map_with, masked_grey, ScalarMapper};
pub use norm::Normalize;
pub use scheme::Colormap;
