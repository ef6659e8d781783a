//! # wbplot
//!
//! Write scalar brain maps into colorized CIFTI files for viewing in
//! Connectome Workbench.
//!
//! The pipeline is deliberately thin: validate the scalar vector, map it
//! to RGBA colors, patch the color metadata inside a CIFTI template, and
//! save a new file. Workbench does the actual rendering.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wbplot::write_parcellated_image;
//!
//! // One value per parcel in the left hemisphere.
//! let pscalars: Vec<f64> = (0..180).map(|i| i as f64 / 180.0).collect();
//! write_parcellated_image(
//!     &pscalars,
//!     "my_map.dlabel.nii",
//!     Some("left"),   // right hemisphere is zero-padded
//!     None,           // vrange from the data
//!     Some("viridis"),
//! )?;
//! # Ok::<(), wbplot::WbplotError>(())
//! ```
//!
//! Dense (per-grayordinate) maps work the same way:
//!
//! ```rust,no_run
//! use wbplot::write_dense_image;
//!
//! let dscalars = vec![1.0; 91282];
//! let written = write_dense_image(&dscalars, "my_dense_map", None)?;
//! println!("wrote {}", written.display());
//! # Ok::<(), wbplot::WbplotError>(())
//! ```
//!
//! # Templates
//!
//! Both operations start from a template CIFTI file whose location is
//! resolved by [`constants`] (override with the `WBPLOT_DATA`
//! environment variable). The `_with_template` variants take an explicit
//! path instead.
//!
//! # Crate Structure
//!
//! ```text
//! wbplot (this crate: API, config, template paths)
//!    |
//!    +-- wbplot-cmap (colormaps, scalar-to-RGBA mapping)
//!    +-- wbplot-cifti (CIFTI container round-trip)
//!    +-- wbplot-core (vector kinds, hemispheres, validation)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod constants;
mod error;
mod images;

pub use error::{Result, WbplotError};
pub use images::{
    write_dense_image, write_dense_image_with_template, write_parcellated_image,
    write_parcellated_image_mapped, write_parcellated_image_with_template,
};

// Re-exported building blocks for callers composing their own pipelines.
pub use wbplot_cifti::CiftiImage;
pub use wbplot_cmap::{map_with, masked_grey, Colormap, Normalize, ScalarMapper};
pub use wbplot_core::{
    check_dscalars, check_pscalars_bilateral, check_pscalars_unilateral,
    map_unilateral_to_bilateral, Hemisphere, Rgba, BILATERAL_PARCELS, DENSE_GRAYORDINATES,
    UNILATERAL_PARCELS,
};
