//! # wbplot-cifti
//!
//! Template-driven CIFTI container round-trips.
//!
//! CIFTI files (`.dlabel.nii`, `.dscalar.nii`) are NIfTI-2 binary
//! containers with the CIFTI structure carried as an XML header
//! extension. This crate implements exactly the round-trip the wbplot
//! pipeline needs:
//!
//! - [`CiftiImage`] - Load a template, patch its label-table colors,
//!   overwrite its payload, save a new file
//! - [`nifti2`] - The scoped NIfTI-2 header/extension/payload codec
//! - [`label_table`] - Streaming XML color patching
//!
//! It is not a general-purpose neuroimaging library: headers pass
//! through as raw bytes, only float payloads are decoded, and the CIFTI
//! XML is never fully parsed, just patched.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wbplot_cifti::CiftiImage;
//!
//! let mut img = CiftiImage::open("template.dscalar.nii")?;
//! let zeros = vec![0.0; img.data().len()];
//! img.set_data(&zeros)?;
//! img.save("blank.dscalar.nii")?;
//! # Ok::<(), wbplot_cifti::CiftiError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod image;
pub mod label_table;
pub mod nifti2;

pub use error::{CiftiError, CiftiResult};
pub use image::CiftiImage;
pub use nifti2::{DataType, Extension, Nifti2Header, ECODE_CIFTI};
