//! Template file locations.
//!
//! The dlabel/dscalar templates ship alongside the installation rather
//! than inside the binary. Their directory is resolved from the
//! `WBPLOT_DATA` environment variable, falling back to a `data`
//! directory under the current working directory.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the template/data directory.
pub const DATA_DIR_ENV: &str = "WBPLOT_DATA";

/// File name of the parcellated (dlabel) template: the HCP MMP1.0
/// group-average parcellation in 32k_fs_LR space.
pub const DLABEL_TEMPLATE: &str = "glasser360.32k_fs_LR.dlabel.nii";

/// File name of the dense (dscalar) template: a 91282-grayordinate
/// scalar map in 32k_fs_LR space.
pub const DSCALAR_TEMPLATE: &str = "dense.32k_fs_LR.dscalar.nii";

/// Resolves the data directory.
pub fn data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Absolute or relative path to the dlabel template.
pub fn dlabel_file() -> PathBuf {
    data_dir().join(DLABEL_TEMPLATE)
}

/// Absolute or relative path to the dscalar template.
pub fn dscalar_file() -> PathBuf {
    data_dir().join(DSCALAR_TEMPLATE)
}
