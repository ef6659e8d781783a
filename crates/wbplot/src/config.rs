//! Package-wide defaults and argument validation.

use wbplot_cmap::{CmapResult, Colormap, Normalize};

/// The colormap used when the caller does not name one.
pub const DEFAULT_CMAP: Colormap = Colormap::Magma;

/// Resolves an optional colormap name to a colormap.
///
/// `None` yields [`DEFAULT_CMAP`]; names are matched case-insensitively.
///
/// # Errors
///
/// Returns [`CmapError::UnknownColormap`](wbplot_cmap::CmapError::UnknownColormap)
/// for unrecognized names.
pub fn check_cmap(cmap: Option<&str>) -> CmapResult<Colormap> {
    match cmap {
        None => Ok(DEFAULT_CMAP),
        Some(name) => Colormap::from_name(name),
    }
}

/// Validates an optional explicit `(vmin, vmax)` range.
///
/// `None` means "derive the range from the data" and passes through.
///
/// # Errors
///
/// Returns [`CmapError::InvalidRange`](wbplot_cmap::CmapError::InvalidRange)
/// if the range is empty, inverted, or non-finite.
pub fn check_vrange(vrange: Option<(f64, f64)>) -> CmapResult<Option<(f64, f64)>> {
    if let Some((vmin, vmax)) = vrange {
        let _ = Normalize::new(vmin, vmax)?;
    }
    Ok(vrange)
}
