//! Scalar-to-RGBA mapping with the masked-zero override.

use crate::error::CmapResult;
use crate::norm::Normalize;
use crate::scheme::Colormap;
use wbplot_core::Rgba;

/// The grey assigned to masked values: the Greys ramp sampled at 0.2.
///
/// Zeros conventionally mean "no data" in parcellated and dense scalar
/// vectors, and are rendered as a fixed light grey so they read as
/// background rather than as a low data value.
pub fn masked_grey() -> Rgba {
    Colormap::Greys.sample(0.2)
}

/// Maps scalar vectors to RGBA colors.
///
/// The general path is linear normalization into `[0, 1]` followed by a
/// colormap lookup. After mapping, every value exactly equal to `0.0` is
/// overridden with [`masked_grey`] regardless of where zero falls in the
/// range. The override is deliberate masking semantics, not a numeric
/// artifact, so it also applies to custom mapping functions.
///
/// # Example
///
/// ```rust
/// use wbplot_cmap::{Colormap, ScalarMapper};
///
/// let mapper = ScalarMapper::new(Colormap::Viridis).with_vrange(-1.0, 1.0).unwrap();
/// let colors = mapper.map(&[-1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(colors.len(), 3);
/// assert_eq!(colors[1], wbplot_cmap::masked_grey()); // zero is masked
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarMapper {
    cmap: Colormap,
    vrange: Option<(f64, f64)>,
}

impl ScalarMapper {
    /// Creates a mapper with the given colormap and a data-derived range.
    pub fn new(cmap: Colormap) -> Self {
        Self { cmap, vrange: None }
    }

    /// Sets an explicit `(vmin, vmax)` range.
    ///
    /// # Errors
    ///
    /// Returns [`CmapError::InvalidRange`](crate::CmapError::InvalidRange)
    /// if the range is empty or inverted.
    pub fn with_vrange(mut self, vmin: f64, vmax: f64) -> CmapResult<Self> {
        // Validate eagerly so a bad range fails at construction.
        let _ = Normalize::new(vmin, vmax)?;
        self.vrange = Some((vmin, vmax));
        Ok(self)
    }

    /// Returns the colormap in use.
    pub fn colormap(&self) -> Colormap {
        self.cmap
    }

    /// Maps a scalar slice to one RGBA color per element.
    ///
    /// Without an explicit range the slice's own min/max is used.
    ///
    /// # Errors
    ///
    /// Returns [`CmapError::EmptyInput`](crate::CmapError::EmptyInput)
    /// for an empty slice when the range must be derived from the data.
    pub fn map(&self, data: &[f64]) -> CmapResult<Vec<Rgba>> {
        let norm = match self.vrange {
            Some((vmin, vmax)) => Normalize::new(vmin, vmax)?,
            None => Normalize::from_data(data)?,
        };
        let colors = data
            .iter()
            .map(|&v| self.cmap.sample(norm.apply(v)))
            .collect();
        Ok(apply_mask(data, colors))
    }
}

/// Maps scalars through a caller-supplied color function.
///
/// Bypasses the normalize+colormap path entirely; the masked-zero
/// override is still applied afterwards.
pub fn map_with<F>(data: &[f64], mappable: F) -> Vec<Rgba>
where
    F: Fn(f64) -> Rgba,
{
    let colors = data.iter().map(|&v| mappable(v)).collect();
    apply_mask(data, colors)
}

/// Forces colors of exactly-zero scalars to the fixed masked grey.
fn apply_mask(data: &[f64], mut colors: Vec<Rgba>) -> Vec<Rgba> {
    let grey = masked_grey();
    for (value, color) in data.iter().zip(colors.iter_mut()) {
        if *value == 0.0 {
            *color = grey;
        }
    }
    colors
}
