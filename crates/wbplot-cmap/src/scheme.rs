//! Named colormaps.
//!
//! Each colormap is a piecewise-linear ramp over a small set of control
//! points, sampled at a normalized position in `[0, 1]`. The palettes
//! match the matplotlib colormaps of the same names closely enough for
//! visualization purposes; reproducing their exact 256-entry tables is
//! out of scope.

use crate::error::{CmapError, CmapResult};
use wbplot_core::Rgba;

/// A named colormap.
///
/// # Example
///
/// ```rust
/// use wbplot_cmap::Colormap;
///
/// let cmap = Colormap::from_name("viridis").unwrap();
/// let low = cmap.sample(0.0);
/// let high = cmap.sample(1.0);
/// assert_ne!(low, high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Perceptually uniform, black to light yellow. The package default.
    #[default]
    Magma,
    /// Perceptually uniform, purple to yellow.
    Viridis,
    /// Perceptually uniform, blue to yellow through magenta.
    Plasma,
    /// Perceptually uniform, black to light yellow through red.
    Inferno,
    /// Improved rainbow, blue to dark red.
    Turbo,
    /// Diverging, cool blue to warm red.
    Coolwarm,
    /// Diverging, purple to dark red through yellow.
    Spectral,
    /// Sequential grey ramp, white to black. Used for masked values.
    Greys,
}

impl Colormap {
    /// All available colormaps.
    pub fn all() -> &'static [Colormap] {
        &[
            Colormap::Magma,
            Colormap::Viridis,
            Colormap::Plasma,
            Colormap::Inferno,
            Colormap::Turbo,
            Colormap::Coolwarm,
            Colormap::Spectral,
            Colormap::Greys,
        ]
    }

    /// Looks up a colormap by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CmapError::UnknownColormap`] for unrecognized names.
    pub fn from_name(name: &str) -> CmapResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "magma" => Ok(Colormap::Magma),
            "viridis" => Ok(Colormap::Viridis),
            "plasma" => Ok(Colormap::Plasma),
            "inferno" => Ok(Colormap::Inferno),
            "turbo" => Ok(Colormap::Turbo),
            "coolwarm" => Ok(Colormap::Coolwarm),
            "spectral" => Ok(Colormap::Spectral),
            "greys" | "grays" => Ok(Colormap::Greys),
            _ => Err(CmapError::UnknownColormap(name.to_string())),
        }
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Magma => "magma",
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Turbo => "turbo",
            Colormap::Coolwarm => "coolwarm",
            Colormap::Spectral => "spectral",
            Colormap::Greys => "greys",
        }
    }

    /// Samples the colormap at a normalized position.
    ///
    /// `t` is clamped to `[0, 1]`. The returned color is always opaque.
    pub fn sample(&self, t: f64) -> Rgba {
        let (colors, positions): (&[[u8; 3]], &[f64]) = match self {
            Colormap::Magma => (&MAGMA, &EIGHTHS),
            Colormap::Viridis => (&VIRIDIS, &EIGHTHS),
            Colormap::Plasma => (&PLASMA, &EIGHTHS),
            Colormap::Inferno => (&INFERNO, &EIGHTHS),
            Colormap::Turbo => (&TURBO, &TENTHS),
            Colormap::Coolwarm => (&COOLWARM, &EIGHTHS),
            Colormap::Spectral => (&SPECTRAL, &TENTHS),
            Colormap::Greys => (&GREYS, &EIGHTHS),
        };
        lerp_control_points(colors, positions, t.clamp(0.0, 1.0))
    }
}

/// Interpolates between control points at the given positions.
fn lerp_control_points(colors: &[[u8; 3]], positions: &[f64], t: f64) -> Rgba {
    debug_assert_eq!(colors.len(), positions.len());
    for i in 0..positions.len() - 1 {
        if t >= positions[i] && t <= positions[i + 1] {
            let span = positions[i + 1] - positions[i];
            let local = if span > 0.0 { (t - positions[i]) / span } else { 0.0 };
            return to_rgba(colors[i]).lerp(to_rgba(colors[i + 1]), local);
        }
    }
    to_rgba(colors[colors.len() - 1])
}

#[inline]
fn to_rgba(c: [u8; 3]) -> Rgba {
    Rgba::opaque(
        c[0] as f64 / 255.0,
        c[1] as f64 / 255.0,
        c[2] as f64 / 255.0,
    )
}

const EIGHTHS: [f64; 9] = [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0];
const TENTHS: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 35, 116],
    [64, 67, 135],
    [52, 94, 141],
    [41, 120, 142],
    [32, 146, 140],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135],
    [75, 3, 161],
    [126, 3, 168],
    [168, 34, 150],
    [204, 71, 120],
    [232, 107, 84],
    [248, 149, 64],
    [252, 194, 36],
    [240, 249, 33],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 16, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const TURBO: [[u8; 3]; 11] = [
    [48, 18, 59],
    [70, 68, 172],
    [62, 137, 236],
    [30, 192, 208],
    [53, 224, 138],
    [147, 244, 78],
    [213, 226, 45],
    [254, 188, 43],
    [253, 121, 36],
    [215, 48, 31],
    [122, 4, 3],
];

const COOLWARM: [[u8; 3]; 9] = [
    [59, 76, 192],
    [98, 130, 234],
    [141, 176, 254],
    [184, 208, 249],
    [247, 247, 247],
    [253, 199, 178],
    [244, 143, 117],
    [216, 82, 82],
    [180, 4, 38],
];

const SPECTRAL: [[u8; 3]; 11] = [
    [94, 79, 162],
    [50, 136, 189],
    [102, 194, 165],
    [171, 221, 164],
    [230, 245, 152],
    [255, 255, 191],
    [254, 224, 139],
    [253, 174, 97],
    [244, 109, 67],
    [213, 62, 79],
    [158, 1, 66],
];

const GREYS: [[u8; 3]; 9] = [
    [255, 255, 255],
    [240, 240, 240],
    [217, 217, 217],
    [189, 189, 189],
    [150, 150, 150],
    [115, 115, 115],
    [82, 82, 82],
    [37, 37, 37],
    [0, 0, 0],
];
