//! Top-level image-writing operations.
//!
//! These are the two operations the package exists for: inserting
//! parcellated scalars into a recolored dlabel file, and inserting dense
//! scalars into a dscalar file. Both start from a template file and
//! write a new file; the template is never modified.

use crate::config;
use crate::constants;
use crate::error::Result;
use std::path::{Path, PathBuf};
use wbplot_cifti::CiftiImage;
use wbplot_cmap::{map_with, ScalarMapper};
use wbplot_core::{
    check_dscalars, check_pscalars_bilateral, check_pscalars_unilateral,
    map_unilateral_to_bilateral, Hemisphere, Rgba,
};

/// Extension required on dense output files.
const DSCALAR_EXT: &str = ".dscalar.nii";

/// Inserts parcellated scalars into a recolored dlabel file.
///
/// Uses the configured dlabel template (see [`crate::constants`]).
///
/// # Arguments
///
/// * `pscalars` - Parcellated scalars; length 180 with a hemisphere tag,
///   length 360 without one
/// * `fout` - Output file path
/// * `hemisphere` - Hemisphere tag (`"left"`/`"l"`/`"L"`,
///   `"right"`/`"r"`/`"R"`, or `None`/`"lr"`/`"LR"` for bilateral data)
/// * `vrange` - Explicit `(min, max)` range; `None` uses the data range
/// * `cmap` - Colormap name; `None` uses the package default
///
/// # Errors
///
/// Any validation, mapping, or I/O failure is fatal and returned as-is.
pub fn write_parcellated_image<P: AsRef<Path>>(
    pscalars: &[f64],
    fout: P,
    hemisphere: Option<&str>,
    vrange: Option<(f64, f64)>,
    cmap: Option<&str>,
) -> Result<()> {
    write_parcellated_image_with_template(
        constants::dlabel_file(),
        pscalars,
        fout,
        hemisphere,
        vrange,
        cmap,
    )
}

/// [`write_parcellated_image`] with an explicit template path.
pub fn write_parcellated_image_with_template<T: AsRef<Path>, P: AsRef<Path>>(
    template: T,
    pscalars: &[f64],
    fout: P,
    hemisphere: Option<&str>,
    vrange: Option<(f64, f64)>,
    cmap: Option<&str>,
) -> Result<()> {
    let hemisphere = Hemisphere::parse(hemisphere)?;
    match hemisphere {
        Some(_) => check_pscalars_unilateral(pscalars)?,
        None => check_pscalars_bilateral(pscalars)?,
    }
    let pscalars_lr = map_unilateral_to_bilateral(pscalars, hemisphere)?;

    let cmap = config::check_cmap(cmap)?;
    let vrange = config::check_vrange(vrange)?;
    let mut mapper = ScalarMapper::new(cmap);
    if let Some((vmin, vmax)) = vrange {
        mapper = mapper.with_vrange(vmin, vmax)?;
    }
    let colors = mapper.map(&pscalars_lr)?;

    let mut img = CiftiImage::open(template)?;
    img.set_colors(&colors)?;
    img.save(fout)?;
    Ok(())
}

/// Inserts parcellated scalars using a caller-supplied color function.
///
/// The function replaces the normalize+colormap path entirely; the
/// masked-zero grey override still applies afterwards.
pub fn write_parcellated_image_mapped<T, P, F>(
    template: T,
    pscalars: &[f64],
    fout: P,
    hemisphere: Option<&str>,
    mappable: F,
) -> Result<()>
where
    T: AsRef<Path>,
    P: AsRef<Path>,
    F: Fn(f64) -> Rgba,
{
    let hemisphere = Hemisphere::parse(hemisphere)?;
    match hemisphere {
        Some(_) => check_pscalars_unilateral(pscalars)?,
        None => check_pscalars_bilateral(pscalars)?,
    }
    let pscalars_lr = map_unilateral_to_bilateral(pscalars, hemisphere)?;
    let colors = map_with(&pscalars_lr, mappable);

    let mut img = CiftiImage::open(template)?;
    img.set_colors(&colors)?;
    img.save(fout)?;
    Ok(())
}

/// Saves dense scalars to a dscalar file for visualization.
///
/// `fout` is a file name; if it carries an extension it must be
/// `.dscalar.nii`, otherwise the extension is appended. The file is
/// written into `savedir`, or the configured data directory when
/// `savedir` is `None`. Returns the path written.
///
/// # Errors
///
/// Fails unless `dscalars` has exactly 91282 elements matching the
/// template payload.
pub fn write_dense_image(
    dscalars: &[f64],
    fout: &str,
    savedir: Option<&Path>,
) -> Result<PathBuf> {
    write_dense_image_with_template(constants::dscalar_file(), dscalars, fout, savedir)
}

/// [`write_dense_image`] with an explicit template path.
pub fn write_dense_image_with_template<T: AsRef<Path>>(
    template: T,
    dscalars: &[f64],
    fout: &str,
    savedir: Option<&Path>,
) -> Result<PathBuf> {
    check_dscalars(dscalars)?;

    let fname = if fout.ends_with(DSCALAR_EXT) {
        fout.to_string()
    } else {
        format!("{fout}{DSCALAR_EXT}")
    };
    let out = savedir
        .map(Path::to_path_buf)
        .unwrap_or_else(constants::data_dir)
        .join(fname);

    let mut img = CiftiImage::open(template)?;
    img.set_data(dscalars)?;
    img.save(&out)?;
    Ok(out)
}
