//! End-to-end pipeline tests against synthesized CIFTI templates.
//!
//! Real HCP templates are large binary files; these tests build minimal
//! but structurally faithful dlabel/dscalar containers on the fly and
//! run the full public API against them.

use std::path::PathBuf;
use tempfile::TempDir;
use wbplot::{
    map_unilateral_to_bilateral, masked_grey, write_dense_image_with_template,
    write_parcellated_image_mapped, write_parcellated_image_with_template, CiftiImage, Colormap,
    Hemisphere, Rgba, ScalarMapper, BILATERAL_PARCELS, DENSE_GRAYORDINATES,
};
use wbplot_cifti::{DataType, Extension, Nifti2Header, ECODE_CIFTI};

/// Builds a dlabel template: 360 parcel labels plus the background entry,
/// payload holding the parcel keys.
fn dlabel_template(dir: &TempDir) -> PathBuf {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><CIFTI Version="2"><Matrix><MatrixIndicesMap AppliesToMatrixDimension="0" IndicesMapToDataType="CIFTI_INDEX_TYPE_LABELS"><NamedMap><MapName>parcellation</MapName><LabelTable><Label Key="0" Red="0" Green="0" Blue="0" Alpha="0">???</Label>"#,
    );
    for key in 1..=BILATERAL_PARCELS {
        let side = if key <= 180 { "L" } else { "R" };
        xml.push_str(&format!(
            r#"<Label Key="{key}" Red="0.5" Green="0.5" Blue="0.5" Alpha="1">{side}_parcel_{key}</Label>"#
        ));
    }
    xml.push_str("</LabelTable></NamedMap></MatrixIndicesMap></Matrix></CIFTI>");

    let header =
        Nifti2Header::new(&[1, 1, 1, 1, 1, BILATERAL_PARCELS as i64], DataType::Float32).unwrap();
    let extensions = vec![Extension::new(ECODE_CIFTI, xml.into_bytes())];
    let data: Vec<f64> = (1..=BILATERAL_PARCELS).map(|k| k as f64).collect();
    let img = CiftiImage::from_parts(header, extensions, data).unwrap();

    let path = dir.path().join("template.dlabel.nii");
    img.save(&path).unwrap();
    path
}

/// Builds a dscalar template with a zeroed 91282-element payload.
fn dscalar_template(dir: &TempDir) -> PathBuf {
    let header = Nifti2Header::new(
        &[1, 1, 1, 1, 1, DENSE_GRAYORDINATES as i64],
        DataType::Float32,
    )
    .unwrap();
    let xml = br#"<CIFTI Version="2"><Matrix><MatrixIndicesMap IndicesMapToDataType="CIFTI_INDEX_TYPE_SCALARS"/></Matrix></CIFTI>"#;
    let extensions = vec![Extension::new(ECODE_CIFTI, xml.to_vec())];
    let img = CiftiImage::from_parts(header, extensions, vec![0.0; DENSE_GRAYORDINATES]).unwrap();

    let path = dir.path().join("template.dscalar.nii");
    img.save(&path).unwrap();
    path
}

#[test]
fn parcellated_left_hemisphere_end_to_end() {
    let dir = TempDir::new().unwrap();
    let template = dlabel_template(&dir);
    let out = dir.path().join("left_map.dlabel.nii");

    // Parcel 1 deliberately holds zero to exercise masking.
    let pscalars: Vec<f64> = (0..180).map(|i| i as f64).collect();
    write_parcellated_image_with_template(
        &template,
        &pscalars,
        &out,
        Some("left"),
        None,
        Some("viridis"),
    )
    .unwrap();

    let written = CiftiImage::open(&out).unwrap();
    let xml = String::from_utf8(written.cifti_xml().unwrap().to_vec()).unwrap();

    // Expected colors: the same mapper over the zero-padded bilateral vector.
    let padded = map_unilateral_to_bilateral(&pscalars, Some(Hemisphere::Left)).unwrap();
    let expected = ScalarMapper::new(Colormap::Viridis).map(&padded).unwrap();

    // A data-bearing left parcel gets its mapped color.
    assert!(xml.contains(&format!(
        r#"Key="2" Red="{}" Green="{}" Blue="{}" Alpha="{}""#,
        expected[1].r, expected[1].g, expected[1].b, expected[1].a
    )));
    // Every right-hemisphere parcel was zero-padded, hence masked grey.
    let grey = masked_grey();
    assert!(xml.contains(&format!(
        r#"Key="181" Red="{}" Green="{}" Blue="{}" Alpha="{}""#,
        grey.r, grey.g, grey.b, grey.a
    )));
    assert!(xml.contains(&format!(r#"Key="360" Red="{}""#, grey.r)));
    // The background entry kept its template color.
    assert!(xml.contains(r#"Key="0" Red="0" Green="0" Blue="0" Alpha="0""#));
    // Payload is untouched by recoloring.
    assert_eq!(written.data()[0], 1.0);
    assert_eq!(written.data()[359], 360.0);
}

#[test]
fn parcellated_right_hemisphere_masks_left() {
    let dir = TempDir::new().unwrap();
    let template = dlabel_template(&dir);
    let out = dir.path().join("right_map.dlabel.nii");

    let pscalars = vec![1.0; 180];
    write_parcellated_image_with_template(
        &template,
        &pscalars,
        &out,
        Some("R"),
        Some((0.0, 2.0)),
        None,
    )
    .unwrap();

    let written = CiftiImage::open(&out).unwrap();
    let xml = String::from_utf8(written.cifti_xml().unwrap().to_vec()).unwrap();
    let grey = masked_grey();
    assert!(xml.contains(&format!(r#"Key="1" Red="{}""#, grey.r)));
    assert!(xml.contains(&format!(r#"Key="180" Red="{}""#, grey.r)));
    // Right parcels all hold 1.0 under vrange (0, 2): mid-colormap magma.
    let mid = Colormap::Magma.sample(0.5);
    assert!(xml.contains(&format!(r#"Key="181" Red="{}""#, mid.r)));
}

#[test]
fn parcellated_bilateral_passthrough() {
    let dir = TempDir::new().unwrap();
    let template = dlabel_template(&dir);
    let out = dir.path().join("bilateral.dlabel.nii");

    let pscalars: Vec<f64> = (1..=360).map(|i| i as f64).collect();
    write_parcellated_image_with_template(&template, &pscalars, &out, None, None, None).unwrap();
    assert!(out.exists());
}

#[test]
fn parcellated_validation_failures() {
    let dir = TempDir::new().unwrap();
    let template = dlabel_template(&dir);
    let out = dir.path().join("never_written.dlabel.nii");

    // Unilateral data must be exactly 180 long.
    let short = vec![1.0; 100];
    assert!(
        write_parcellated_image_with_template(&template, &short, &out, Some("left"), None, None)
            .is_err()
    );
    // Bilateral data must be exactly 360 long.
    let unilateral = vec![1.0; 180];
    assert!(
        write_parcellated_image_with_template(&template, &unilateral, &out, None, None, None)
            .is_err()
    );
    // Unknown hemisphere tag.
    let ok_len = vec![1.0; 180];
    assert!(
        write_parcellated_image_with_template(&template, &ok_len, &out, Some("up"), None, None)
            .is_err()
    );
    // Unknown colormap.
    assert!(write_parcellated_image_with_template(
        &template,
        &ok_len,
        &out,
        Some("left"),
        None,
        Some("jet2000")
    )
    .is_err());
    // Inverted vrange.
    assert!(write_parcellated_image_with_template(
        &template,
        &ok_len,
        &out,
        Some("left"),
        Some((1.0, -1.0)),
        None
    )
    .is_err());
    assert!(!out.exists());
}

#[test]
fn parcellated_custom_mappable() {
    let dir = TempDir::new().unwrap();
    let template = dlabel_template(&dir);
    let out = dir.path().join("custom.dlabel.nii");

    let pscalars = vec![5.0; 180];
    let red = Rgba::opaque(1.0, 0.0, 0.0);
    write_parcellated_image_mapped(&template, &pscalars, &out, Some("l"), |_| red).unwrap();

    let written = CiftiImage::open(&out).unwrap();
    let xml = String::from_utf8(written.cifti_xml().unwrap().to_vec()).unwrap();
    assert!(xml.contains(r#"Key="1" Red="1" Green="0" Blue="0" Alpha="1""#));
    // Zero-padded right hemisphere is still masked even under a custom map.
    let grey = masked_grey();
    assert!(xml.contains(&format!(r#"Key="181" Red="{}""#, grey.r)));
}

#[test]
fn dense_write_appends_extension_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let template = dscalar_template(&dir);

    let dscalars: Vec<f64> = (0..DENSE_GRAYORDINATES).map(|i| (i % 7) as f64).collect();
    let written =
        write_dense_image_with_template(&template, &dscalars, "my_map", Some(dir.path())).unwrap();
    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        "my_map.dscalar.nii"
    );

    let img = CiftiImage::open(&written).unwrap();
    assert_eq!(img.data(), dscalars.as_slice());
}

#[test]
fn dense_write_keeps_full_extension() {
    let dir = TempDir::new().unwrap();
    let template = dscalar_template(&dir);

    let dscalars = vec![0.5; DENSE_GRAYORDINATES];
    let written = write_dense_image_with_template(
        &template,
        &dscalars,
        "already_named.dscalar.nii",
        Some(dir.path()),
    )
    .unwrap();
    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        "already_named.dscalar.nii"
    );
}

#[test]
fn dense_write_rejects_wrong_length() {
    let dir = TempDir::new().unwrap();
    let template = dscalar_template(&dir);

    let short = vec![1.0; 1000];
    assert!(write_dense_image_with_template(&template, &short, "bad", Some(dir.path())).is_err());
}
