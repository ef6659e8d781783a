//! The in-memory CIFTI image: load, mutate, save.

use crate::error::{CiftiError, CiftiResult};
use crate::label_table::patch_label_colors;
use crate::nifti2::{
    read_extensions, read_payload, write_extensions, write_payload, DataType, Extension,
    Nifti2Header, ECODE_CIFTI, HEADER_SIZE,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use wbplot_core::Rgba;

/// An in-memory CIFTI image loaded from a template file.
///
/// The lifecycle is load → mutate → save: open an existing template,
/// optionally patch its label-table colors and/or overwrite its payload,
/// then write a new file. The template's header and any extensions that
/// were not touched are preserved byte-for-byte (modulo `vox_offset`,
/// which is recomputed when the re-serialized extensions change length).
///
/// # Example
///
/// ```rust,no_run
/// use wbplot_cifti::CiftiImage;
/// use wbplot_core::Rgba;
///
/// let mut img = CiftiImage::open("template.dlabel.nii")?;
/// let colors = vec![Rgba::opaque(1.0, 0.0, 0.0); 360];
/// img.set_colors(&colors)?;
/// img.save("out.dlabel.nii")?;
/// # Ok::<(), wbplot_cifti::CiftiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CiftiImage {
    header: Nifti2Header,
    extensions: Vec<Extension>,
    data: Vec<f64>,
    dirty: bool,
}

impl CiftiImage {
    /// Loads a CIFTI image from a file.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, malformed containers, and payload datatypes
    /// other than float32/float64.
    pub fn open<P: AsRef<Path>>(path: P) -> CiftiResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let header = Nifti2Header::read(&mut reader)?;
        let available = (header.vox_offset as usize).saturating_sub(HEADER_SIZE);
        let extensions = read_extensions(&mut reader, available, header.little_endian)?;
        let count = header.element_count();
        let data = read_payload(&mut reader, header.datatype, count, header.little_endian)?;

        tracing::debug!(
            path = %path.display(),
            elements = count,
            extensions = extensions.len(),
            "loaded CIFTI template"
        );

        Ok(Self {
            header,
            extensions,
            data,
            dirty: false,
        })
    }

    /// Assembles an image from parts.
    ///
    /// Mainly useful for synthesizing template files in tests and tools.
    ///
    /// # Errors
    ///
    /// Fails if `data` does not match the header's element count.
    pub fn from_parts(
        header: Nifti2Header,
        extensions: Vec<Extension>,
        data: Vec<f64>,
    ) -> CiftiResult<Self> {
        if data.len() != header.element_count() {
            return Err(CiftiError::DimensionMismatch {
                expected: header.element_count(),
                got: data.len(),
            });
        }
        Ok(Self {
            header,
            extensions,
            data,
            dirty: false,
        })
    }

    /// Returns the scalar payload.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the payload element type.
    pub fn datatype(&self) -> DataType {
        self.header.datatype
    }

    /// Whether the color metadata was modified since load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the raw content of the CIFTI XML extension, if present.
    pub fn cifti_xml(&self) -> Option<&[u8]> {
        self.cifti_extension_index()
            .map(|i| self.extensions[i].trimmed_content())
    }

    /// Overwrites the scalar payload with caller-supplied data.
    ///
    /// # Errors
    ///
    /// Returns [`CiftiError::DimensionMismatch`] unless `data` holds
    /// exactly as many elements as the template payload.
    pub fn set_data(&mut self, data: &[f64]) -> CiftiResult<()> {
        let expected = self.header.element_count();
        if data.len() != expected {
            return Err(CiftiError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        self.data.clear();
        self.data.extend_from_slice(data);
        Ok(())
    }

    /// Patches the label-table colors in the CIFTI XML extension.
    ///
    /// `colors[i - 1]` is applied to label entry `i`; entry 0 (the
    /// background label) is never touched. Marks the metadata dirty.
    ///
    /// # Errors
    ///
    /// Returns [`CiftiError::MissingExtension`] if the file carries no
    /// CIFTI XML, and the patcher's errors otherwise.
    pub fn set_colors(&mut self, colors: &[Rgba]) -> CiftiResult<()> {
        let index = self
            .cifti_extension_index()
            .ok_or(CiftiError::MissingExtension)?;
        let patched = patch_label_colors(self.extensions[index].trimmed_content(), colors)?;
        self.extensions[index].content = patched;
        self.dirty = true;
        Ok(())
    }

    /// Writes the image to a new file.
    ///
    /// The template's endianness is preserved; `vox_offset` is recomputed
    /// from the serialized extension lengths.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CiftiResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let ext_bytes: usize = self.extensions.iter().map(|e| e.bytes_on_disk()).sum();
        let vox_offset = (HEADER_SIZE + 4 + ext_bytes) as i64;

        self.header.write(&mut writer, vox_offset)?;
        write_extensions(&mut writer, &self.extensions, self.header.little_endian)?;
        write_payload(
            &mut writer,
            &self.data,
            self.header.datatype,
            self.header.little_endian,
        )?;

        tracing::debug!(
            path = %path.display(),
            bytes = vox_offset as usize + self.data.len() * self.header.datatype.size_of(),
            recolored = self.dirty,
            "saved CIFTI image"
        );
        Ok(())
    }

    fn cifti_extension_index(&self) -> Option<usize> {
        if let Some(i) = self.extensions.iter().position(|e| e.ecode == ECODE_CIFTI) {
            return Some(i);
        }
        // Some writers leave ecode at 0; fall back to the first extension.
        if !self.extensions.is_empty() {
            tracing::warn!("no extension with CIFTI ecode; falling back to the first");
            return Some(0);
        }
        None
    }
}
