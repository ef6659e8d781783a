//! NIfTI-2 container codec, scoped to template round-trips.
//!
//! CIFTI files are NIfTI-2 containers: a fixed 540-byte header, an
//! extension sequence carrying the CIFTI XML, then the scalar payload.
//! This module reads and writes exactly that layout and nothing more.
//! The header is kept as raw bytes with only the fields the round-trip
//! needs parsed out, so a template's header survives a load/save cycle
//! untouched apart from a recomputed `vox_offset`.
//!
//! # Layout
//!
//! ```text
//! [0, 540)          header (sizeof_hdr = 540, magic = "n+2")
//! [540, 544)        extender; byte 0 != 0 means extensions follow
//! [544, vox_offset) extension records: esize i32, ecode i32, payload,
//!                   each record padded to a multiple of 16 bytes
//! [vox_offset, end) scalar payload, dtype per header
//! ```
//!
//! Both little- and big-endian files are supported; endianness is
//! detected from `sizeof_hdr` and preserved on write.

use crate::error::{CiftiError, CiftiResult};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::{Read, Write};

/// Size of the NIfTI-2 header in bytes.
pub const HEADER_SIZE: usize = 540;

/// NIfTI-2 magic bytes at offset 4.
pub const MAGIC: [u8; 8] = *b"n+2\0\r\n\x1a\n";

/// Extension code for CIFTI XML metadata.
pub const ECODE_CIFTI: i32 = 32;

/// Offset of the first extension record (header + 4-byte extender).
const EXTENSIONS_START: u64 = HEADER_SIZE as u64 + 4;

// Byte offsets of the parsed header fields.
const OFF_DATATYPE: usize = 12;
const OFF_BITPIX: usize = 14;
const OFF_DIM: usize = 16;
const OFF_VOX_OFFSET: usize = 168;
const OFF_SCL_SLOPE: usize = 176;

/// Payload element type.
///
/// HCP dlabel/dscalar templates use float32; float64 is accepted for
/// robustness. Other NIfTI datatypes are rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit IEEE float (NIfTI code 16).
    Float32,
    /// 64-bit IEEE float (NIfTI code 64).
    Float64,
}

impl DataType {
    /// Creates a datatype from its NIfTI code.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            16 => Some(DataType::Float32),
            64 => Some(DataType::Float64),
            _ => None,
        }
    }

    /// Returns the NIfTI datatype code.
    #[inline]
    pub fn code(&self) -> i16 {
        match self {
            DataType::Float32 => 16,
            DataType::Float64 => 64,
        }
    }

    /// Returns the element size in bytes.
    #[inline]
    pub fn size_of(&self) -> usize {
        match self {
            DataType::Float32 => 4,
            DataType::Float64 => 8,
        }
    }
}

/// A NIfTI-2 header.
///
/// Holds the raw 540 header bytes plus the handful of fields the
/// round-trip interprets. Unparsed fields pass through writes verbatim.
#[derive(Debug, Clone)]
pub struct Nifti2Header {
    raw: [u8; HEADER_SIZE],
    /// Whether the file is little-endian.
    pub little_endian: bool,
    /// Payload element type.
    pub datatype: DataType,
    /// Dimension array; `dim[0]` is the number of dimensions.
    pub dim: [i64; 8],
    /// Byte offset of the payload within the file.
    pub vox_offset: i64,
}

impl Nifti2Header {
    /// Reads and parses a header from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`CiftiError::InvalidFile`] if `sizeof_hdr` or the magic
    /// bytes are wrong, and [`CiftiError::UnsupportedDataType`] for
    /// payload types other than float32/float64.
    pub fn read<R: Read>(reader: &mut R) -> CiftiResult<Self> {
        let mut raw = [0u8; HEADER_SIZE];
        reader.read_exact(&mut raw)?;

        let little_endian = match LittleEndian::read_i32(&raw[0..4]) {
            540 => true,
            _ if BigEndian::read_i32(&raw[0..4]) == 540 => false,
            other => {
                return Err(CiftiError::InvalidFile(format!(
                    "sizeof_hdr is {}, expected 540 (not a NIfTI-2 file?)",
                    other
                )));
            }
        };
        if raw[4..12] != MAGIC {
            return Err(CiftiError::InvalidFile("bad NIfTI-2 magic".into()));
        }

        let (datatype_code, dim, vox_offset) = if little_endian {
            Self::parse_fields::<LittleEndian>(&raw)
        } else {
            Self::parse_fields::<BigEndian>(&raw)
        };
        let datatype = DataType::from_code(datatype_code)
            .ok_or(CiftiError::UnsupportedDataType(datatype_code))?;

        let ndim = dim[0];
        if !(1..=7).contains(&ndim) {
            return Err(CiftiError::InvalidFile(format!("dim[0] is {}", ndim)));
        }
        if vox_offset < EXTENSIONS_START as i64 {
            return Err(CiftiError::InvalidFile(format!(
                "vox_offset {} overlaps the header",
                vox_offset
            )));
        }

        Ok(Self {
            raw,
            little_endian,
            datatype,
            dim,
            vox_offset,
        })
    }

    fn parse_fields<E: ByteOrder>(raw: &[u8]) -> (i16, [i64; 8], i64) {
        let datatype = E::read_i16(&raw[OFF_DATATYPE..OFF_DATATYPE + 2]);
        let mut dim = [0i64; 8];
        for (i, d) in dim.iter_mut().enumerate() {
            *d = E::read_i64(&raw[OFF_DIM + i * 8..OFF_DIM + (i + 1) * 8]);
        }
        let vox_offset = E::read_i64(&raw[OFF_VOX_OFFSET..OFF_VOX_OFFSET + 8]);
        (datatype, dim, vox_offset)
    }

    /// Creates a minimal little-endian header from scratch.
    ///
    /// Used for synthesizing template files (mainly in tests and tools);
    /// real pipelines start from an existing template instead.
    pub fn new(dim: &[i64], datatype: DataType) -> CiftiResult<Self> {
        if dim.is_empty() || dim.len() > 7 {
            return Err(CiftiError::InvalidFile(format!(
                "dim must have 1..=7 entries, got {}",
                dim.len()
            )));
        }
        let mut full_dim = [1i64; 8];
        full_dim[0] = dim.len() as i64;
        full_dim[1..=dim.len()].copy_from_slice(dim);

        let mut raw = [0u8; HEADER_SIZE];
        LittleEndian::write_i32(&mut raw[0..4], HEADER_SIZE as i32);
        raw[4..12].copy_from_slice(&MAGIC);
        LittleEndian::write_i16(&mut raw[OFF_DATATYPE..OFF_DATATYPE + 2], datatype.code());
        LittleEndian::write_i16(
            &mut raw[OFF_BITPIX..OFF_BITPIX + 2],
            (datatype.size_of() * 8) as i16,
        );
        for (i, d) in full_dim.iter().enumerate() {
            LittleEndian::write_i64(&mut raw[OFF_DIM + i * 8..OFF_DIM + (i + 1) * 8], *d);
        }
        LittleEndian::write_i64(
            &mut raw[OFF_VOX_OFFSET..OFF_VOX_OFFSET + 8],
            EXTENSIONS_START as i64,
        );
        LittleEndian::write_f64(&mut raw[OFF_SCL_SLOPE..OFF_SCL_SLOPE + 8], 1.0);

        Ok(Self {
            raw,
            little_endian: true,
            datatype,
            dim: full_dim,
            vox_offset: EXTENSIONS_START as i64,
        })
    }

    /// Returns the payload element count (product of the used dims).
    pub fn element_count(&self) -> usize {
        let ndim = self.dim[0] as usize;
        self.dim[1..=ndim]
            .iter()
            .map(|&d| d.max(0) as usize)
            .product()
    }

    /// Writes the header with a patched `vox_offset`.
    pub(crate) fn write<W: Write>(&self, writer: &mut W, vox_offset: i64) -> CiftiResult<()> {
        let mut raw = self.raw;
        if self.little_endian {
            LittleEndian::write_i64(&mut raw[OFF_VOX_OFFSET..OFF_VOX_OFFSET + 8], vox_offset);
        } else {
            BigEndian::write_i64(&mut raw[OFF_VOX_OFFSET..OFF_VOX_OFFSET + 8], vox_offset);
        }
        writer.write_all(&raw)?;
        Ok(())
    }
}

/// A header extension record.
///
/// `content` is the record payload excluding the 8-byte esize/ecode
/// preamble; on disk the whole record is zero-padded to a multiple of
/// 16 bytes.
#[derive(Debug, Clone)]
pub struct Extension {
    /// Extension code (32 = CIFTI XML).
    pub ecode: i32,
    /// Raw extension payload, padding included as stored.
    pub content: Vec<u8>,
}

impl Extension {
    /// Creates an extension record.
    pub fn new(ecode: i32, content: Vec<u8>) -> Self {
        Self { ecode, content }
    }

    /// Returns the content with trailing NUL padding stripped.
    pub fn trimmed_content(&self) -> &[u8] {
        let end = self
            .content
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |p| p + 1);
        &self.content[..end]
    }

    /// Returns the padded on-disk size of this record.
    pub fn bytes_on_disk(&self) -> usize {
        (8 + self.content.len()).div_ceil(16) * 16
    }
}

/// Reads the extender plus all extension records.
///
/// `available` is the byte count between the header and `vox_offset`.
pub(crate) fn read_extensions<R: Read>(
    reader: &mut R,
    available: usize,
    little_endian: bool,
) -> CiftiResult<Vec<Extension>> {
    if available < 4 {
        return Ok(Vec::new());
    }
    let mut extender = [0u8; 4];
    reader.read_exact(&mut extender)?;

    let mut extensions = Vec::new();
    let mut remaining = available - 4;
    if extender[0] == 0 {
        // Extender says no extensions; skip any slack before the payload.
        skip(reader, remaining)?;
        return Ok(extensions);
    }

    while remaining >= 8 {
        let mut preamble = [0u8; 8];
        reader.read_exact(&mut preamble)?;
        // The esize/ecode pair follows file endianness.
        let (esize, ecode) = if little_endian {
            (
                LittleEndian::read_i32(&preamble[0..4]),
                LittleEndian::read_i32(&preamble[4..8]),
            )
        } else {
            (
                BigEndian::read_i32(&preamble[0..4]),
                BigEndian::read_i32(&preamble[4..8]),
            )
        };
        if esize < 8 || (esize as usize) > remaining {
            return Err(CiftiError::InvalidFile(format!(
                "extension size {} exceeds available {} bytes",
                esize, remaining
            )));
        }

        let content_len = esize as usize - 8;
        let mut content = vec![0u8; content_len];
        reader.read_exact(&mut content)?;
        remaining -= esize as usize;
        extensions.push(Extension::new(ecode, content));
    }
    skip(reader, remaining)?;
    Ok(extensions)
}

/// Writes the extender plus all extension records, 16-byte aligned.
pub(crate) fn write_extensions<W: Write>(
    writer: &mut W,
    extensions: &[Extension],
    little_endian: bool,
) -> CiftiResult<()> {
    let extender = if extensions.is_empty() {
        [0u8; 4]
    } else {
        [1, 0, 0, 0]
    };
    writer.write_all(&extender)?;

    for ext in extensions {
        let esize = ext.bytes_on_disk() as i32;
        let mut preamble = [0u8; 8];
        if little_endian {
            LittleEndian::write_i32(&mut preamble[0..4], esize);
            LittleEndian::write_i32(&mut preamble[4..8], ext.ecode);
        } else {
            BigEndian::write_i32(&mut preamble[0..4], esize);
            BigEndian::write_i32(&mut preamble[4..8], ext.ecode);
        }
        writer.write_all(&preamble)?;
        writer.write_all(&ext.content)?;
        let pad = esize as usize - 8 - ext.content.len();
        if pad > 0 {
            writer.write_all(&vec![0u8; pad])?;
        }
    }
    Ok(())
}

/// Decodes a payload of `count` elements into `f64` values.
pub(crate) fn read_payload<R: Read>(
    reader: &mut R,
    datatype: DataType,
    count: usize,
    little_endian: bool,
) -> CiftiResult<Vec<f64>> {
    let mut bytes = vec![0u8; count * datatype.size_of()];
    reader.read_exact(&mut bytes)?;
    let data = match (datatype, little_endian) {
        (DataType::Float32, true) => decode_f32::<LittleEndian>(&bytes),
        (DataType::Float32, false) => decode_f32::<BigEndian>(&bytes),
        (DataType::Float64, true) => decode_f64::<LittleEndian>(&bytes),
        (DataType::Float64, false) => decode_f64::<BigEndian>(&bytes),
    };
    Ok(data)
}

/// Encodes `f64` values back to the payload datatype.
pub(crate) fn write_payload<W: Write>(
    writer: &mut W,
    data: &[f64],
    datatype: DataType,
    little_endian: bool,
) -> CiftiResult<()> {
    let mut bytes = vec![0u8; data.len() * datatype.size_of()];
    match (datatype, little_endian) {
        (DataType::Float32, true) => encode_f32::<LittleEndian>(data, &mut bytes),
        (DataType::Float32, false) => encode_f32::<BigEndian>(data, &mut bytes),
        (DataType::Float64, true) => encode_f64::<LittleEndian>(data, &mut bytes),
        (DataType::Float64, false) => encode_f64::<BigEndian>(data, &mut bytes),
    }
    writer.write_all(&bytes)?;
    Ok(())
}

fn decode_f32<E: ByteOrder>(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(4)
        .map(|c| E::read_f32(c) as f64)
        .collect()
}

fn decode_f64<E: ByteOrder>(bytes: &[u8]) -> Vec<f64> {
    bytes.chunks_exact(8).map(E::read_f64).collect()
}

fn encode_f32<E: ByteOrder>(data: &[f64], bytes: &mut [u8]) {
    for (value, chunk) in data.iter().zip(bytes.chunks_exact_mut(4)) {
        E::write_f32(chunk, *value as f32);
    }
}

fn encode_f64<E: ByteOrder>(data: &[f64], bytes: &mut [u8]) {
    for (value, chunk) in data.iter().zip(bytes.chunks_exact_mut(8)) {
        E::write_f64(chunk, *value);
    }
}

fn skip<R: Read>(reader: &mut R, n: usize) -> CiftiResult<()> {
    if n > 0 {
        let mut sink = vec![0u8; n];
        reader.read_exact(&mut sink)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn synthetic_header_round_trips() {
        let header = Nifti2Header::new(&[1, 1, 1, 1, 1, 360], DataType::Float32).unwrap();
        assert_eq!(header.element_count(), 360);

        let mut buf = Vec::new();
        header.write(&mut buf, 544).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE);

        let parsed = Nifti2Header::read(&mut Cursor::new(&buf)).unwrap();
        assert!(parsed.little_endian);
        assert_eq!(parsed.datatype, DataType::Float32);
        assert_eq!(parsed.dim, header.dim);
        assert_eq!(parsed.vox_offset, 544);
    }

    #[test]
    fn big_endian_header_parses_and_patches() {
        let mut raw = [0u8; HEADER_SIZE];
        BigEndian::write_i32(&mut raw[0..4], HEADER_SIZE as i32);
        raw[4..12].copy_from_slice(&MAGIC);
        BigEndian::write_i16(&mut raw[OFF_DATATYPE..OFF_DATATYPE + 2], 16);
        BigEndian::write_i16(&mut raw[OFF_BITPIX..OFF_BITPIX + 2], 32);
        let mut dim = [1i64; 8];
        dim[0] = 6;
        dim[6] = 360;
        for (i, d) in dim.iter().enumerate() {
            BigEndian::write_i64(&mut raw[OFF_DIM + i * 8..OFF_DIM + (i + 1) * 8], *d);
        }
        BigEndian::write_i64(&mut raw[OFF_VOX_OFFSET..OFF_VOX_OFFSET + 8], 544);

        let header = Nifti2Header::read(&mut Cursor::new(&raw)).unwrap();
        assert!(!header.little_endian);
        assert_eq!(header.datatype, DataType::Float32);
        assert_eq!(header.element_count(), 360);
        assert_eq!(header.vox_offset, 544);

        // The vox_offset patch on write must stay big-endian too.
        let mut buf = Vec::new();
        header.write(&mut buf, 592).unwrap();
        let patched = Nifti2Header::read(&mut Cursor::new(&buf)).unwrap();
        assert!(!patched.little_endian);
        assert_eq!(patched.vox_offset, 592);
    }

    #[test]
    fn extensions_round_trip_big_endian() {
        let exts = vec![Extension::new(ECODE_CIFTI, b"<CIFTI/>".to_vec())];
        let mut buf = Vec::new();
        write_extensions(&mut buf, &exts, false).unwrap();

        let total = buf.len();
        let parsed = read_extensions(&mut Cursor::new(&buf), total, false).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].ecode, ECODE_CIFTI);
        assert_eq!(parsed[0].trimmed_content(), b"<CIFTI/>");
    }

    #[test]
    fn rejects_bad_sizeof_hdr() {
        let raw = [0u8; HEADER_SIZE];
        assert!(Nifti2Header::read(&mut Cursor::new(&raw)).is_err());
    }

    #[test]
    fn rejects_bad_magic() {
        let header = Nifti2Header::new(&[4], DataType::Float32).unwrap();
        let mut buf = Vec::new();
        header.write(&mut buf, 544).unwrap();
        buf[4] = b'x';
        assert!(Nifti2Header::read(&mut Cursor::new(&buf)).is_err());
    }

    #[test]
    fn rejects_unsupported_datatype() {
        let header = Nifti2Header::new(&[4], DataType::Float32).unwrap();
        let mut buf = Vec::new();
        header.write(&mut buf, 544).unwrap();
        buf[OFF_DATATYPE] = 2; // NIfTI uint8
        assert!(matches!(
            Nifti2Header::read(&mut Cursor::new(&buf)),
            Err(CiftiError::UnsupportedDataType(2))
        ));
    }

    #[test]
    fn extension_padding_is_16_byte_aligned() {
        let ext = Extension::new(ECODE_CIFTI, vec![1; 5]);
        assert_eq!(ext.bytes_on_disk(), 16);
        let ext = Extension::new(ECODE_CIFTI, vec![1; 8]);
        assert_eq!(ext.bytes_on_disk(), 16);
        let ext = Extension::new(ECODE_CIFTI, vec![1; 9]);
        assert_eq!(ext.bytes_on_disk(), 32);
    }

    #[test]
    fn extensions_round_trip() {
        let exts = vec![
            Extension::new(ECODE_CIFTI, b"<CIFTI/>".to_vec()),
            Extension::new(4, vec![0xAB; 20]),
        ];
        let mut buf = Vec::new();
        write_extensions(&mut buf, &exts, true).unwrap();

        let total = buf.len();
        let parsed = read_extensions(&mut Cursor::new(&buf), total, true).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].ecode, ECODE_CIFTI);
        assert_eq!(parsed[0].trimmed_content(), b"<CIFTI/>");
        assert_eq!(parsed[1].ecode, 4);
    }

    #[test]
    fn empty_extender_reads_as_no_extensions() {
        let mut buf = Vec::new();
        write_extensions(&mut buf, &[], true).unwrap();
        assert_eq!(buf.len(), 4);
        let parsed = read_extensions(&mut Cursor::new(&buf), 4, true).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn payload_round_trips_f32() {
        let data = vec![0.0, 1.5, -2.25, 91282.0];
        let mut buf = Vec::new();
        write_payload(&mut buf, &data, DataType::Float32, true).unwrap();
        let back = read_payload(&mut Cursor::new(&buf), DataType::Float32, 4, true).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn payload_round_trips_f64_big_endian() {
        let data = vec![std::f64::consts::PI, -0.125];
        let mut buf = Vec::new();
        write_payload(&mut buf, &data, DataType::Float64, false).unwrap();
        let back = read_payload(&mut Cursor::new(&buf), DataType::Float64, 2, false).unwrap();
        assert_eq!(back, data);
    }
}
