//! CIFTI label-table color patching.
//!
//! A dlabel file's CIFTI XML extension carries one `<Label>` element per
//! parcel plus a reserved background entry at key 0:
//!
//! ```xml
//! <LabelTable>
//!   <Label Key="0" Red="0" Green="0" Blue="0" Alpha="0">???</Label>
//!   <Label Key="1" Red="0.26" Green="0.65" Blue="0.96" Alpha="1">L_V1</Label>
//!   <!-- ... -->
//! </LabelTable>
//! ```
//!
//! [`patch_label_colors`] rewrites the Red/Green/Blue/Alpha attributes of
//! every non-background entry from an ordered color sequence. The rewrite
//! is a streaming event copy: everything except those four attributes
//! passes through verbatim, so map names, metadata, and document structure
//! survive untouched.

use crate::error::{CiftiError, CiftiResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use wbplot_core::Rgba;

/// Rewrites label colors in a CIFTI XML document.
///
/// Entry 0 (the background label) is skipped; `colors[i - 1]` is applied
/// to the `i`-th `<Label>` element in document order.
///
/// # Errors
///
/// - [`CiftiError::LabelTableMismatch`] if the number of non-background
///   labels differs from `colors.len()`.
/// - [`CiftiError::Xml`] on malformed XML.
pub fn patch_label_colors(xml: &[u8], colors: &[Rgba]) -> CiftiResult<Vec<u8>> {
    let labels = count_labels(xml)?;
    if labels == 0 || labels - 1 != colors.len() {
        return Err(CiftiError::LabelTableMismatch {
            labels: labels.saturating_sub(1),
            colors: colors.len(),
        });
    }

    let mut reader = Reader::from_reader(xml);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    let mut index = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| CiftiError::Xml(e.to_string()))?;
        match event {
            Event::Eof => break,
            Event::Start(ref e) if e.name().as_ref() == b"Label" => {
                let out = if index == 0 {
                    Event::Start(e.to_owned())
                } else {
                    Event::Start(recolor_label(e, colors[index - 1])?)
                };
                index += 1;
                writer
                    .write_event(out)
                    .map_err(|e| CiftiError::Xml(e.to_string()))?;
            }
            Event::Empty(ref e) if e.name().as_ref() == b"Label" => {
                let out = if index == 0 {
                    Event::Empty(e.to_owned())
                } else {
                    Event::Empty(recolor_label(e, colors[index - 1])?)
                };
                index += 1;
                writer
                    .write_event(out)
                    .map_err(|e| CiftiError::Xml(e.to_string()))?;
            }
            other => {
                writer
                    .write_event(other)
                    .map_err(|e| CiftiError::Xml(e.to_string()))?;
            }
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}

/// Counts `<Label>` elements in the document.
fn count_labels(xml: &[u8]) -> CiftiResult<usize> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| CiftiError::Xml(e.to_string()))?
        {
            Event::Eof => break,
            Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == b"Label" => {
                count += 1;
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(count)
}

/// Rebuilds a `<Label>` start tag with replaced color attributes.
///
/// Attribute order is preserved; any color attribute the template
/// happened to omit is appended.
fn recolor_label(e: &BytesStart<'_>, color: Rgba) -> CiftiResult<BytesStart<'static>> {
    let mut out = BytesStart::new("Label");
    let mut seen = [false; 4];

    for attr in e.attributes() {
        let attr = attr.map_err(|e| CiftiError::Xml(e.to_string()))?;
        match attr.key.as_ref() {
            b"Red" => {
                seen[0] = true;
                out.push_attribute(("Red", component(color.r).as_str()));
            }
            b"Green" => {
                seen[1] = true;
                out.push_attribute(("Green", component(color.g).as_str()));
            }
            b"Blue" => {
                seen[2] = true;
                out.push_attribute(("Blue", component(color.b).as_str()));
            }
            b"Alpha" => {
                seen[3] = true;
                out.push_attribute(("Alpha", component(color.a).as_str()));
            }
            key => {
                let key = String::from_utf8_lossy(key).into_owned();
                let value = attr
                    .unescape_value()
                    .map_err(|e| CiftiError::Xml(e.to_string()))?;
                out.push_attribute((key.as_str(), value.as_ref()));
            }
        }
    }

    let missing = [
        ("Red", color.r),
        ("Green", color.g),
        ("Blue", color.b),
        ("Alpha", color.a),
    ];
    for (i, (name, value)) in missing.iter().enumerate() {
        if !seen[i] {
            out.push_attribute((*name, component(*value).as_str()));
        }
    }

    Ok(out)
}

#[inline]
fn component(v: f64) -> String {
    format!("{}", v)
}
