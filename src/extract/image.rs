//! Diagram payload detection.
//!
//! Classifies embedded diagram payloads without decoding them for use: the
//! base64 check decodes only to validate, and the decoded bytes are looked at
//! for a magic number when the tag name says nothing specific.
//!
//! ```text
//! candidate child (in order) ──▶ text | @data | @content
//!        │
//!        ├─ base64-plausible ───────────────▶ format from tag (magic refines)
//!        ├─ len > metafile_min_len + EMF/WMF ─▶ metafile
//!        ├─ len > unknown_payload_min_len ───▶ unknown
//!        └─ next candidate
//! no payload ──▶ @ImageFile / @ImagePath ──▶ file_reference
//! ```

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::config::AnalyzerConfig;
use crate::error::XmlError;
use crate::model::ImageFormat;
use crate::xml::{Document, NodeId};

use super::fields;

/// Payload slots searched under a diagram node, in priority order.
const CANDIDATE_PATHS: &[&str] = &[
    ".//Image",
    ".//MetaFile",
    ".//DiagramImage",
    ".//Metafile",
    ".//Extension//image",
    ".//image",
    ".//png",
    ".//jpg",
    ".//bmp",
    ".//PDATA1",
    ".//PDATA2",
    ".//PDATA3",
    ".//StyleEx",
];

const METAFILE_MARKERS: &[&str] = &["EMF", "WMF"];

/// Standard alphabet, tolerant of non-zero trailing bits and of padding
/// beyond what the final quantum needs.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A detected payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageProbe {
    /// Trimmed payload text or file path, as found.
    pub data: String,
    pub format: ImageFormat,
}

/// Look for an image payload under `diagram`.
pub fn probe(
    doc: &Document,
    diagram: NodeId,
    config: &AnalyzerConfig,
) -> Result<Option<ImageProbe>, XmlError> {
    for path in CANDIDATE_PATHS {
        let Some(candidate) = doc.find(diagram, path)? else {
            continue;
        };
        let Some(payload) = payload_text(doc, candidate) else {
            continue;
        };
        if let Some(format) = classify_payload(payload, doc.local(candidate), config) {
            return Ok(Some(ImageProbe {
                data: payload.to_string(),
                format,
            }));
        }
    }

    Ok(fields::IMAGE_REF.lookup(doc, diagram).map(|path| ImageProbe {
        data: path.to_string(),
        format: ImageFormat::FileReference,
    }))
}

fn payload_text(doc: &Document, node: NodeId) -> Option<&str> {
    let text = doc.text(node);
    let text = if text.is_empty() {
        fields::PAYLOAD.lookup(doc, node)?.trim()
    } else {
        text
    };
    (!text.is_empty()).then_some(text)
}

/// Ordered payload rules; `None` means the text is not an image payload.
pub fn classify_payload(payload: &str, tag: &str, config: &AnalyzerConfig) -> Option<ImageFormat> {
    if let Some(bytes) = decode_base64(payload) {
        let from_tag = format_from_tag(tag);
        let format = match from_tag {
            ImageFormat::Image | ImageFormat::Unknown if config.sniff_image_magic => {
                sniff_magic(&bytes).unwrap_or(from_tag)
            }
            other => other,
        };
        return Some(format);
    }

    let len = payload.chars().count();
    if len > config.metafile_min_len && METAFILE_MARKERS.iter().any(|m| payload.contains(m)) {
        return Some(ImageFormat::Metafile);
    }
    if len > config.unknown_payload_min_len {
        return Some(ImageFormat::Unknown);
    }
    None
}

/// True for text of at least four characters drawn only from the standard
/// base64 alphabet, with `=` only as a trailing run that completes the final
/// quantum, that decodes to at least one byte.
pub fn is_base64(text: &str) -> bool {
    decode_base64(text).is_some()
}

fn decode_base64(text: &str) -> Option<Vec<u8>> {
    if text.len() < 4 || !text.bytes().all(is_base64_byte) {
        return None;
    }
    let data = text.trim_end_matches('=');
    let padding = text.len() - data.len();
    let complete = match data.len() % 4 {
        0 => !data.is_empty(),
        2 => padding >= 2,
        3 => padding >= 1,
        _ => false,
    };
    if !complete || data.contains('=') {
        return None;
    }
    LENIENT.decode(data).ok()
}

pub(crate) fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Format implied by a payload slot's tag name.
pub fn format_from_tag(tag: &str) -> ImageFormat {
    let tag = tag.to_ascii_lowercase();
    if tag.contains("png") {
        ImageFormat::Png
    } else if tag.contains("jpg") || tag.contains("jpeg") {
        ImageFormat::Jpeg
    } else if tag.contains("bmp") {
        ImageFormat::Bmp
    } else if ["metafile", "emf", "wmf"].iter().any(|m| tag.contains(m)) {
        ImageFormat::Metafile
    } else if tag.contains("image") {
        ImageFormat::Image
    } else {
        ImageFormat::Unknown
    }
}

/// Format from the leading bytes of a decoded payload.
pub fn sniff_magic(bytes: &[u8]) -> Option<ImageFormat> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    const JPEG: &[u8] = b"\xff\xd8\xff";
    const GIF87: &[u8] = b"GIF87a";
    const GIF89: &[u8] = b"GIF89a";
    const WMF_PLACEABLE: &[u8] = b"\xd7\xcd\xc6\x9a";

    if bytes.starts_with(PNG) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(JPEG) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(GIF87) || bytes.starts_with(GIF89) {
        Some(ImageFormat::Gif)
    } else if bytes.starts_with(b"BM") && bytes.len() >= 14 {
        Some(ImageFormat::Bmp)
    } else if bytes.starts_with(WMF_PLACEABLE) || is_emf(bytes) {
        Some(ImageFormat::Metafile)
    } else {
        None
    }
}

/// EMF header: record type 1 followed by the ` EMF` signature at offset 40.
fn is_emf(bytes: &[u8]) -> bool {
    bytes.len() >= 44 && bytes[..4] == [1, 0, 0, 0] && &bytes[40..44] == b" EMF"
}
