//! Content loading with encoding fallbacks.
//!
//! Exports from UML tools are frequently mislabeled: a file declaring
//! `windows-1252` may be UTF-8 and vice versa. The loader tries an ordered
//! list of encodings and keeps the first full, error-free decode. When every
//! candidate fails it decodes leniently, substituting U+FFFD for undecodable
//! sequences. Only an unreadable file is an error.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::error::ExtractionError;

/// How far into the file the XML declaration is searched for.
const DECLARATION_WINDOW: usize = 1024;

/// Decoded file content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedContent {
    /// The bytes as read from disk.
    pub raw: Vec<u8>,
    /// The decoded text (BOM removed).
    pub text: String,
    /// Name of the encoding that produced `text`.
    pub encoding: &'static str,
    /// True when every candidate failed and the lossy fallback ran.
    pub lossy: bool,
}

impl LoadedContent {
    /// Size of the decoded text in bytes when re-encoded as UTF-8.
    pub fn text_size(&self) -> usize {
        self.text.len()
    }
}

/// Read `path` and decode it to text.
pub fn load_text(path: &Path) -> Result<LoadedContent, ExtractionError> {
    let raw = std::fs::read(path).map_err(|e| ExtractionError::read(path, e))?;
    Ok(decode_bytes(raw))
}

/// Decode raw bytes using the standard candidate order.
pub fn decode_bytes(raw: Vec<u8>) -> LoadedContent {
    let candidates = candidate_encodings(&raw);
    decode_with_candidates(raw, &candidates)
}

/// Ordered candidate encodings for `raw`:
/// BOM or UTF-16 sniffing, UTF-8, the declared encoding, Windows-1252, UTF-16LE.
pub fn candidate_encodings(raw: &[u8]) -> Vec<&'static Encoding> {
    let mut candidates: Vec<&'static Encoding> = Vec::with_capacity(5);
    let mut push = |enc: &'static Encoding| {
        if !candidates.contains(&enc) {
            candidates.push(enc);
        }
    };

    if let Some((enc, _)) = Encoding::for_bom(raw) {
        push(enc);
    } else if let Some(enc) = sniff_utf16(raw) {
        push(enc);
    }
    push(UTF_8);
    if let Some(enc) = declared_encoding(raw) {
        push(enc);
    }
    // Windows-1252 is the WHATWG superset of Latin-1 / ISO-8859-1.
    push(WINDOWS_1252);
    push(UTF_16LE);
    candidates
}

fn decode_with_candidates(raw: Vec<u8>, candidates: &[&'static Encoding]) -> LoadedContent {
    for &enc in candidates {
        let body = strip_bom(&raw, enc);
        if enc == UTF_16LE || enc == UTF_16BE {
            // An odd byte count can never be complete UTF-16.
            if body.len() % 2 != 0 {
                continue;
            }
        }
        if let Some(text) = enc.decode_without_bom_handling_and_without_replacement(body) {
            tracing::debug!(encoding = enc.name(), "decoded input");
            let text = match text {
                Cow::Borrowed(s) => s.to_string(),
                Cow::Owned(s) => s,
            };
            return LoadedContent {
                text,
                raw,
                encoding: enc.name(),
                lossy: false,
            };
        }
    }

    tracing::warn!("no candidate encoding decoded the input cleanly; decoding lossily as UTF-8");
    let text = String::from_utf8_lossy(strip_bom(&raw, UTF_8)).into_owned();
    LoadedContent {
        text,
        raw,
        encoding: UTF_8.name(),
        lossy: true,
    }
}

fn strip_bom<'a>(raw: &'a [u8], enc: &'static Encoding) -> &'a [u8] {
    match Encoding::for_bom(raw) {
        Some((bom_enc, len)) if bom_enc == enc => &raw[len..],
        _ => raw,
    }
}

/// Detect BOM-less UTF-16 from the `<?` pattern (XML 1.0, Appendix F).
fn sniff_utf16(raw: &[u8]) -> Option<&'static Encoding> {
    match raw {
        [b'<', 0, b'?', 0, ..] => Some(UTF_16LE),
        [0, b'<', 0, b'?', ..] => Some(UTF_16BE),
        _ => None,
    }
}

/// The encoding named in the XML declaration, if recognised.
fn declared_encoding(raw: &[u8]) -> Option<&'static Encoding> {
    let window = &raw[..raw.len().min(DECLARATION_WINDOW)];
    let window = strip_bom(window, UTF_8);
    if !window.starts_with(b"<?xml") {
        return None;
    }
    let end = window.windows(2).position(|w| w == b"?>")?;
    let decl = &window[..end];
    let key = decl.windows(9).position(|w| w == b"encoding=")?;
    let rest = &decl[key + 9..];
    let quote = *rest.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let close = rest[1..].iter().position(|&b| b == quote)?;
    Encoding::for_label(&rest[1..1 + close])
}
