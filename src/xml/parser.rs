//! Resilient XML parsing.
//!
//! Strategies, each tried only when the previous one failed:
//!
//! 1. [`ParseStrategy::Strict`] - the raw file bytes, strictly.
//! 2. [`ParseStrategy::DecodedText`] - the text produced by the loader.
//! 3. [`ParseStrategy::NamespaceStripped`] - the text with problematic
//!    namespace prefixes removed (see [`super::recover`]).
//!
//! "Strict" means well-formed and namespace-well-formed: every prefix other
//! than `xml`/`xmlns` must be bound by an in-scope `xmlns:` declaration. Many
//! exports use `uml:`/`xmi:` without declaring them, which is what strategy 3
//! exists for.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};

use super::document::{Document, NodeId};
use super::recover::strip_problematic_prefixes;
use crate::error::{ExtractionError, XmlError};

/// Which recovery strategy produced the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    Strict,
    DecodedText,
    NamespaceStripped,
}

/// A successfully parsed document and how it was obtained.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    pub document: Document,
    pub strategy: ParseStrategy,
}

/// Parse `raw`/`text` with progressively more aggressive recovery.
///
/// Fails with [`ExtractionError::InvalidFormat`] carrying the strict parser's
/// message when no strategy succeeds.
pub fn parse_resilient(raw: &[u8], text: &str) -> Result<ParseOutcome, ExtractionError> {
    let strict_err = match parse_bytes(raw) {
        Ok(document) => {
            return Ok(ParseOutcome {
                document,
                strategy: ParseStrategy::Strict,
            });
        }
        Err(e) => e,
    };
    tracing::debug!(error = %strict_err, "strict parse failed, retrying with decoded text");

    match parse_str(text) {
        Ok(document) => {
            return Ok(ParseOutcome {
                document,
                strategy: ParseStrategy::DecodedText,
            });
        }
        Err(e) => tracing::debug!(error = %e, "decoded text parse failed, stripping prefixes"),
    }

    let cleaned = strip_problematic_prefixes(text);
    match parse_str(&cleaned) {
        Ok(document) => Ok(ParseOutcome {
            document,
            strategy: ParseStrategy::NamespaceStripped,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "namespace-stripped parse failed");
            Err(ExtractionError::invalid_format(strict_err.to_string()))
        }
    }
}

/// Strictly parse raw bytes. The bytes must be UTF-8 (a UTF-8 BOM is allowed).
pub fn parse_bytes(raw: &[u8]) -> Result<Document, XmlError> {
    let body = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
    let text = std::str::from_utf8(body).map_err(|e| XmlError::Encoding(e.to_string()))?;
    parse_str(text)
}

/// Strictly parse a string.
pub fn parse_str(text: &str) -> Result<Document, XmlError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut reader = Reader::from_str(text);
    let mut builder = TreeBuilder::new(text.len() / 64);

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                builder.open(e, position)?;
            }
            Ok(Event::Empty(ref e)) => {
                builder.open(e, position)?;
                builder.close(position)?;
            }
            Ok(Event::End(_)) => {
                builder.close(position)?;
            }
            Ok(Event::Text(t)) => {
                let content = t
                    .unescape()
                    .map_err(|e| XmlError::syntax(position, e.to_string()))?;
                builder.text(&content, position)?;
            }
            Ok(Event::CData(c)) => {
                let bytes = c.into_inner();
                let content =
                    std::str::from_utf8(&bytes).map_err(|e| XmlError::Encoding(e.to_string()))?;
                builder.text(content, position)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(XmlError::syntax(reader.error_position() as u64, e.to_string()));
            }
            // Declarations, comments, processing instructions, doctype
            Ok(_) => {}
        }
    }

    builder.finish()
}

// ============================================================================
// TREE BUILDER
// ============================================================================

struct TreeBuilder {
    doc: Document,
    /// Currently open elements, innermost last.
    open: Vec<NodeId>,
    /// Bound prefixes, innermost declarations last.
    bound: Vec<String>,
    /// Number of prefixes each open element declared.
    declared: Vec<usize>,
    saw_root: bool,
}

impl TreeBuilder {
    fn new(capacity: usize) -> Self {
        Self {
            doc: Document::with_capacity(capacity),
            open: Vec::new(),
            bound: Vec::new(),
            declared: Vec::new(),
            saw_root: false,
        }
    }

    fn open(&mut self, e: &BytesStart<'_>, position: u64) -> Result<(), XmlError> {
        let tag = std::str::from_utf8(e.name().as_ref())
            .map_err(|err| XmlError::Encoding(err.to_string()))?
            .to_string();

        let mut attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|err| XmlError::syntax(position, err.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| XmlError::Encoding(err.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| XmlError::syntax(position, err.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        let mut declared = 0;
        for (key, _) in &attributes {
            if let Some(prefix) = key.strip_prefix("xmlns:") {
                self.bound.push(prefix.to_string());
                declared += 1;
            }
        }
        self.declared.push(declared);

        self.check_prefix(&tag, position)?;
        for (key, _) in &attributes {
            if key != "xmlns" && !key.starts_with("xmlns:") {
                self.check_prefix(key, position)?;
            }
        }

        let parent = self.open.last().copied();
        if parent.is_none() {
            if self.saw_root {
                return Err(XmlError::structure(format!(
                    "second root element <{tag}> at position {position}"
                )));
            }
            self.saw_root = true;
        }
        let id = self.doc.push(tag, attributes, parent);
        self.open.push(id);
        Ok(())
    }

    fn close(&mut self, position: u64) -> Result<(), XmlError> {
        let id = self.open.pop().ok_or_else(|| {
            XmlError::structure(format!("unmatched end tag at position {position}"))
        })?;
        self.doc.close(id);
        let declared = self.declared.pop().unwrap_or(0);
        self.bound.truncate(self.bound.len().saturating_sub(declared));
        Ok(())
    }

    fn text(&mut self, content: &str, position: u64) -> Result<(), XmlError> {
        match self.open.last() {
            Some(&id) => {
                self.doc.append_text(id, content);
                Ok(())
            }
            None if content.trim().is_empty() => Ok(()),
            None => Err(XmlError::structure(format!(
                "text outside the root element at position {position}"
            ))),
        }
    }

    fn check_prefix(&self, name: &str, position: u64) -> Result<(), XmlError> {
        let Some((prefix, _)) = name.split_once(':') else {
            return Ok(());
        };
        if prefix == "xml" || prefix == "xmlns" || self.bound.iter().any(|b| b == prefix) {
            return Ok(());
        }
        Err(XmlError::UnboundPrefix {
            prefix: prefix.to_string(),
            position,
        })
    }

    fn finish(self) -> Result<Document, XmlError> {
        if let Some(&id) = self.open.last() {
            return Err(XmlError::structure(format!(
                "unclosed element <{}>",
                self.doc.node(id).tag
            )));
        }
        if !self.saw_root {
            return Err(XmlError::structure("no root element"));
        }
        Ok(self.doc)
    }
}
