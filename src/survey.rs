//! Structure survey and content search.
//!
//! Diagnostics for files that extract poorly: what tags occur, which nodes
//! look diagram- or image-related, where long base64-like payloads live, and
//! a case-insensitive search across tags, attributes and text.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::extract::image::is_base64_byte;
use crate::load::load_text;
use crate::xml::{Document, NodeId, parse_resilient};

/// Keywords that hint at diagram or image content.
pub const DIAGRAM_KEYWORDS: &[&str] = &[
    "diagram", "image", "metafile", "png", "jpg", "bmp", "drawing", "graphic",
];

const MAX_ATTRIBUTE_SAMPLES: usize = 10;
const MAX_KEYWORD_SAMPLES: usize = 5;
const KEYWORD_TEXT_PREVIEW: usize = 100;
const BASE64_MIN_LEN: usize = 100;
const BASE64_PROBE_LEN: usize = 50;
const SEARCH_TEXT_PREVIEW: usize = 200;
const SEARCH_VALUE_PREVIEW: usize = 500;

// ============================================================================
// SURVEY
// ============================================================================

/// Occurrence summary for one tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    pub count: usize,
    /// Up to ten distinct attribute names, sorted.
    pub sample_attributes: Vec<String>,
    pub has_text: bool,
}

/// A node shown as an example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSample {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
}

/// Nodes whose tag or attributes mention a keyword.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub keyword: String,
    pub count: usize,
    pub samples: Vec<NodeSample>,
}

/// A node whose text looks like a long base64 payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Candidate {
    pub tag: String,
    pub length: usize,
}

/// Structural overview of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSurvey {
    pub root_tag: String,
    pub root_attributes: Vec<(String, String)>,
    pub total_nodes: usize,
    /// Qualified tag → summary, sorted by tag.
    pub tags: BTreeMap<String, TagSummary>,
    /// Only keywords with at least one match.
    pub keyword_matches: Vec<KeywordMatches>,
    pub base64_candidates: Vec<Base64Candidate>,
}

/// Survey an already parsed document.
pub fn survey_document(doc: &Document) -> StructureSurvey {
    let mut tags: BTreeMap<String, (usize, BTreeSet<String>, bool)> = BTreeMap::new();
    let mut keyword_matches: Vec<KeywordMatches> = DIAGRAM_KEYWORDS
        .iter()
        .map(|k| KeywordMatches {
            keyword: k.to_string(),
            count: 0,
            samples: Vec::new(),
        })
        .collect();
    let mut base64_candidates = Vec::new();

    for id in doc.iter() {
        let node = doc.node(id);
        let text = doc.text(id);

        let entry = tags.entry(node.tag.clone()).or_default();
        entry.0 += 1;
        entry.1.extend(node.attributes.iter().map(|(k, _)| k.clone()));
        entry.2 |= !text.is_empty();

        for matches in keyword_matches.iter_mut() {
            if mentions(doc, id, &matches.keyword) {
                matches.count += 1;
                if matches.samples.len() < MAX_KEYWORD_SAMPLES {
                    matches.samples.push(sample(doc, id));
                }
            }
        }

        if looks_like_base64(text) {
            base64_candidates.push(Base64Candidate {
                tag: node.tag.clone(),
                length: text.chars().count(),
            });
        }
    }

    let root = doc.node(doc.root());
    StructureSurvey {
        root_tag: root.tag.clone(),
        root_attributes: root.attributes.clone(),
        total_nodes: doc.len(),
        tags: tags
            .into_iter()
            .map(|(tag, (count, attrs, has_text))| {
                let summary = TagSummary {
                    count,
                    sample_attributes: attrs.into_iter().take(MAX_ATTRIBUTE_SAMPLES).collect(),
                    has_text,
                };
                (tag, summary)
            })
            .collect(),
        keyword_matches: keyword_matches.into_iter().filter(|m| m.count > 0).collect(),
        base64_candidates,
    }
}

/// Load, parse and survey the file at `path`.
pub fn survey_file(path: impl AsRef<Path>) -> Result<StructureSurvey, ExtractionError> {
    let content = load_text(path.as_ref())?;
    let outcome = parse_resilient(&content.raw, &content.text)?;
    Ok(survey_document(&outcome.document))
}

fn mentions(doc: &Document, id: NodeId, keyword: &str) -> bool {
    let node = doc.node(id);
    contains_ci(&node.tag, keyword)
        || node
            .attributes
            .iter()
            .any(|(k, v)| contains_ci(k, keyword) || contains_ci(v, keyword))
}

fn sample(doc: &Document, id: NodeId) -> NodeSample {
    let node = doc.node(id);
    let text = doc.text(id);
    NodeSample {
        tag: node.tag.clone(),
        attributes: node.attributes.clone(),
        text_preview: (!text.is_empty()).then(|| preview(text, KEYWORD_TEXT_PREVIEW)),
    }
}

fn looks_like_base64(text: &str) -> bool {
    text.len() > BASE64_MIN_LEN && text.bytes().take(BASE64_PROBE_LEN).all(is_base64_byte)
}

// ============================================================================
// SEARCH
// ============================================================================

/// Where a search term was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchMatch {
    Tag {
        tag: String,
        attributes: Vec<(String, String)>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_preview: Option<String>,
    },
    Attribute {
        tag: String,
        name: String,
        value: String,
    },
    Text {
        tag: String,
        text_preview: String,
    },
}

/// Case-insensitive search over tag names, attribute names and values, and
/// node text, in document order. An empty term matches nothing.
pub fn search_document(doc: &Document, term: &str) -> Vec<SearchMatch> {
    let mut found = Vec::new();
    if term.is_empty() {
        return found;
    }

    for id in doc.iter() {
        let node = doc.node(id);
        let text = doc.text(id);

        if contains_ci(&node.tag, term) {
            found.push(SearchMatch::Tag {
                tag: node.tag.clone(),
                attributes: node.attributes.clone(),
                text_preview: (!text.is_empty()).then(|| preview(text, SEARCH_TEXT_PREVIEW)),
            });
        }
        for (name, value) in &node.attributes {
            if contains_ci(name, term) || contains_ci(value, term) {
                found.push(SearchMatch::Attribute {
                    tag: node.tag.clone(),
                    name: name.clone(),
                    value: preview(value, SEARCH_VALUE_PREVIEW),
                });
            }
        }
        if contains_ci(text, term) {
            found.push(SearchMatch::Text {
                tag: node.tag.clone(),
                text_preview: preview(text, SEARCH_VALUE_PREVIEW),
            });
        }
    }
    found
}

/// Load, parse and search the file at `path`.
pub fn search_file(path: impl AsRef<Path>, term: &str) -> Result<Vec<SearchMatch>, ExtractionError> {
    let content = load_text(path.as_ref())?;
    let outcome = parse_resilient(&content.raw, &content.text)?;
    Ok(search_document(&outcome.document, term))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// At most `max` characters, with `...` appended when cut.
fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
