//! Fallback-chain attribute lookup and the shared per-node helpers.
//!
//! Exporters disagree on attribute spelling (`Id`, `id`, `xmi.id`, `xmi:id`),
//! so every scalar field is resolved from an ordered [`FieldChain`] of
//! candidate names: the first present, non-blank value wins.

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::error::XmlError;
use crate::xml::{Document, NodeId};

/// An ordered list of candidate attribute names for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldChain(&'static [&'static str]);

impl FieldChain {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.0
    }

    /// First present, non-blank candidate value.
    pub fn lookup<'d>(&self, doc: &'d Document, node: NodeId) -> Option<&'d str> {
        self.0
            .iter()
            .filter_map(|name| doc.attr(node, name))
            .find(|value| !value.trim().is_empty())
    }

    /// Owned variant of [`FieldChain::lookup`].
    pub fn get(&self, doc: &Document, node: NodeId) -> Option<String> {
        self.lookup(doc, node).map(str::to_string)
    }

    /// Lookup with a placeholder for absent values.
    pub fn get_or(&self, doc: &Document, node: NodeId, default: &str) -> String {
        self.lookup(doc, node).unwrap_or(default).to_string()
    }

    /// True if any candidate is `true` (or `1`).
    pub fn is_true(&self, doc: &Document, node: NodeId) -> bool {
        self.0.iter().filter_map(|name| doc.attr(node, name)).any(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        })
    }
}

/// Notes of a node: text of a direct `Notes`/`Documentation` child, else
/// the `Notes` attribute, else empty.
pub fn notes(doc: &Document, node: NodeId) -> Result<String, XmlError> {
    for path in ["Notes", "Documentation", "notes", "documentation"] {
        if let Some(child) = doc.find(node, path)? {
            return Ok(doc.text(child).to_string());
        }
    }
    Ok(super::fields::NOTES_ATTR
        .lookup(doc, node)
        .unwrap_or_default()
        .to_string())
}

/// Union of several path queries, de-duplicated by node identity, in
/// discovery order: nodes of the first path, then new nodes of the next.
pub fn union(doc: &Document, context: NodeId, paths: &[&str]) -> Result<Vec<NodeId>, XmlError> {
    let mut found = IndexSet::new();
    for path in paths {
        found.extend(doc.find_all(context, path)?);
    }
    Ok(found.into_iter().collect())
}

/// The id of a node from `chain`, or a synthesized one.
pub fn entity_id(doc: &Document, node: NodeId, chain: FieldChain) -> String {
    chain
        .get(doc, node)
        .unwrap_or_else(|| synthesize_id(doc, node))
}

/// Deterministic id for a node that carries none: tag, attributes and
/// document position hashed with `FxHasher`. Stable across runs over the
/// same input.
pub fn synthesize_id(doc: &Document, node: NodeId) -> String {
    let data = doc.node(node);
    let mut hasher = FxHasher::default();
    data.tag.hash(&mut hasher);
    data.attributes.hash(&mut hasher);
    node.index().hash(&mut hasher);
    format!("_{}_{:016x}", data.local.to_ascii_lowercase(), hasher.finish())
}
