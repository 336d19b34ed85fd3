//! Package extraction.

use tracing::trace;

use crate::error::ExtractError;
use crate::model::Package;
use crate::xml::{Document, NodeId};

use super::classify::{EntityKind, is_kind};
use super::context::ExtractionContext;
use super::fields;
use super::lookup::{entity_id, notes};

const UNNAMED: &str = "Unnamed Package";

/// Every node classified as a package, in document order.
pub fn extract(doc: &Document, ctx: &ExtractionContext<'_>) -> Result<Vec<Package>, ExtractError> {
    let mut packages = Vec::new();
    for node in doc.iter() {
        if !is_kind(doc, node, EntityKind::Package) {
            continue;
        }
        let package = build(doc, node, ctx)?;
        trace!(id = %package.id, name = %package.name, "package");
        packages.push(package);
    }
    Ok(packages)
}

fn build(doc: &Document, node: NodeId, ctx: &ExtractionContext<'_>) -> Result<Package, ExtractError> {
    let name = fields::NAME.get_or(doc, node, UNNAMED);
    let notes = notes(doc, node).map_err(|e| ExtractError::new(format!("notes of package {name}"), e))?;

    let parent_id = fields::PARENT_ID.get(doc, node).or_else(|| {
        ctx.config
            .infer_parent_from_nesting
            .then(|| enclosing_package(doc, node))
            .flatten()
    });

    Ok(Package {
        id: entity_id(doc, node, fields::ID),
        name,
        parent_id,
        stereotype: fields::STEREOTYPE.get(doc, node),
        notes,
        author: fields::AUTHOR.get(doc, node),
        version: fields::VERSION.get(doc, node),
        created: fields::CREATED.get(doc, node),
        modified: fields::MODIFIED.get(doc, node),
        elements: Vec::new(),
        sub_packages: Vec::new(),
    })
}

/// Id of the nearest ancestor classified as a package.
pub(super) fn enclosing_package(doc: &Document, node: NodeId) -> Option<String> {
    doc.ancestors(node)
        .find(|&a| is_kind(doc, a, EntityKind::Package))
        .map(|a| entity_id(doc, a, fields::ID))
}
