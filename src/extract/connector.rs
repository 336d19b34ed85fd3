//! Connector (relationship) extraction.

use tracing::trace;

use crate::error::{ExtractError, XmlError};
use crate::model::{Connector, Role};
use crate::xml::{Document, NodeId};

use super::fields;
use super::lookup::{entity_id, notes, union};

const CONNECTOR_PATHS: &[&str] = &[".//Connectors/Connector", ".//Connector"];

/// Every connector, each once. Endpoint ids are kept whether or not they
/// resolve to an extracted element.
pub fn extract(doc: &Document) -> Result<Vec<Connector>, ExtractError> {
    union(doc, doc.root(), CONNECTOR_PATHS)?
        .into_iter()
        .map(|node| -> Result<Connector, ExtractError> {
            let connector = build(doc, node)?;
            trace!(
                id = %connector.id,
                source = ?connector.source_id,
                target = ?connector.target_id,
                "connector"
            );
            Ok(connector)
        })
        .collect()
}

fn build(doc: &Document, node: NodeId) -> Result<Connector, ExtractError> {
    let id = entity_id(doc, node, fields::ID);
    let wrap = |e: XmlError| ExtractError::new(format!("connector {id}"), e);

    Ok(Connector {
        name: fields::NAME.get(doc, node),
        connector_type: fields::MEMBER_TYPE.get(doc, node),
        source_id: fields::SOURCE_ID.get(doc, node),
        target_id: fields::TARGET_ID.get(doc, node),
        direction: fields::DIRECTION.get(doc, node),
        stereotype: fields::STEREOTYPE.get(doc, node),
        notes: notes(doc, node).map_err(wrap)?,
        source_role: role(doc, node, ".//SourceRole", ".//Source").map_err(wrap)?,
        target_role: role(doc, node, ".//TargetRole", ".//Target").map_err(wrap)?,
        id,
    })
}

/// The first `primary` descendant, else the first `fallback` descendant.
fn role(
    doc: &Document,
    connector: NodeId,
    primary: &str,
    fallback: &str,
) -> Result<Option<Role>, XmlError> {
    let found = match doc.find(connector, primary)? {
        Some(node) => Some(node),
        None => doc.find(connector, fallback)?,
    };
    Ok(found.map(|node| Role {
        name: fields::NAME.get(doc, node),
        multiplicity: fields::MULTIPLICITY.get(doc, node),
        visibility: fields::VISIBILITY.get(doc, node),
    }))
}
