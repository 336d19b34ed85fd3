//! Element extraction with attribute, operation and parameter sub-extraction.
//!
//! Sub-extraction is isolated per element and per facet: a failure while
//! reading one element's attributes leaves that element's attribute list
//! empty and is reported as a warning naming the element.

use tracing::trace;

use crate::error::{ExtractError, XmlError};
use crate::model::{Attribute, Element, Operation, Parameter};
use crate::xml::{Document, NodeId, local_name};

use super::classify::{EntityKind, is_kind};
use super::context::ExtractionContext;
use super::fields;
use super::lookup::{entity_id, notes, union};
use super::package::enclosing_package;

const ATTRIBUTE_PATHS: &[&str] = &[".//Attributes/Attribute", ".//Attribute", "ownedAttribute"];
const OPERATION_PATHS: &[&str] = &[".//Operations/Operation", ".//Operation", "ownedOperation"];
const PARAMETER_PATHS: &[&str] = &[".//Parameters/Parameter", ".//Parameter", "ownedParameter"];

const UNNAMED: &str = "Unnamed Element";
const UNNAMED_MEMBER: &str = "unnamed";

/// Every node classified as an element, in document order.
pub fn extract(
    doc: &Document,
    ctx: &mut ExtractionContext<'_>,
) -> Result<Vec<Element>, ExtractError> {
    let mut elements = Vec::new();
    for node in doc.iter() {
        if !is_kind(doc, node, EntityKind::Element) {
            continue;
        }
        let element = build(doc, node, ctx)?;
        trace!(id = %element.id, element_type = %element.element_type, "element");
        elements.push(element);
    }
    Ok(elements)
}

fn build(
    doc: &Document,
    node: NodeId,
    ctx: &mut ExtractionContext<'_>,
) -> Result<Element, ExtractError> {
    let name = fields::NAME.get_or(doc, node, UNNAMED);
    let notes =
        notes(doc, node).map_err(|e| ExtractError::new(format!("notes of element {name}"), e))?;

    let element_type = fields::TYPE
        .lookup(doc, node)
        .map(|t| local_name(t.trim()).to_string())
        .unwrap_or_else(|| doc.local(node).to_string());

    let package_id = fields::PACKAGE_ID.get(doc, node).or_else(|| {
        ctx.config
            .infer_parent_from_nesting
            .then(|| enclosing_package(doc, node))
            .flatten()
    });

    let attributes = attributes(doc, node).unwrap_or_else(|e| {
        ctx.warn(ExtractError::new(format!("attributes of element {name}"), e));
        Vec::new()
    });
    let operations = operations(doc, node).unwrap_or_else(|e| {
        ctx.warn(ExtractError::new(format!("operations of element {name}"), e));
        Vec::new()
    });

    Ok(Element {
        id: entity_id(doc, node, fields::ID),
        name,
        element_type,
        package_id,
        stereotype: fields::STEREOTYPE.get(doc, node),
        notes,
        is_abstract: fields::ABSTRACT.is_true(doc, node),
        visibility: fields::VISIBILITY.get(doc, node),
        author: fields::AUTHOR.get(doc, node),
        version: fields::VERSION.get(doc, node),
        created: fields::CREATED.get(doc, node),
        modified: fields::MODIFIED.get(doc, node),
        complexity: fields::COMPLEXITY.get(doc, node),
        status: fields::STATUS.get(doc, node),
        attributes,
        operations,
        tagged_values: Vec::new(),
    })
}

/// Nodes under `owner` matching `paths` that belong to `owner` itself rather
/// than to an element nested inside it.
fn owned(doc: &Document, owner: NodeId, paths: &[&str]) -> Result<Vec<NodeId>, XmlError> {
    let mut nodes = union(doc, owner, paths)?;
    nodes.retain(|&n| {
        doc.ancestors(n)
            .take_while(|&a| a != owner)
            .all(|a| !is_kind(doc, a, EntityKind::Element))
    });
    Ok(nodes)
}

fn attributes(doc: &Document, element: NodeId) -> Result<Vec<Attribute>, XmlError> {
    owned(doc, element, ATTRIBUTE_PATHS)?
        .into_iter()
        .map(|node| -> Result<Attribute, XmlError> {
            Ok(Attribute {
                id: fields::ID.get(doc, node),
                name: fields::NAME.get_or(doc, node, UNNAMED_MEMBER),
                attr_type: fields::MEMBER_TYPE.get(doc, node),
                visibility: fields::VISIBILITY.get(doc, node),
                is_static: fields::STATIC.is_true(doc, node),
                default: fields::DEFAULT.get(doc, node),
                notes: notes(doc, node)?,
                stereotype: fields::STEREOTYPE.get(doc, node),
            })
        })
        .collect()
}

fn operations(doc: &Document, element: NodeId) -> Result<Vec<Operation>, XmlError> {
    owned(doc, element, OPERATION_PATHS)?
        .into_iter()
        .map(|node| -> Result<Operation, XmlError> {
            Ok(Operation {
                id: fields::ID.get(doc, node),
                name: fields::NAME.get_or(doc, node, UNNAMED_MEMBER),
                return_type: fields::MEMBER_TYPE.get(doc, node),
                visibility: fields::VISIBILITY.get(doc, node),
                is_static: fields::STATIC.is_true(doc, node),
                is_abstract: fields::ABSTRACT.is_true(doc, node),
                notes: notes(doc, node)?,
                stereotype: fields::STEREOTYPE.get(doc, node),
                parameters: parameters(doc, node)?,
            })
        })
        .collect()
}

fn parameters(doc: &Document, operation: NodeId) -> Result<Vec<Parameter>, XmlError> {
    Ok(union(doc, operation, PARAMETER_PATHS)?
        .into_iter()
        .map(|node| Parameter {
            name: fields::NAME.get(doc, node),
            param_type: fields::MEMBER_TYPE.get(doc, node),
            kind: fields::PARAMETER_KIND.get(doc, node),
            default: fields::DEFAULT.get(doc, node),
        })
        .collect())
}
