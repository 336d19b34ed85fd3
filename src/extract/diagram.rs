//! Diagram extraction: metadata, element placements and image payloads.

use tracing::{debug, trace};

use crate::error::{ExtractError, XmlError};
use crate::model::{Diagram, DiagramElement};
use crate::xml::{Document, NodeId};

use super::context::ExtractionContext;
use super::fields;
use super::image;
use super::lookup::{entity_id, notes, union};
use super::package::enclosing_package;

/// Serialization conventions for "a diagram".
const DIAGRAM_PATHS: &[&str] = &[
    ".//Diagrams/Diagram",
    ".//Diagram",
    ".//diagrams/diagram",
    ".//Extension//diagrams",
    ".//t_diagram",
    ".//EAP//diagrams//diagram",
];

/// Serialization conventions for "an element placed on a diagram".
const PLACEMENT_PATHS: &[&str] = &[
    ".//DiagramElements/DiagramElement",
    ".//DiagramElement",
    ".//elements/element",
    ".//diagramElement",
    ".//DiagramObjects/DiagramObject",
    ".//DiagramObject",
];

const UNNAMED: &str = "Unnamed Diagram";
const UNTYPED: &str = "Unknown";

/// Every diagram found under any known convention, each once.
pub fn extract(
    doc: &Document,
    ctx: &mut ExtractionContext<'_>,
) -> Result<Vec<Diagram>, ExtractError> {
    let candidates = union(doc, doc.root(), DIAGRAM_PATHS)?;
    debug!(count = candidates.len(), "diagram candidates");

    let mut diagrams = Vec::with_capacity(candidates.len());
    for node in candidates {
        let diagram = build(doc, node, ctx)?;
        trace!(
            id = %diagram.id,
            name = %diagram.name,
            has_image = diagram.has_image,
            "diagram"
        );
        diagrams.push(diagram);
    }
    Ok(diagrams)
}

fn build(
    doc: &Document,
    node: NodeId,
    ctx: &mut ExtractionContext<'_>,
) -> Result<Diagram, ExtractError> {
    let name = fields::DIAGRAM_NAME.get_or(doc, node, UNNAMED);
    let notes =
        notes(doc, node).map_err(|e| ExtractError::new(format!("notes of diagram {name}"), e))?;
    let elements = placements(doc, node)
        .map_err(|e| ExtractError::new(format!("placements of diagram {name}"), e))?;

    let package_id = fields::PACKAGE_ID.get(doc, node).or_else(|| {
        ctx.config
            .infer_parent_from_nesting
            .then(|| enclosing_package(doc, node))
            .flatten()
    });

    let mut diagram = Diagram {
        id: entity_id(doc, node, fields::DIAGRAM_ID),
        name,
        diagram_type: fields::DIAGRAM_TYPE.get_or(doc, node, UNTYPED),
        package_id,
        author: fields::AUTHOR.get(doc, node),
        version: fields::VERSION.get(doc, node),
        created: fields::CREATED.get(doc, node),
        modified: fields::MODIFIED.get(doc, node),
        notes,
        elements,
        style_ex: fields::STYLE_EX.get(doc, node),
        swim_lanes: fields::SWIM_LANES.get(doc, node),
        scale: fields::SCALE.get(doc, node),
        ..Diagram::default()
    };

    match image::probe(doc, node, ctx.config) {
        Ok(Some(found)) => {
            debug!(diagram = %diagram.name, format = %found.format, "image payload");
            diagram.has_image = true;
            diagram.image_data = Some(found.data);
            diagram.image_format = Some(found.format);
        }
        Ok(None) => {}
        Err(e) => ctx.warn(ExtractError::new(format!("image of diagram {}", diagram.name), e)),
    }

    Ok(diagram)
}

fn placements(doc: &Document, diagram: NodeId) -> Result<Vec<DiagramElement>, XmlError> {
    Ok(union(doc, diagram, PLACEMENT_PATHS)?
        .into_iter()
        .map(|node| DiagramElement {
            element_id: fields::PLACED_ELEMENT.get(doc, node),
            geometry: fields::GEOMETRY.get(doc, node),
            style: fields::STYLE.get(doc, node),
            left: fields::LEFT.get(doc, node),
            top: fields::TOP.get(doc, node),
            right: fields::RIGHT.get(doc, node),
            bottom: fields::BOTTOM.get(doc, node),
            sequence: fields::SEQUENCE.get(doc, node),
        })
        .collect())
}
