//! Entity extraction.
//!
//! ```text
//! Document ──▶ model_info ─┐
//!          ──▶ package ────┤
//!          ──▶ element ────┤  each step returns Result; a failed step is
//!          ──▶ diagram ────┤  logged, kept as a warning and contributes
//!          ──▶ connector ──┤  nothing, the others still run
//!          ──▶ tagged_value┘
//!                 │
//!                 ▼
//!            Extraction (+ ExtractionContext: stats, authors, versions, warnings)
//! ```
//!
//! Entities are committed to the [`Extraction`] only when their extractor
//! succeeds. Totals count every committed entity, including one whose id
//! repeats an earlier one and replaces it in the collection.

mod classify;
mod connector;
mod context;
mod diagram;
mod element;
pub mod fields;
pub mod image;
mod lookup;
mod model_info;
mod package;
mod tagged_value;

use indexmap::IndexMap;
use tracing::debug;

pub use classify::{EntityKind, classify};
pub use context::ExtractionContext;
pub use lookup::{FieldChain, synthesize_id};

use crate::error::ExtractError;
use crate::model::{Connector, Diagram, Element, ModelInfo, Package, TaggedValue};
use crate::xml::Document;

/// Collections produced by the extractors, before link-back.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub info: ModelInfo,
    pub packages: IndexMap<String, Package>,
    pub elements: IndexMap<String, Element>,
    pub diagrams: IndexMap<String, Diagram>,
    pub connectors: IndexMap<String, Connector>,
    /// Element id → tagged values, in document order.
    pub tagged_values: IndexMap<String, Vec<TaggedValue>>,
}

/// Run every extractor over `doc`, isolating failures per step.
pub fn extract_all(doc: &Document, ctx: &mut ExtractionContext<'_>) -> Extraction {
    let mut out = Extraction {
        info: isolate(ctx, "model info", |_| model_info::extract(doc)).unwrap_or_else(|| {
            ModelInfo {
                name: "Unknown Model".to_string(),
                model_type: "Unknown".to_string(),
                ..ModelInfo::default()
            }
        }),
        ..Extraction::default()
    };

    if let Some(packages) = isolate(ctx, "packages", |ctx| package::extract(doc, ctx)) {
        for package in packages {
            ctx.track_provenance(package.author.as_deref(), package.version.as_deref());
            ctx.stats.record_package();
            insert_unique(&mut out.packages, package.id.clone(), package, "package");
        }
    }

    if let Some(elements) = isolate(ctx, "elements", |ctx| element::extract(doc, ctx)) {
        for element in elements {
            ctx.track_provenance(element.author.as_deref(), element.version.as_deref());
            ctx.stats.record_element_type(&element.element_type);
            insert_unique(&mut out.elements, element.id.clone(), element, "element");
        }
    }

    if let Some(diagrams) = isolate(ctx, "diagrams", |ctx| diagram::extract(doc, ctx)) {
        for diagram in diagrams {
            ctx.track_provenance(diagram.author.as_deref(), diagram.version.as_deref());
            ctx.stats.record_diagram_type(&diagram.diagram_type);
            insert_unique(&mut out.diagrams, diagram.id.clone(), diagram, "diagram");
        }
    }

    if let Some(connectors) = isolate(ctx, "connectors", |_| connector::extract(doc)) {
        for connector in connectors {
            ctx.stats.record_connector_type(connector.connector_type.as_deref());
            insert_unique(&mut out.connectors, connector.id.clone(), connector, "connector");
        }
    }

    if let Some(values) = isolate(ctx, "tagged values", |_| tagged_value::extract(doc)) {
        for owned in values {
            match owned.owner {
                Some(owner) => out.tagged_values.entry(owner).or_default().push(owned.value),
                None => ctx.orphan_tagged_values += 1,
            }
        }
        if ctx.orphan_tagged_values > 0 {
            debug!(count = ctx.orphan_tagged_values, "tagged values without owner discarded");
        }
    }

    out
}

/// Run one extraction step; on failure log it, keep it as a warning and
/// yield nothing.
fn isolate<T>(
    ctx: &mut ExtractionContext<'_>,
    facet: &str,
    step: impl FnOnce(&mut ExtractionContext<'_>) -> Result<T, ExtractError>,
) -> Option<T> {
    match step(ctx) {
        Ok(value) => Some(value),
        Err(err) => {
            ctx.warn(err.within(facet));
            None
        }
    }
}

/// Insert keyed by id; a later entity with the same id replaces the earlier
/// one in place.
fn insert_unique<T>(map: &mut IndexMap<String, T>, id: String, value: T, kind: &str) {
    if map.insert(id.clone(), value).is_some() {
        debug!(id = %id, kind, "duplicate id, later entity kept");
    }
}
