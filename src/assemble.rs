//! Link-back pass.
//!
//! Turns the flat extractor output into a navigable [`Model`]:
//!
//! ```text
//! 1. package hierarchy   child id → parent.sub_packages   (resolvable, non-self parents)
//! 2. element membership  element id → package.elements    (resolvable packages)
//! 3. tagged values       index[element id] → element.tagged_values
//! 4. statistics          totals and frequency tables from the context
//! ```
//!
//! Every link is derived from the child's reference, so the result does not
//! depend on whether a parent appears before or after its children. Dangling
//! references leave the entity in place and unlinked.

use tracing::debug;

use crate::error::ExtractError;
use crate::extract::{Extraction, ExtractionContext};
use crate::model::Model;

/// Build the final model from extractor output and the run's context.
/// Returns the model and the run's non-fatal failures.
pub fn assemble(extraction: Extraction, ctx: ExtractionContext<'_>) -> (Model, Vec<ExtractError>) {
    let Extraction {
        info,
        mut packages,
        mut elements,
        diagrams,
        connectors,
        tagged_values,
    } = extraction;

    let hierarchy: Vec<(String, String)> = packages
        .values()
        .filter_map(|p| {
            let parent = p.parent_id.as_ref()?;
            (parent != &p.id && packages.contains_key(parent))
                .then(|| (parent.clone(), p.id.clone()))
        })
        .collect();
    for (parent, child) in hierarchy {
        if let Some(package) = packages.get_mut(&parent) {
            package.sub_packages.push(child);
        }
    }

    let mut unplaced = 0usize;
    for element in elements.values() {
        match element.package_id.as_ref().and_then(|id| packages.get_mut(id)) {
            Some(package) => package.elements.push(element.id.clone()),
            None => unplaced += 1,
        }
    }
    if unplaced > 0 {
        debug!(count = unplaced, "elements without a resolvable package");
    }

    for (id, element) in elements.iter_mut() {
        if let Some(values) = tagged_values.get(id) {
            element.tagged_values = values.clone();
        }
    }

    let model = Model {
        info,
        packages,
        elements,
        diagrams,
        connectors,
        tagged_values,
        authors: ctx.authors,
        versions: ctx.versions,
        stats: ctx.stats,
    };
    (model, ctx.warnings)
}
