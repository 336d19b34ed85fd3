//! Derived statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label used when a connector carries no type.
pub(crate) const UNTYPED_LABEL: &str = "Unknown";

/// Entity totals and per-type frequency tables.
///
/// Frequency tables are filled as each entity is committed during extraction,
/// so label order follows first occurrence in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_packages: usize,
    pub total_elements: usize,
    pub total_diagrams: usize,
    pub total_connectors: usize,
    pub element_types: IndexMap<String, usize>,
    pub diagram_types: IndexMap<String, usize>,
    pub connector_types: IndexMap<String, usize>,
}

impl Stats {
    pub fn record_package(&mut self) {
        self.total_packages += 1;
    }

    pub fn record_element_type(&mut self, label: &str) {
        self.total_elements += 1;
        bump(&mut self.element_types, label);
    }

    pub fn record_diagram_type(&mut self, label: &str) {
        self.total_diagrams += 1;
        bump(&mut self.diagram_types, label);
    }

    pub fn record_connector_type(&mut self, label: Option<&str>) {
        self.total_connectors += 1;
        bump(&mut self.connector_types, label.unwrap_or(UNTYPED_LABEL));
    }

    /// The `n` most frequent element types, most frequent first.
    pub fn most_common_element_types(&self, n: usize) -> Vec<(&str, usize)> {
        most_common(&self.element_types, n)
    }

    /// The `n` most frequent diagram types, most frequent first.
    pub fn most_common_diagram_types(&self, n: usize) -> Vec<(&str, usize)> {
        most_common(&self.diagram_types, n)
    }

    /// The `n` most frequent connector types, most frequent first.
    pub fn most_common_connector_types(&self, n: usize) -> Vec<(&str, usize)> {
        most_common(&self.connector_types, n)
    }
}

fn bump(table: &mut IndexMap<String, usize>, label: &str) {
    *table.entry(label.to_string()).or_insert(0) += 1;
}

/// Ties keep first-seen order (stable sort).
fn most_common(table: &IndexMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = table.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
