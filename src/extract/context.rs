//! Per-run extraction state.

use indexmap::IndexSet;
use tracing::warn;

use crate::config::AnalyzerConfig;
use crate::error::ExtractError;
use crate::model::Stats;

/// Accumulators for one analysis run. Each run owns its context, so
/// concurrent runs share nothing.
#[derive(Debug)]
pub struct ExtractionContext<'c> {
    pub config: &'c AnalyzerConfig,
    pub stats: Stats,
    /// Distinct authors in first-seen order.
    pub authors: IndexSet<String>,
    /// Distinct versions in first-seen order.
    pub versions: IndexSet<String>,
    /// Non-fatal failures, in the order they occurred.
    pub warnings: Vec<ExtractError>,
    /// Tagged values dropped for lack of an owning element id.
    pub orphan_tagged_values: usize,
}

impl<'c> ExtractionContext<'c> {
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Self {
            config,
            stats: Stats::default(),
            authors: IndexSet::new(),
            versions: IndexSet::new(),
            warnings: Vec::new(),
            orphan_tagged_values: 0,
        }
    }

    /// Log and keep a non-fatal failure.
    pub fn warn(&mut self, err: ExtractError) {
        warn!(facet = %err.facet, "extraction step failed: {}", err.message);
        self.warnings.push(err);
    }

    /// Record entity provenance.
    pub fn track_provenance(&mut self, author: Option<&str>, version: Option<&str>) {
        if let Some(author) = author {
            self.authors.insert(author.to_string());
        }
        if let Some(version) = version {
            self.versions.insert(version.to_string());
        }
    }
}
