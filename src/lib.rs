//! # eaxml-base
//!
//! Core library for extracting a structured object model (packages, elements,
//! diagrams, connectors, tagged values) from XML exports of UML modeling tools.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analyze   → Analyzer, analyze(path), background and batch runners
//!   ↓
//! assemble  → Link-back pass (hierarchy, membership, tagged values) + stats
//!   ↓
//! extract   → Entity extractors, fallback-chain lookup, classification, image detection
//!   ↓
//! xml       → Arena document, resilient parser, prefix recovery, path queries
//!   ↓
//! load      → Encoding-tolerant content loading
//!   ↓
//! model     → Output types (Model, Package, Element, Diagram, Connector, Stats)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use eaxml::analyze;
//!
//! let analysis = analyze("model.xml")?;
//! println!("{} elements", analysis.model.stats.total_elements);
//! ```

// ============================================================================
// MODULES (dependency order: model → load → xml → extract → assemble → analyze)
// ============================================================================

/// Error types: fatal extraction errors, XML errors, non-fatal extractor errors
pub mod error;

/// Analyzer configuration
pub mod config;

/// Output model: packages, elements, diagrams, connectors, tagged values, stats
pub mod model;

/// Content loading with encoding fallbacks
pub mod load;

/// XML document tree, resilient parsing, path queries
pub mod xml;

/// Entity extractors and the shared recognition helpers
pub mod extract;

/// Post-extraction link-back pass
pub mod assemble;

/// Analysis entry points
pub mod analyze;

/// Structure survey and content search over a parsed document
pub mod survey;

/// Report export formats (JSON, YAML)
#[cfg(feature = "export")]
pub mod export;

pub use analyze::{Analysis, AnalysisHandle, Analyzer, analyze};
pub use config::AnalyzerConfig;
pub use error::{ExtractError, ExtractionError, XmlError};
pub use model::{
    Attribute, Connector, Diagram, DiagramElement, Element, ImageFormat, Model, ModelInfo,
    Operation, Package, Parameter, Role, Stats, TaggedValue,
};
pub use xml::{Document, NodeId, ParseStrategy};
