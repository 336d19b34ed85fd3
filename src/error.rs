//! Error types for model extraction.
//!
//! Two severities exist:
//!
//! - [`ExtractionError`] is fatal and aborts the whole analysis.
//! - [`ExtractError`] is non-fatal: the orchestrator logs it and continues with
//!   an empty result for the affected facet.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced to the caller of an analysis.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The input file could not be read at all.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No recovery strategy produced a document tree.
    #[error("Invalid XML format: {0}")]
    InvalidFormat(String),

    /// Unexpected internal failure (e.g. the analysis worker panicked).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serializing an analysis report failed.
    #[error("Export error: {0}")]
    Export(String),

    /// An analyzer configuration could not be read.
    #[error("Invalid analyzer configuration: {0}")]
    Config(String),
}

impl ExtractionError {
    /// Create a read error for a path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if the input could not be read.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Returns true if the input was not parseable under any strategy.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

/// Errors raised while building or querying a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// Lexical or well-formedness error reported by the tokenizer.
    #[error("XML syntax error at position {position}: {message}")]
    Syntax { position: u64, message: String },

    /// An element or attribute prefix has no in-scope `xmlns:` declaration.
    #[error("Unbound namespace prefix '{prefix}' at position {position}")]
    UnboundPrefix { prefix: String, position: u64 },

    /// The raw bytes are not valid UTF-8.
    #[error("Invalid UTF-8 in input: {0}")]
    Encoding(String),

    /// Structural problem (no root, multiple roots, unclosed elements).
    #[error("Malformed document: {0}")]
    Structure(String),

    /// A path expression could not be parsed.
    #[error("Invalid path expression '{path}': {message}")]
    Path { path: String, message: String },
}

impl XmlError {
    /// Create a syntax error.
    pub fn syntax(position: u64, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Create a structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    /// Create a path error.
    pub fn path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A non-fatal failure inside one extractor or sub-extractor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{facet}: {message}")]
pub struct ExtractError {
    /// The facet that failed ("packages", "attributes of Order", ...).
    pub facet: String,
    /// Human-readable cause.
    pub message: String,
}

impl ExtractError {
    pub fn new(facet: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            facet: facet.into(),
            message: message.to_string(),
        }
    }

    /// Re-label the error with the facet it was isolated in.
    pub fn within(self, facet: impl Into<String>) -> Self {
        Self {
            facet: facet.into(),
            message: format!("{}: {}", self.facet, self.message),
        }
    }
}

impl From<XmlError> for ExtractError {
    fn from(err: XmlError) -> Self {
        Self::new("xml", err)
    }
}
