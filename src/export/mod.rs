//! Report export formats.
//!
//! An [`Analysis`] serializes losslessly (nested mappings, ordered sequences,
//! optional fields, free text) to every format here, and reads back to an
//! equal value.
//!
//! ```text
//! Analysis ──▶ ReportFormat::write ──▶ bytes (JSON | YAML)
//!          ◀── ReportFormat::read  ◀──
//! ```

mod json;
mod yaml;

use std::path::Path;

pub use json::Json;
pub use yaml::Yaml;

use crate::analyze::Analysis;
use crate::error::ExtractionError;

/// A serialization format for analysis reports.
pub trait ReportFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Serialize a report.
    fn write(&self, analysis: &Analysis) -> Result<Vec<u8>, ExtractionError>;

    /// Read a report previously written in this format.
    fn read(&self, input: &[u8]) -> Result<Analysis, ExtractionError>;
}

/// Supported report file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    &["json", "yaml", "yml"]
}

/// Detect format from file extension.
pub fn detect_format(path: &Path) -> Option<Box<dyn ReportFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(Json::default())),
        "yaml" | "yml" => Some(Box::new(Yaml)),
        _ => None,
    }
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<Box<dyn ReportFormat>> {
    match mime {
        "application/json" => Some(Box::new(Json::default())),
        "application/x-yaml" | "text/yaml" => Some(Box::new(Yaml)),
        _ => None,
    }
}

/// Write `analysis` to `path` in the format implied by its extension.
pub fn export_to_path(analysis: &Analysis, path: &Path) -> Result<(), ExtractionError> {
    let format = detect_format(path).ok_or_else(|| {
        ExtractionError::export(format!("unsupported report extension: {}", path.display()))
    })?;
    let bytes = format.write(analysis)?;
    std::fs::write(path, bytes)
        .map_err(|e| ExtractionError::export(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), format = format.name(), "report written");
    Ok(())
}
