//! YAML report format.

use super::ReportFormat;
use crate::analyze::Analysis;
use crate::error::ExtractionError;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl ReportFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn write(&self, analysis: &Analysis) -> Result<Vec<u8>, ExtractionError> {
        serde_yaml::to_string(analysis)
            .map(String::into_bytes)
            .map_err(|e| ExtractionError::export(format!("YAML serialization failed: {e}")))
    }

    fn read(&self, input: &[u8]) -> Result<Analysis, ExtractionError> {
        serde_yaml::from_slice(input)
            .map_err(|e| ExtractionError::export(format!("invalid YAML report: {e}")))
    }
}
