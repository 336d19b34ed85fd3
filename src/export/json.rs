//! JSON report format.

use super::ReportFormat;
use crate::analyze::Analysis;
use crate::error::ExtractionError;

/// JSON format handler. Pretty-printed unless `compact` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    pub compact: bool,
}

impl Json {
    pub fn compact() -> Self {
        Self { compact: true }
    }
}

impl ReportFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, analysis: &Analysis) -> Result<Vec<u8>, ExtractionError> {
        let result = if self.compact {
            serde_json::to_vec(analysis)
        } else {
            serde_json::to_vec_pretty(analysis)
        };
        result.map_err(|e| ExtractionError::export(format!("JSON serialization failed: {e}")))
    }

    fn read(&self, input: &[u8]) -> Result<Analysis, ExtractionError> {
        serde_json::from_slice(input)
            .map_err(|e| ExtractionError::export(format!("invalid JSON report: {e}")))
    }
}
