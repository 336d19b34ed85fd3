//! Analyzer configuration.
//!
//! The payload thresholds default to the values of the classic EA analyzer.
//! Nesting inference and magic-number sniffing are extensions and default to
//! on. `AnalyzerConfig::default()` is what most callers want.

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Tunables for an analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum payload length before a text containing `EMF`/`WMF` is
    /// classified as a vendor metafile.
    pub metafile_min_len: usize,

    /// Minimum payload length before unrecognised text is accepted as an
    /// unknown binary image payload.
    pub unknown_payload_min_len: usize,

    /// Derive a missing parent/package id from the nearest enclosing
    /// package node (XMI nests packages instead of referencing them).
    pub infer_parent_from_nesting: bool,

    /// Refine a generic `image` classification by inspecting the magic
    /// number of the decoded base64 payload.
    pub sniff_image_magic: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            metafile_min_len: 100,
            unknown_payload_min_len: 50,
            infer_parent_from_nesting: true,
            sniff_image_magic: true,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(json)
            .map_err(|e| ExtractionError::config(e.to_string()))
    }

    /// Set the metafile length threshold.
    pub fn with_metafile_min_len(mut self, len: usize) -> Self {
        self.metafile_min_len = len;
        self
    }

    /// Set the unknown-payload length threshold.
    pub fn with_unknown_payload_min_len(mut self, len: usize) -> Self {
        self.unknown_payload_min_len = len;
        self
    }

    /// Enable or disable parent inference from document nesting.
    pub fn with_nesting_inference(mut self, enabled: bool) -> Self {
        self.infer_parent_from_nesting = enabled;
        self
    }

    /// Enable or disable magic-number refinement of image formats.
    pub fn with_image_sniffing(mut self, enabled: bool) -> Self {
        self.sniff_image_magic = enabled;
        self
    }
}
