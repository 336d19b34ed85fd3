//! Analysis entry points.
//!
//! ```text
//! path ─▶ load (encodings) ─▶ parse_resilient ─▶ extract_all ─▶ assemble ─▶ Analysis
//!           │ Read error          │ InvalidFormat      │ warnings (non-fatal)
//! ```
//!
//! Every run builds a fresh [`ExtractionContext`], so an [`Analyzer`] can be
//! shared across threads and reused without carrying state between files.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assemble::assemble;
use crate::config::AnalyzerConfig;
use crate::error::{ExtractError, ExtractionError};
use crate::extract::{ExtractionContext, extract_all};
use crate::load::{LoadedContent, decode_bytes, load_text};
use crate::model::Model;
use crate::xml::{Document, ParseStrategy, parse_resilient};

const WORKER_THREAD_NAME: &str = "eaxml-analysis";

/// The result of analyzing one file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub file_name: String,
    /// Size of the decoded text in bytes (UTF-8).
    pub file_size: usize,
    /// Encoding that decoded the file.
    pub encoding: String,
    /// True when the file only decoded with replacement characters.
    pub lossy_decode: bool,
    pub parse_strategy: ParseStrategy,
    pub model: Model,
    /// Non-fatal extraction failures, in order.
    pub warnings: Vec<String>,
}

/// Runs analyses with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze the file at `path`.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Analysis, ExtractionError> {
        let path = path.as_ref();
        let content = load_text(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.analyze_content(file_name, content)
    }

    /// Analyze in-memory bytes as if read from a file called `file_name`.
    pub fn analyze_bytes(
        &self,
        file_name: impl Into<String>,
        raw: Vec<u8>,
    ) -> Result<Analysis, ExtractionError> {
        self.analyze_content(file_name.into(), decode_bytes(raw))
    }

    /// Analyze XML text.
    pub fn analyze_str(
        &self,
        file_name: impl Into<String>,
        text: &str,
    ) -> Result<Analysis, ExtractionError> {
        self.analyze_bytes(file_name, text.as_bytes().to_vec())
    }

    /// Extract and assemble a model from an already parsed document.
    pub fn analyze_document(&self, doc: &Document) -> (Model, Vec<ExtractError>) {
        let mut ctx = ExtractionContext::new(&self.config);
        let extraction = extract_all(doc, &mut ctx);
        assemble(extraction, ctx)
    }

    fn analyze_content(
        &self,
        file_name: String,
        content: LoadedContent,
    ) -> Result<Analysis, ExtractionError> {
        let outcome = parse_resilient(&content.raw, &content.text)?;
        let (model, warnings) = self.analyze_document(&outcome.document);

        info!(
            file = %file_name,
            strategy = ?outcome.strategy,
            packages = model.stats.total_packages,
            elements = model.stats.total_elements,
            diagrams = model.stats.total_diagrams,
            connectors = model.stats.total_connectors,
            warnings = warnings.len(),
            "analysis complete"
        );

        Ok(Analysis {
            file_size: content.text_size(),
            encoding: content.encoding.to_string(),
            lossy_decode: content.lossy,
            parse_strategy: outcome.strategy,
            model,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            file_name,
        })
    }

    /// Run one analysis on a named worker thread.
    pub fn analyze_in_background(
        &self,
        path: impl Into<PathBuf>,
    ) -> Result<AnalysisHandle, ExtractionError> {
        let analyzer = self.clone();
        let path = path.into();
        let handle = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || analyzer.analyze(&path))
            .map_err(|e| ExtractionError::internal(format!("failed to start analysis worker: {e}")))?;
        Ok(AnalysisHandle { handle })
    }

    /// Analyze independent files in parallel. Results are in input order.
    pub fn analyze_batch<P>(&self, paths: &[P]) -> Vec<Result<Analysis, ExtractionError>>
    where
        P: AsRef<Path> + Sync,
    {
        paths.par_iter().map(|p| self.analyze(p)).collect()
    }
}

/// A running background analysis.
#[derive(Debug)]
pub struct AnalysisHandle {
    handle: JoinHandle<Result<Analysis, ExtractionError>>,
}

impl AnalysisHandle {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the result. A panicking worker becomes
    /// [`ExtractionError::Internal`].
    pub fn join(self) -> Result<Analysis, ExtractionError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(ExtractionError::internal("analysis worker panicked")),
        }
    }
}

/// Analyze the file at `path` with the default configuration.
pub fn analyze(path: impl AsRef<Path>) -> Result<Analysis, ExtractionError> {
    Analyzer::new().analyze(path)
}
