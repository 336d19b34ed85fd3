//! Shared test helpers.

#![allow(dead_code)]

pub mod xml_fixtures;

use std::path::PathBuf;

use eaxml::{Analysis, Analyzer};
use tempfile::TempDir;

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_fixture(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Analyze XML text with the default configuration.
pub fn analyze_xml(xml: &str) -> Analysis {
    Analyzer::new().analyze_str("fixture.xml", xml).unwrap()
}
