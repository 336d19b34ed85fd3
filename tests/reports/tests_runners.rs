//! Background and batch analysis.

use eaxml::{Analyzer, ParseStrategy};
use tempfile::TempDir;

use crate::helpers::write_fixture;
use crate::helpers::xml_fixtures::{EA_NATIVE, SCENARIO_A, SCENARIO_D, XMI_UNDECLARED};

#[test]
fn test_background_analysis_matches_foreground() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "native.xml", EA_NATIVE);
    let analyzer = Analyzer::new();

    let handle = analyzer.analyze_in_background(&path).unwrap();
    let background = handle.join().unwrap();

    assert_eq!(background, analyzer.analyze(&path).unwrap());
    assert_eq!(background.model.stats.total_elements, 3);
}

#[test]
fn test_background_errors_are_returned_on_join() {
    let dir = TempDir::new().unwrap();
    let handle = Analyzer::new()
        .analyze_in_background(dir.path().join("missing.xml"))
        .unwrap();

    assert!(handle.join().unwrap_err().is_read_failure());
}

#[test]
fn test_batch_results_follow_input_order() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_fixture(&dir, "a.xml", SCENARIO_A),
        write_fixture(&dir, "broken.xml", SCENARIO_D),
        write_fixture(&dir, "xmi.xml", XMI_UNDECLARED),
        dir.path().join("missing.xml"),
    ];

    let results = Analyzer::new().analyze_batch(&paths);

    assert_eq!(results.len(), 4);
    let first = results[0].as_ref().unwrap();
    assert_eq!(first.file_name, "a.xml");
    assert_eq!(first.model.stats.total_packages, 1);
    assert!(results[1].as_ref().unwrap_err().is_invalid_format());
    let third = results[2].as_ref().unwrap();
    assert_eq!(third.parse_strategy, ParseStrategy::NamespaceStripped);
    assert!(results[3].as_ref().unwrap_err().is_read_failure());
}
