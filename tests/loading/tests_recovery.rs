//! Parse recovery and fatal input errors.

use eaxml::{Analyzer, ParseStrategy};
use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::write_fixture;
use crate::helpers::xml_fixtures::{SCENARIO_A, SCENARIO_D, XMI_UNDECLARED};

#[rstest]
#[case::well_formed(SCENARIO_A, ParseStrategy::Strict)]
#[case::declared_prefixes(
    r#"<xmi:XMI xmlns:xmi="http://schema.omg.org/spec/XMI/2.1"><xmi:Documentation/></xmi:XMI>"#,
    ParseStrategy::Strict
)]
#[case::undeclared_prefixes(XMI_UNDECLARED, ParseStrategy::NamespaceStripped)]
#[case::undeclared_attribute_prefix(
    r#"<R><Element Id="E1" Name="A" uml:kind="x"/></R>"#,
    ParseStrategy::NamespaceStripped
)]
fn test_strategy_selection(#[case] xml: &str, #[case] expected: ParseStrategy) {
    let analysis = Analyzer::new().analyze_str("recover.xml", xml).unwrap();
    assert_eq!(analysis.parse_strategy, expected);
}

#[test]
fn test_malformed_file_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.xml", SCENARIO_D);

    let err = Analyzer::new().analyze(&path).unwrap_err();
    assert!(err.is_invalid_format());
    assert!(!err.is_read_failure());
}

#[test]
fn test_missing_file_is_read_failure() {
    let dir = TempDir::new().unwrap();
    let err = Analyzer::new()
        .analyze(dir.path().join("absent.xml"))
        .unwrap_err();
    assert!(err.is_read_failure());
}

#[rstest]
#[case::empty("")]
#[case::text_only("just some words")]
#[case::unclosed("<R><Package Id=\"P1\">")]
fn test_unparseable_input(#[case] xml: &str) {
    let err = Analyzer::new().analyze_str("bad.xml", xml).unwrap_err();
    assert!(err.is_invalid_format());
}
