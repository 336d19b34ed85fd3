//! Report export to disk and reading back.

use eaxml::export::{Json, ReportFormat, Yaml, detect_format, export_to_path};
use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::analyze_xml;
use crate::helpers::xml_fixtures::{EA_NATIVE, XMI_UNDECLARED};

#[rstest]
#[case::json("report.json")]
#[case::yaml("report.yaml")]
#[case::yml("report.yml")]
fn test_export_reads_back_equal(#[case] file_name: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(file_name);
    let analysis = analyze_xml(EA_NATIVE);

    export_to_path(&analysis, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let format = detect_format(&path).unwrap();
    assert_eq!(format.read(&bytes).unwrap(), analysis);
}

#[test]
fn test_unsupported_extension_is_an_export_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.xml");
    let analysis = analyze_xml(EA_NATIVE);

    let err = export_to_path(&analysis, &path).unwrap_err();
    assert!(err.to_string().contains("unsupported report extension"));
    assert!(!path.exists());
}

#[test]
fn test_json_report_shape() {
    let analysis = analyze_xml(XMI_UNDECLARED);
    let bytes = Json::default().write(&analysis).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["parse_strategy"], "namespace_stripped");
    assert_eq!(value["model"]["packages"]["EAPK_1"]["name"], "Domain");
    assert_eq!(value["model"]["stats"]["total_elements"], 1);
    assert_eq!(value["model"]["elements"]["EAID_1"]["package_id"], "EAPK_1");
}

#[test]
fn test_compact_json_is_smaller() {
    let analysis = analyze_xml(EA_NATIVE);
    let pretty = Json::default().write(&analysis).unwrap();
    let compact = Json::compact().write(&analysis).unwrap();

    assert!(compact.len() < pretty.len());
    assert_eq!(Json::compact().read(&compact).unwrap(), analysis);
}

#[test]
fn test_yaml_report_keeps_free_text() {
    let analysis = analyze_xml(EA_NATIVE);
    let bytes = Yaml.write(&analysis).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains("Order handling model"));
    assert!(text.contains("Source -> Destination"));
}
