//! Diagram payload detection through a full analysis.

use eaxml::{Analyzer, AnalyzerConfig, ImageFormat, Model};
use rstest::rstest;

use crate::helpers::analyze_xml;
use crate::helpers::xml_fixtures::SCENARIO_C;

const PNG_1X1: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn single_diagram(body: &str, config: AnalyzerConfig) -> Model {
    let xml = format!(r#"<R><Diagram Id="D1" Name="Main">{body}</Diagram></R>"#);
    Analyzer::with_config(config)
        .analyze_str("diagram.xml", &xml)
        .unwrap()
        .model
}

#[test]
fn test_payload_and_plain_diagram() {
    let model = analyze_xml(SCENARIO_C).model;

    let with_image = model.diagram("D1").unwrap();
    assert!(with_image.has_image);
    assert_eq!(with_image.image_format, Some(ImageFormat::Png));
    assert!(with_image.image_data.as_deref().unwrap().starts_with("iVBOR"));

    let plain = model.diagram("D2").unwrap();
    assert!(!plain.has_image);
    assert_eq!(plain.image_data, None);
    assert_eq!(plain.image_format, None);
    assert_eq!(plain.notes, "nothing to see");

    let ids: Vec<_> = model.diagrams_with_images().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["D1"]);
}

#[rstest]
#[case::tag_names_format("<png>QUJDRA==</png>", Some(ImageFormat::Png))]
#[case::jpg_tag("<jpg>QUJDRA==</jpg>", Some(ImageFormat::Jpeg))]
#[case::generic_without_magic("<Image>QUJDRA==</Image>", Some(ImageFormat::Image))]
#[case::payload_in_attribute(r#"<Image data="QUJDRA=="/>"#, Some(ImageFormat::Image))]
#[case::short_final_quantum("<Image>QUJ=</Image>", Some(ImageFormat::Image))]
#[case::nonzero_trailing_bits("<Image>QUJDRB==</Image>", Some(ImageFormat::Image))]
#[case::extra_padding("<Image>AAAA====</Image>", Some(ImageFormat::Image))]
#[case::short_garbage("<Image>not an image</Image>", None)]
fn test_payload_classification(#[case] body: &str, #[case] expected: Option<ImageFormat>) {
    let model = single_diagram(body, AnalyzerConfig::default());
    let diagram = model.diagram("D1").unwrap();
    assert_eq!(diagram.image_format, expected);
    assert_eq!(diagram.has_image, expected.is_some());
}

#[test]
fn test_metafile_marker_needs_length() {
    let long = format!("<MetaFile>EMF header {}</MetaFile>", "x".repeat(120));
    let model = single_diagram(&long, AnalyzerConfig::default());
    assert_eq!(model.diagram("D1").unwrap().image_format, Some(ImageFormat::Metafile));

    let short = "<MetaFile>EMF header only, not enough</MetaFile>";
    let model = single_diagram(short, AnalyzerConfig::default());
    assert!(!model.diagram("D1").unwrap().has_image);
}

#[test]
fn test_long_unrecognised_payload_is_unknown() {
    let body = format!("<Image>{}</Image>", "#".repeat(60));
    let model = single_diagram(&body, AnalyzerConfig::default());
    assert_eq!(model.diagram("D1").unwrap().image_format, Some(ImageFormat::Unknown));

    let strict = AnalyzerConfig::default().with_unknown_payload_min_len(500);
    let model = single_diagram(&body, strict);
    assert!(!model.diagram("D1").unwrap().has_image);
}

#[test]
fn test_magic_refines_generic_tag() {
    let body = format!("<Image>{PNG_1X1}</Image>");
    let model = single_diagram(&body, AnalyzerConfig::default());
    assert_eq!(model.diagram("D1").unwrap().image_format, Some(ImageFormat::Png));

    let config = AnalyzerConfig::default().with_image_sniffing(false);
    let model = single_diagram(&body, config);
    assert_eq!(model.diagram("D1").unwrap().image_format, Some(ImageFormat::Image));
}

#[test]
fn test_embedded_payload_wins_over_file_reference() {
    let xml = r#"<R><Diagram Id="D1" ImageFile="d1.png"><Image>QUJDRA==</Image></Diagram></R>"#;
    let model = analyze_xml(xml).model;
    let diagram = model.diagram("D1").unwrap();
    assert_eq!(diagram.image_format, Some(ImageFormat::Image));
    assert_eq!(diagram.image_data.as_deref(), Some("QUJDRA=="));
}
