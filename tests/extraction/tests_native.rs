//! Native export extraction.

use eaxml::{Analyzer, AnalyzerConfig, ImageFormat, ParseStrategy};
use rstest::rstest;

use crate::helpers::analyze_xml;
use crate::helpers::xml_fixtures::{EA_NATIVE, SCENARIO_A, SCENARIO_A_NESTED, SCENARIO_B};

// ============================================================================
// SMALL SCENARIOS
// ============================================================================

#[rstest]
#[case::flat(SCENARIO_A)]
#[case::nested(SCENARIO_A_NESTED)]
fn test_one_package_one_element(#[case] xml: &str) {
    let analysis = analyze_xml(xml);
    let model = &analysis.model;

    assert_eq!(model.stats.total_packages, 1);
    assert_eq!(model.stats.total_elements, 1);
    assert_eq!(model.packages["P1"].name, "Core");
    assert_eq!(model.packages["P1"].elements, vec!["E1"]);
    assert_eq!(model.elements["E1"].element_type, "Class");
    assert_eq!(model.stats.element_types["Class"], 1);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_dangling_connector_target_is_kept() {
    let model = analyze_xml(SCENARIO_B).model;

    assert_eq!(model.stats.total_connectors, 1);
    let connector = model.connector("C1").unwrap();
    assert_eq!(connector.source_id.as_deref(), Some("E1"));
    assert_eq!(connector.target_id.as_deref(), Some("E2"));
    assert!(model.element("E2").is_none());
    assert_eq!(model.stats.connector_types["Association"], 1);
}

#[test]
fn test_untagged_rows_recognized_by_attributes() {
    let model = analyze_xml(
        r#"<Export><Rows>
             <Row Id="P9" Name="Pkg" PackageID="P0"/>
             <Row Id="E9" Name="Cust" Type="Actor"/>
             <Row Id="X" Name="Both" Type="Class" PackageID="P9"/>
           </Rows></Export>"#,
    )
    .model;

    assert_eq!(model.packages.keys().collect::<Vec<_>>(), vec!["P9"]);
    assert_eq!(model.elements.keys().collect::<Vec<_>>(), vec!["E9", "X"]);
    assert_eq!(model.packages["P9"].elements, vec!["X"]);
    assert_eq!(model.elements["E9"].element_type, "Actor");
    assert_eq!(model.elements["E9"].package_id, None);
    assert_eq!(model.stats.element_types["Class"], 1);
}

#[test]
fn test_empty_root_yields_empty_model() {
    let analysis = analyze_xml("<EAExport/>");
    let model = &analysis.model;

    assert!(model.packages.is_empty());
    assert!(model.elements.is_empty());
    assert!(model.diagrams.is_empty());
    assert!(model.connectors.is_empty());
    assert_eq!(model.info.model_type, "XML Root: EAExport");
    assert_eq!(model.info.name, "Extracted Model");
    assert_eq!(analysis.parse_strategy, ParseStrategy::Strict);
}

// ============================================================================
// FULL EXPORT
// ============================================================================

#[test]
fn test_model_info_and_provenance() {
    let model = analyze_xml(EA_NATIVE).model;

    assert_eq!(model.info.name, "Shop");
    assert_eq!(model.info.id.as_deref(), Some("M1"));
    assert_eq!(model.info.model_type, "UML Model");
    assert_eq!(model.info.created.as_deref(), Some("2021-03-01"));
    assert_eq!(model.info.documentation.as_deref(), Some("Order handling model"));

    assert_eq!(model.authors.iter().collect::<Vec<_>>(), vec!["ann", "bob", "carol"]);
    assert_eq!(model.versions.iter().collect::<Vec<_>>(), vec!["1.1", "1.0", "2.0"]);
}

#[test]
fn test_package_hierarchy_and_membership() {
    let model = analyze_xml(EA_NATIVE).model;

    assert_eq!(model.stats.total_packages, 2);
    let root = model.package("P1").unwrap();
    assert_eq!(root.sub_packages, vec!["P2"]);
    assert_eq!(root.elements, vec!["E1", "E3"]);
    assert_eq!(root.notes, "Top level");
    assert_eq!(root.stereotype.as_deref(), Some("system"));
    assert_eq!(model.packages["P2"].elements, vec!["E2"]);

    let tree = model.package_tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, "P1");
    assert_eq!(tree[0].element_count, 2);
    assert_eq!(tree[0].children[0].name, "Billing");
}

#[test]
fn test_element_members() {
    let model = analyze_xml(EA_NATIVE).model;
    let order = model.element("E1").unwrap();

    assert!(order.is_abstract);
    assert_eq!(order.attributes.len(), 2);
    assert_eq!(order.attributes[0].name, "id");
    assert_eq!(order.attributes[0].attr_type.as_deref(), Some("int"));
    assert_eq!(order.attributes[0].visibility.as_deref(), Some("private"));
    assert!(!order.attributes[0].is_static);
    assert_eq!(order.attributes[1].default.as_deref(), Some("0"));

    assert_eq!(order.operations.len(), 1);
    let close = &order.operations[0];
    assert_eq!(close.name, "close");
    assert_eq!(close.return_type.as_deref(), Some("void"));
    assert_eq!(close.parameters.len(), 1);
    assert_eq!(close.parameters[0].name.as_deref(), Some("reason"));
    assert_eq!(close.parameters[0].kind.as_deref(), Some("in"));

    assert_eq!(model.stats.element_types["Class"], 2);
    assert_eq!(model.stats.element_types["Actor"], 1);
    assert_eq!(model.stats.most_common_element_types(1), vec![("Class", 2)]);
}

#[test]
fn test_connectors_and_roles() {
    let model = analyze_xml(EA_NATIVE).model;

    assert_eq!(model.stats.total_connectors, 2);
    let bills = model.connector("C1").unwrap();
    assert_eq!(bills.name.as_deref(), Some("bills"));
    assert_eq!(bills.direction.as_deref(), Some("Source -> Destination"));
    assert_eq!(
        bills.source_role.as_ref().unwrap().multiplicity.as_deref(),
        Some("1")
    );
    assert_eq!(
        bills.target_role.as_ref().unwrap().name.as_deref(),
        Some("invoices")
    );

    let touching: Vec<_> = model.connectors_for("E1").map(|c| c.id.as_str()).collect();
    assert_eq!(touching, vec!["C1", "C2"]);
}

#[test]
fn test_tagged_values_attach_to_owners() {
    let model = analyze_xml(EA_NATIVE).model;

    let order = model.element("E1").unwrap();
    assert_eq!(order.tagged_values.len(), 2);
    assert_eq!(order.tagged_values[0].name.as_deref(), Some("persistence"));
    assert_eq!(order.tagged_values[0].value.as_deref(), Some("table"));
    assert_eq!(order.tagged_values[1].value.as_deref(), Some("team-a"));
    assert_eq!(model.elements["E2"].tagged_values.len(), 1);
    assert!(model.elements["E3"].tagged_values.is_empty());

    // The ownerless value is dropped, not attached anywhere.
    assert_eq!(model.tagged_values.len(), 2);
}

#[test]
fn test_diagrams_placements_and_images() {
    let model = analyze_xml(EA_NATIVE).model;

    assert_eq!(model.stats.total_diagrams, 2);
    assert_eq!(model.stats.diagram_types["Logical"], 1);
    assert_eq!(model.stats.diagram_types["Use Case"], 1);

    let overview = model.diagram("D1").unwrap();
    assert_eq!(overview.package_id.as_deref(), Some("P1"));
    assert_eq!(overview.swim_lanes.as_deref(), Some("locked=false;"));
    assert_eq!(overview.elements.len(), 2);
    assert_eq!(overview.elements[1].element_id.as_deref(), Some("E2"));
    assert_eq!(overview.elements[1].left.as_deref(), Some("200"));
    assert!(overview.has_image);
    assert_eq!(overview.image_format, Some(ImageFormat::Image));

    let external = model.diagram("D2").unwrap();
    assert!(external.has_image);
    assert_eq!(external.image_format, Some(ImageFormat::FileReference));
    assert_eq!(external.image_data.as_deref(), Some("diagrams/external.png"));
}

#[test]
fn test_nesting_inference_can_be_disabled() {
    let config = AnalyzerConfig::default().with_nesting_inference(false);
    let xml = r#"<R><Package Id="P1" Name="Core"><Element Id="E1" Name="A" Type="Class"/></Package></R>"#;
    let analysis = Analyzer::with_config(config).analyze_str("nested.xml", xml).unwrap();

    assert_eq!(analysis.model.elements["E1"].package_id, None);
    assert!(analysis.model.packages["P1"].elements.is_empty());
}
