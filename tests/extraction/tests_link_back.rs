//! Link-back behavior: ordering, dangling references, identity.

use eaxml::Analyzer;

use crate::helpers::analyze_xml;
use crate::helpers::xml_fixtures::EA_NATIVE;

#[test]
fn test_children_before_parents_link_the_same() {
    let parent_first = r#"<R>
        <Package Id="A" Name="A"/>
        <Package Id="B" Name="B" ParentID="A"/>
        <Package Id="C" Name="C" ParentID="B"/>
      </R>"#;
    let children_first = r#"<R>
        <Package Id="C" Name="C" ParentID="B"/>
        <Package Id="B" Name="B" ParentID="A"/>
        <Package Id="A" Name="A"/>
      </R>"#;

    let a = analyze_xml(parent_first).model;
    let b = analyze_xml(children_first).model;

    for model in [&a, &b] {
        assert_eq!(model.packages["A"].sub_packages, vec!["B"]);
        assert_eq!(model.packages["B"].sub_packages, vec!["C"]);
        assert!(model.packages["C"].sub_packages.is_empty());
        assert_eq!(model.package_tree()[0].children[0].children[0].id, "C");
    }
}

#[test]
fn test_dangling_package_reference_leaves_element_unplaced() {
    let model = analyze_xml(
        r#"<R>
             <Package Id="P1" Name="Core"/>
             <Element Id="E1" Name="Ghost" Type="Class" PackageID="P404"/>
           </R>"#,
    )
    .model;

    assert_eq!(model.stats.total_elements, 1);
    assert_eq!(model.elements["E1"].package_id.as_deref(), Some("P404"));
    assert!(model.packages["P1"].elements.is_empty());
}

#[test]
fn test_self_parent_is_a_root() {
    let model = analyze_xml(r#"<R><Package Id="P1" Name="Loop" ParentID="P1"/></R>"#).model;

    assert!(model.packages["P1"].sub_packages.is_empty());
    assert_eq!(model.root_packages().count(), 1);
}

#[test]
fn test_duplicate_ids_keep_the_later_entity() {
    let model = analyze_xml(
        r#"<R>
             <Element Id="E1" Name="First" Type="Class"/>
             <Element Id="E1" Name="Second" Type="Interface"/>
           </R>"#,
    )
    .model;

    assert_eq!(model.elements.len(), 1);
    assert_eq!(model.elements["E1"].name, "Second");
    assert_eq!(model.stats.total_elements, 2);
}

#[test]
fn test_repeated_analysis_is_identical() {
    let xml = r#"<R>
        <Package Name="Anonymous"/>
        <Element Name="NoId" Type="Class"/>
        <Connector Type="Dependency"/>
      </R>"#;

    let first = Analyzer::new().analyze_str("a.xml", xml).unwrap();
    let second = Analyzer::new().analyze_str("a.xml", xml).unwrap();
    assert_eq!(first, second);

    let package_id = first.model.packages.keys().next().unwrap();
    assert!(package_id.starts_with("_package_"));
    let element_id = first.model.elements.keys().next().unwrap();
    assert!(element_id.starts_with("_element_"));

    let native = Analyzer::new();
    assert_eq!(
        native.analyze_str("n.xml", EA_NATIVE).unwrap().model,
        native.analyze_str("n.xml", EA_NATIVE).unwrap().model
    );
}
