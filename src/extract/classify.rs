//! Node classification.
//!
//! Every node gets at most one [`EntityKind`]. Rules are tried in rank order
//! and the first match wins, so a node recognized as a package by its tag is
//! never also reported as an element by its attribute shape.
//!
//! ```text
//! 1. reference records    (xmi:idref without an own id)   → Structural
//! 2. diagram placements   (element under elements in a diagram) → Structural
//! 3. tag keyword sets     (package, class, diagram, ...)  → kind of the set
//! 4. element shape        (name + UML classifier type)    → Element
//! 5. package shape        (Name + PackageID, or type Package) → Package
//! ```

use crate::xml::{Document, NodeId, local_name};

use super::fields;

/// What a node represents in the extracted model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Package,
    Element,
    Diagram,
    Connector,
    TaggedValue,
    /// Owned detail or bookkeeping node; never an entity of its own.
    Structural,
}

/// Tags (lowercased local names) per kind.
const PACKAGE_TAGS: &[&str] = &["package"];
const ELEMENT_TAGS: &[&str] = &[
    "element",
    "class",
    "component",
    "actor",
    "usecase",
    "interface",
    "object",
    "node",
    "artifact",
];
const DIAGRAM_TAGS: &[&str] = &["diagram", "t_diagram"];
const CONNECTOR_TAGS: &[&str] = &["connector", "t_connector"];
const TAGGED_VALUE_TAGS: &[&str] = &["taggedvalue"];
const STRUCTURAL_TAGS: &[&str] = &[
    "model",
    "packages",
    "elements",
    "diagrams",
    "connectors",
    "taggedvalues",
    "attribute",
    "attributes",
    "operation",
    "operations",
    "parameter",
    "parameters",
    "diagramelement",
    "diagramelements",
    "diagramobject",
    "diagramobjects",
    "notes",
    "documentation",
    "sourcerole",
    "targetrole",
    "source",
    "target",
    "image",
    "diagramimage",
    "metafile",
    "ownedattribute",
    "ownedoperation",
    "ownedparameter",
    "ownedcomment",
    "ownedend",
    "ownedliteral",
];

/// UML classifier types that make a named node an element.
const CLASSIFIER_TYPES: &[&str] = &[
    "Class",
    "Component",
    "Actor",
    "UseCase",
    "Interface",
    "Object",
    "Node",
    "Artifact",
];

struct Rule {
    kind: EntityKind,
    test: fn(&Document, NodeId) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        kind: EntityKind::Structural,
        test: is_reference_record,
    },
    Rule {
        kind: EntityKind::Structural,
        test: is_diagram_placement,
    },
    Rule {
        kind: EntityKind::Package,
        test: is_package_tag,
    },
    Rule {
        kind: EntityKind::Element,
        test: is_element_tag,
    },
    Rule {
        kind: EntityKind::Diagram,
        test: is_diagram_tag,
    },
    Rule {
        kind: EntityKind::Connector,
        test: is_connector_tag,
    },
    Rule {
        kind: EntityKind::TaggedValue,
        test: is_tagged_value_tag,
    },
    Rule {
        kind: EntityKind::Structural,
        test: is_structural_tag,
    },
    Rule {
        kind: EntityKind::Element,
        test: has_element_shape,
    },
    Rule {
        kind: EntityKind::Package,
        test: has_package_shape,
    },
];

/// The kind of `node`, or `None` for nodes no rule recognizes.
pub fn classify(doc: &Document, node: NodeId) -> Option<EntityKind> {
    RULES
        .iter()
        .find(|rule| (rule.test)(doc, node))
        .map(|rule| rule.kind)
}

/// Shorthand for `classify(..) == Some(kind)`.
pub fn is_kind(doc: &Document, node: NodeId, kind: EntityKind) -> bool {
    classify(doc, node) == Some(kind)
}

fn is_package_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, PACKAGE_TAGS)
}

fn is_element_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, ELEMENT_TAGS)
}

fn is_diagram_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, DIAGRAM_TAGS)
}

fn is_connector_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, CONNECTOR_TAGS)
}

fn is_tagged_value_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, TAGGED_VALUE_TAGS)
}

fn is_structural_tag(doc: &Document, node: NodeId) -> bool {
    tag_in(doc, node, STRUCTURAL_TAGS)
}

fn tag_in(doc: &Document, node: NodeId, tags: &[&str]) -> bool {
    let local = doc.local(node);
    tags.iter().any(|t| t.eq_ignore_ascii_case(local))
}

/// `<element xmi:idref="..."/>` records point at an entity declared elsewhere.
fn is_reference_record(doc: &Document, node: NodeId) -> bool {
    fields::IDREF.lookup(doc, node).is_some() && fields::ID.lookup(doc, node).is_none()
}

/// An `element` listed under a diagram's `elements` is a placement.
fn is_diagram_placement(doc: &Document, node: NodeId) -> bool {
    if !doc.local(node).eq_ignore_ascii_case("element") {
        return false;
    }
    let Some(parent) = doc.parent(node) else {
        return false;
    };
    doc.local(parent).eq_ignore_ascii_case("elements")
        && doc
            .ancestors(parent)
            .any(|a| tag_in(doc, a, DIAGRAM_TAGS))
}

fn has_element_shape(doc: &Document, node: NodeId) -> bool {
    fields::NAME.lookup(doc, node).is_some()
        && fields::TYPE
            .lookup(doc, node)
            .is_some_and(|t| CLASSIFIER_TYPES.contains(&local_name(t.trim())))
}

fn has_package_shape(doc: &Document, node: NodeId) -> bool {
    (doc.attr(node, "Name").is_some() && doc.attr(node, "PackageID").is_some())
        || fields::TYPE
            .lookup(doc, node)
            .is_some_and(|t| local_name(t.trim()) == "Package")
}
