//! Output model produced by an analysis.
//!
//! ```text
//! Model
//! ├── info: ModelInfo
//! ├── packages:   IndexMap<String, Package>    (insertion ordered)
//! ├── elements:   IndexMap<String, Element>
//! ├── diagrams:   IndexMap<String, Diagram>
//! ├── connectors: IndexMap<String, Connector>
//! ├── tagged_values: IndexMap<String, Vec<TaggedValue>>  (by owning element id)
//! ├── authors / versions: IndexSet<String>
//! └── stats: Stats
//! ```
//!
//! Entities are created once during extraction. The only later mutations are
//! the assembler's link-backs: `Package::sub_packages`, `Package::elements`
//! and `Element::tagged_values`.

mod stats;
mod views;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

pub use stats::Stats;
pub use views::PackageNode;

// ============================================================================
// MODEL
// ============================================================================

/// Model-level metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Type label, e.g. `UML Model` or `XML Root: XMI`.
    pub model_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// The root aggregate of one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub info: ModelInfo,
    pub packages: IndexMap<String, Package>,
    pub elements: IndexMap<String, Element>,
    pub diagrams: IndexMap<String, Diagram>,
    pub connectors: IndexMap<String, Connector>,
    /// Tagged values keyed by owning element id.
    pub tagged_values: IndexMap<String, Vec<TaggedValue>>,
    /// Distinct author values seen on packages, elements and diagrams.
    pub authors: IndexSet<String>,
    /// Distinct version values seen on packages, elements and diagrams.
    pub versions: IndexSet<String>,
    pub stats: Stats,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a package by id.
    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.get(id)
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Look up a diagram by id.
    pub fn diagram(&self, id: &str) -> Option<&Diagram> {
        self.diagrams.get(id)
    }

    /// Look up a connector by id.
    pub fn connector(&self, id: &str) -> Option<&Connector> {
        self.connectors.get(id)
    }
}

// ============================================================================
// PACKAGES AND ELEMENTS
// ============================================================================

/// A namespace/container node. May nest other packages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// `None` marks a root package. A parent id that does not resolve leaves
    /// the package a de-facto root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Member element ids, filled by the assembler.
    pub elements: Vec<String>,
    /// Child package ids, filled by the assembler.
    pub sub_packages: Vec<String>,
}

/// A modeled entity: class, component, actor, interface, ...
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    /// Type tag, e.g. `Class`.
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    pub notes: String,
    pub is_abstract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub attributes: Vec<Attribute>,
    pub operations: Vec<Operation>,
    /// Attached by the assembler from the global tagged-value index.
    pub tagged_values: Vec<TaggedValue>,
}

/// An attribute owned by exactly one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
}

/// An operation owned by exactly one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// A parameter owned by exactly one operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Direction kind as given (`in`, `out`, `inout`, `return`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

// ============================================================================
// DIAGRAMS
// ============================================================================

/// Detected format of an embedded diagram payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    /// Vendor metafile (EMF/WMF).
    Metafile,
    /// Encoded image whose concrete format is unknown.
    Image,
    /// Payload accepted on length alone.
    Unknown,
    /// The payload is a path to an external image file.
    FileReference,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Metafile => "metafile",
            Self::Image => "image",
            Self::Unknown => "unknown",
            Self::FileReference => "file_reference",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named view with element placements and an optional rendered payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub id: String,
    pub name: String,
    pub diagram_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    pub notes: String,
    pub elements: Vec<DiagramElement>,
    pub has_image: bool,
    /// Raw payload text (encoded data or file path); never decoded.
    pub image_data: Option<String>,
    pub image_format: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_ex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim_lanes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

/// Placement of a model element on a diagram.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

// ============================================================================
// CONNECTORS AND TAGGED VALUES
// ============================================================================

/// One end of a connector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A relationship between two elements. Endpoint ids are kept verbatim even
/// when they do not resolve to an extracted element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<Role>,
}

/// A custom name/value property attached to an element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub notes: String,
}
