//! Candidate attribute names per field.
//!
//! Order matters: the first present, non-blank value wins.

use super::lookup::FieldChain;

// Shared
pub const ID: FieldChain = FieldChain::new(&["Id", "id", "xmi.id", "xmi:id", "ID"]);
pub const NAME: FieldChain = FieldChain::new(&["Name", "name"]);
pub const TYPE: FieldChain = FieldChain::new(&["Type", "type", "xmi:type", "xsi:type"]);
/// Declared type of an attribute, operation or parameter (not its metaclass).
pub const MEMBER_TYPE: FieldChain = FieldChain::new(&["Type", "type"]);
pub const STEREOTYPE: FieldChain = FieldChain::new(&["Stereotype", "stereotype"]);
pub const VISIBILITY: FieldChain = FieldChain::new(&["Visibility", "visibility", "scope"]);
pub const AUTHOR: FieldChain = FieldChain::new(&["Author", "author"]);
pub const VERSION: FieldChain = FieldChain::new(&["Version", "version"]);
pub const CREATED: FieldChain = FieldChain::new(&["Created", "created", "CreatedDate"]);
pub const MODIFIED: FieldChain = FieldChain::new(&["Modified", "modified", "ModifiedDate"]);
pub const NOTES_ATTR: FieldChain = FieldChain::new(&["Notes", "notes"]);
pub const ABSTRACT: FieldChain = FieldChain::new(&["Abstract", "isAbstract", "IsAbstract"]);
pub const STATIC: FieldChain = FieldChain::new(&["Static", "isStatic", "IsStatic"]);
pub const DEFAULT: FieldChain = FieldChain::new(&["Default", "default"]);
/// Reference attributes marking a node as a pointer to an entity defined elsewhere.
pub const IDREF: FieldChain = FieldChain::new(&["xmi:idref", "xmi.idref", "idref"]);

// Model
pub const MODEL_NAME: FieldChain = FieldChain::new(&["name", "Name", "xmi.name"]);
pub const MODEL_ID: FieldChain = FieldChain::new(&["xmi.id", "id", "Id", "xmi:id"]);
pub const MODEL_TYPE: FieldChain = FieldChain::new(&["Type", "type"]);

// Packages and elements
pub const PARENT_ID: FieldChain = FieldChain::new(&["ParentID", "parent", "owner"]);
pub const PACKAGE_ID: FieldChain = FieldChain::new(&["PackageID", "package", "owner"]);
pub const COMPLEXITY: FieldChain = FieldChain::new(&["Complexity", "complexity"]);
pub const STATUS: FieldChain = FieldChain::new(&["Status", "status"]);
pub const PARAMETER_KIND: FieldChain = FieldChain::new(&["Kind", "kind", "direction"]);

// Diagrams
pub const DIAGRAM_ID: FieldChain =
    FieldChain::new(&["Id", "xmi.id", "id", "diagramId", "xmi:id", "Diagram_ID"]);
pub const DIAGRAM_NAME: FieldChain = FieldChain::new(&["Name", "name", "xmi:name"]);
pub const DIAGRAM_TYPE: FieldChain = FieldChain::new(&["Type", "type", "DiagramType", "Diagram_Type"]);
pub const STYLE_EX: FieldChain = FieldChain::new(&["StyleEx"]);
pub const SWIM_LANES: FieldChain = FieldChain::new(&["SwimLanes"]);
pub const SCALE: FieldChain = FieldChain::new(&["Scale"]);
pub const PLACED_ELEMENT: FieldChain =
    FieldChain::new(&["ElementID", "element", "Object_ID", "objectId", "subject"]);
pub const GEOMETRY: FieldChain = FieldChain::new(&["Geometry", "geometry"]);
pub const STYLE: FieldChain = FieldChain::new(&["Style", "style"]);
pub const LEFT: FieldChain = FieldChain::new(&["left", "Left", "RectLeft"]);
pub const TOP: FieldChain = FieldChain::new(&["top", "Top", "RectTop"]);
pub const RIGHT: FieldChain = FieldChain::new(&["right", "Right", "RectRight"]);
pub const BOTTOM: FieldChain = FieldChain::new(&["bottom", "Bottom", "RectBottom"]);
pub const SEQUENCE: FieldChain = FieldChain::new(&["Sequence", "sequence", "seqno"]);
pub const PAYLOAD: FieldChain = FieldChain::new(&["data", "content"]);
pub const IMAGE_REF: FieldChain =
    FieldChain::new(&["ImageFile", "imageFile", "ImagePath", "imagePath"]);

// Connectors
pub const SOURCE_ID: FieldChain = FieldChain::new(&["SourceID", "source", "Start_Object_ID"]);
pub const TARGET_ID: FieldChain = FieldChain::new(&["TargetID", "target", "End_Object_ID"]);
pub const DIRECTION: FieldChain = FieldChain::new(&["Direction", "direction"]);
pub const MULTIPLICITY: FieldChain = FieldChain::new(&["Multiplicity", "multiplicity"]);

// Tagged values
pub const TAG_OWNER: FieldChain = FieldChain::new(&["ElementID", "element", "Object_ID"]);
pub const TAG_VALUE: FieldChain = FieldChain::new(&["Value", "value"]);
