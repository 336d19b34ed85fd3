//! Model-level metadata.

use crate::error::ExtractError;
use crate::model::ModelInfo;
use crate::xml::{Document, NodeId};

use super::fields;

const DEFAULT_MODEL_NAME: &str = "Unnamed Model";
const DEFAULT_MODEL_TYPE: &str = "UML Model";
const DEFAULT_ROOT_NAME: &str = "Extracted Model";

/// Name, id, type, timestamps and documentation of the model.
///
/// Fields come from the first `model` node in document order. Without one,
/// the root element stands in and the type records its tag.
pub fn extract(doc: &Document) -> Result<ModelInfo, ExtractError> {
    let model = doc
        .iter()
        .find(|&n| doc.local(n).eq_ignore_ascii_case("model"));

    let mut info = match model {
        Some(node) => ModelInfo {
            name: fields::MODEL_NAME.get_or(doc, node, DEFAULT_MODEL_NAME),
            id: fields::MODEL_ID.get(doc, node),
            model_type: fields::MODEL_TYPE.get_or(doc, node, DEFAULT_MODEL_TYPE),
            created: fields::CREATED.get(doc, node),
            modified: fields::MODIFIED.get(doc, node),
            documentation: None,
        },
        None => {
            let root = doc.root();
            ModelInfo {
                name: fields::NAME.get_or(doc, root, DEFAULT_ROOT_NAME),
                id: fields::MODEL_ID.get(doc, root),
                model_type: format!("XML Root: {}", doc.local(root)),
                ..ModelInfo::default()
            }
        }
    };
    info.documentation = documentation(doc);
    Ok(info)
}

/// Text of the first `documentation` node that has any.
fn documentation(doc: &Document) -> Option<String> {
    doc.iter()
        .filter(|&n| doc.local(n).eq_ignore_ascii_case("documentation"))
        .map(|n: NodeId| doc.text(n))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
