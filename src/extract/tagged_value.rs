//! Tagged-value extraction.

use crate::error::ExtractError;
use crate::model::TaggedValue;
use crate::xml::Document;

use super::fields;
use super::lookup::{notes, union};

const TAGGED_VALUE_PATHS: &[&str] = &[".//TaggedValues/TaggedValue", ".//TaggedValue"];

/// A tagged value with the id of the element it belongs to, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedTaggedValue {
    pub owner: Option<String>,
    pub value: TaggedValue,
}

/// Every tagged value, each once, in discovery order.
pub fn extract(doc: &Document) -> Result<Vec<OwnedTaggedValue>, ExtractError> {
    union(doc, doc.root(), TAGGED_VALUE_PATHS)?
        .into_iter()
        .map(|node| -> Result<OwnedTaggedValue, ExtractError> {
            let value = fields::TAG_VALUE.get(doc, node).or_else(|| {
                let text = doc.text(node);
                (!text.is_empty()).then(|| text.to_string())
            });
            Ok(OwnedTaggedValue {
                owner: fields::TAG_OWNER.get(doc, node),
                value: TaggedValue {
                    name: fields::NAME.get(doc, node),
                    value,
                    notes: notes(doc, node)?,
                },
            })
        })
        .collect()
}
