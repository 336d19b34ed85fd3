//! A small ElementTree-style path language over local tag names.
//!
//! Supported forms: `.//A`, `.//A/B`, `.//A//B`, `A/B`, `./A`, with `*` as a
//! wildcard step. Matching is on local names (prefixes are ignored) and is
//! case-sensitive. Results are de-duplicated and in document order.

use std::collections::BTreeSet;

use super::document::{Document, NodeId, local_name};
use crate::error::XmlError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: String,
}

impl Step {
    fn matches(&self, local: &str) -> bool {
        self.name == "*" || self.name == local
    }
}

/// A compiled path expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn parse(expr: &str) -> Result<Self, XmlError> {
        let mut rest = expr.strip_prefix('.').unwrap_or(expr);
        if rest.is_empty() {
            return Err(XmlError::path(expr, "empty path"));
        }

        let mut steps = Vec::new();
        loop {
            let axis = if let Some(r) = rest.strip_prefix("//") {
                rest = r;
                Axis::Descendant
            } else if let Some(r) = rest.strip_prefix('/') {
                rest = r;
                Axis::Child
            } else {
                Axis::Child
            };

            let end = rest.find('/').unwrap_or(rest.len());
            let name = &rest[..end];
            if name.is_empty() {
                return Err(XmlError::path(expr, "empty step"));
            }
            if name != "*" && !name.chars().all(is_name_char) {
                return Err(XmlError::path(expr, format!("invalid step '{name}'")));
            }
            steps.push(Step {
                axis,
                name: local_name(name).to_string(),
            });

            rest = &rest[end..];
            if rest.is_empty() {
                break;
            }
        }

        Ok(Self { steps })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

impl Document {
    /// Evaluate a compiled path relative to `context`.
    pub fn select(&self, context: NodeId, path: &Path) -> Vec<NodeId> {
        let mut current = vec![context];
        for step in &path.steps {
            let mut next = BTreeSet::new();
            // `current` is sorted: a node inside an already scanned subtree
            // contributes nothing new on the descendant axis.
            let mut covered_end = 0usize;
            for &node in &current {
                match step.axis {
                    Axis::Child => {
                        for &child in self.children(node) {
                            if step.matches(self.local(child)) {
                                next.insert(child);
                            }
                        }
                    }
                    Axis::Descendant => {
                        if node.index() < covered_end {
                            continue;
                        }
                        covered_end = self.node(node).end as usize;
                        for d in self.descendants(node) {
                            if step.matches(self.local(d)) {
                                next.insert(d);
                            }
                        }
                    }
                }
            }
            current = next.into_iter().collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// All nodes matching `expr` relative to `context`.
    pub fn find_all(&self, context: NodeId, expr: &str) -> Result<Vec<NodeId>, XmlError> {
        Ok(self.select(context, &Path::parse(expr)?))
    }

    /// First node (in document order) matching `expr` relative to `context`.
    pub fn find(&self, context: NodeId, expr: &str) -> Result<Option<NodeId>, XmlError> {
        Ok(self.find_all(context, expr)?.into_iter().next())
    }
}
