//! Arena document tree.
//!
//! Nodes are stored in document (pre-)order, so the descendants of a node are
//! the contiguous index range `(id + 1)..end`. `NodeId` doubles as node
//! identity for de-duplicating overlapping path queries.

use serde::Serialize;

/// Index of a node in a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in document order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One XML element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Qualified tag as written (`xmi:Extension`).
    pub tag: String,
    /// Tag with any namespace prefix removed (`Extension`).
    pub local: String,
    /// Attributes in source order, keys as written.
    pub attributes: Vec<(String, String)>,
    /// Concatenated direct text and CDATA content, unescaped, untrimmed.
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// One past the last descendant index.
    pub(crate) end: u32,
}

impl Node {
    /// First attribute with exactly this key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed XML document. The root is always `NodeId(0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node under `parent` and return its id.
    pub(crate) fn push(
        &mut self,
        tag: String,
        attributes: Vec<(String, String)>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let local = local_name(&tag).to_string();
        self.nodes.push(Node {
            tag,
            local,
            attributes,
            text: String::new(),
            parent,
            children: Vec::new(),
            end: id.0 + 1,
        });
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        id
    }

    /// Mark `id` closed: every node pushed since belongs to its subtree.
    pub(crate) fn close(&mut self, id: NodeId) {
        let end = self.nodes.len() as u32;
        self.nodes[id.index()].end = end;
    }

    pub(crate) fn append_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id.index()].text.push_str(text);
    }

    /// The root element. The parser never produces an empty document.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Local tag name of `id`.
    pub fn local(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].local
    }

    /// Attribute lookup by exact key.
    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.nodes[id.index()].attr(key)
    }

    /// Direct text of `id`, trimmed.
    pub fn text(&self, id: NodeId) -> &str {
        self.nodes[id.index()].text.trim()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Every node in document order, root first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Strict descendants of `id` in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let end = self.nodes[id.index()].end;
        (id.0 + 1..end).map(NodeId)
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Zero-based position of `id` among its parent's children.
    pub fn sibling_index(&self, id: NodeId) -> usize {
        self.parent(id)
            .and_then(|p| self.children(p).iter().position(|&c| c == id))
            .unwrap_or(0)
    }
}

/// Strip a namespace prefix (`xmi:Extension` → `Extension`).
pub fn local_name(qualified: &str) -> &str {
    qualified.rsplit(':').next().unwrap_or(qualified)
}
