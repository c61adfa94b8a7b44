//! Node definition.
//!
//! The tree node type walked by this crate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in a unist-compatible syntax tree.
///
/// Every node carries a required `type` discriminant. A node that owns a
/// `children` sequence is a *parent*; a node with a `value` is a *text*
/// node. Any further fields (`position`, custom metadata, ...) are kept in
/// [`data`](Node::data) and survive serialization untouched.
///
/// Nodes are plain owned values: the caller owns the tree, and visitors
/// handed out by the traversal may mutate it freely.
///
/// # Example
///
/// ```rust
/// use unist_visit::Node;
///
/// let tree = Node::parent(
///     "paragraph",
///     vec![
///         Node::text("text", "Some "),
///         Node::parent("emphasis", vec![Node::text("text", "emphasis")]),
///     ],
/// );
///
/// assert!(tree.is_parent());
/// assert_eq!(tree.children().map(<[Node]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The type of this node.
    #[serde(rename = "type")]
    pub node_type: String,

    /// Text value (for text nodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Child nodes. `Some` marks this node as a parent, even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    /// Additional fields, preserved verbatim across (de)serialization.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Node {
    /// Creates a new parent node with children.
    pub fn parent(node_type: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            node_type: node_type.into(),
            value: None,
            children: Some(children),
            data: Map::new(),
        }
    }

    /// Creates a new text node with a value.
    pub fn text(node_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            value: Some(value.into()),
            children: None,
            data: Map::new(),
        }
    }

    /// Creates a new leaf node (no children, no value).
    pub fn leaf(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            value: None,
            children: None,
            data: Map::new(),
        }
    }

    /// Adds an extension field, builder style.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Returns true if this node owns a children sequence.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        self.children.is_some()
    }

    /// Returns true if this node has at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// The children of this node, if it is a parent.
    #[inline]
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// Mutable access to the children of this node, if it is a parent.
    #[inline]
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.children.as_mut()
    }

    /// The raw text content of this node, for text nodes.
    #[inline]
    pub fn text_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
