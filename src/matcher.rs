//! Node matching.
//!
//! A [`Test`] decides which nodes of a tree trigger the visitor. The
//! traversal itself contains no comparison logic; it only asks
//! [`Test::matches`].

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::Node;

/// Signature of a predicate test: `(node, index, parent) -> bool`.
pub type Predicate = dyn Fn(&Node, Option<usize>, Option<&Node>) -> bool;

/// A matcher specification for filtering visited nodes.
///
/// # Example
///
/// ```rust
/// use unist_visit::{Node, Test};
///
/// let node = Node::text("text", "hi");
///
/// assert!(Test::Any.matches(&node, None, None));
/// assert!(Test::kind("text").matches(&node, None, None));
/// assert!(!Test::kind("emphasis").matches(&node, None, None));
/// assert!(Test::any_of(["emphasis", "text"]).matches(&node, None, None));
/// ```
pub enum Test {
    /// Matches every node.
    Any,
    /// Matches nodes whose `type` equals the given name.
    Kind(String),
    /// Matches nodes whose fields include every listed key/value pair.
    Attrs(Map<String, Value>),
    /// Matches nodes for which the predicate returns true.
    Predicate(Box<Predicate>),
    /// Matches nodes that satisfy at least one of the listed tests.
    AnyOf(Vec<Test>),
}

impl Test {
    /// A test on the node's `type` name.
    pub fn kind(name: impl Into<String>) -> Self {
        Self::Kind(name.into())
    }

    /// A partial-attribute test: every listed field must be present on the
    /// node with an equal value. `type` and `value` address the node's own
    /// fields; any other key addresses an extension field.
    pub fn attrs(fields: Map<String, Value>) -> Self {
        Self::Attrs(fields)
    }

    /// A predicate test called with `(node, index, parent)`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Node, Option<usize>, Option<&Node>) -> bool + 'static,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// A logical-OR combination of tests.
    pub fn any_of<I>(tests: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Test>,
    {
        Self::AnyOf(tests.into_iter().map(Into::into).collect())
    }

    /// Decodes a dynamic test description.
    ///
    /// `null` matches everything, a string matches by `type`, an object is a
    /// partial-attribute test, and an array is a logical OR of its elements.
    /// Other shapes are rejected.
    pub fn from_value(value: Value) -> Result<Self, TestError> {
        match value {
            Value::Null => Ok(Self::Any),
            Value::String(name) => Ok(Self::Kind(name)),
            Value::Object(fields) => Ok(Self::Attrs(fields)),
            Value::Array(elements) => {
                let tests = elements
                    .into_iter()
                    .map(Self::from_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::AnyOf(tests))
            }
            Value::Bool(_) => Err(TestError::unsupported("boolean")),
            Value::Number(_) => Err(TestError::unsupported("number")),
        }
    }

    /// Returns true if `node` satisfies this test.
    ///
    /// `index` and `parent` describe the node's current place in its parent's
    /// children sequence; both are `None` for a root node.
    pub fn matches(&self, node: &Node, index: Option<usize>, parent: Option<&Node>) -> bool {
        match self {
            Self::Any => true,
            Self::Kind(name) => node.node_type == *name,
            Self::Attrs(fields) => fields.iter().all(|(key, want)| field_eq(node, key, want)),
            Self::Predicate(predicate) => predicate(node, index, parent),
            Self::AnyOf(tests) => tests.iter().any(|test| test.matches(node, index, parent)),
        }
    }
}

/// Compares one node field against an expected value.
fn field_eq(node: &Node, key: &str, want: &Value) -> bool {
    match key {
        "type" => want.as_str() == Some(node.node_type.as_str()),
        "value" => match want {
            Value::String(want) => node.value.as_deref() == Some(want.as_str()),
            Value::Null => node.value.is_none(),
            _ => false,
        },
        _ => node.data.get(key) == Some(want),
    }
}

impl From<&str> for Test {
    fn from(name: &str) -> Self {
        Self::Kind(name.to_owned())
    }
}

impl From<String> for Test {
    fn from(name: String) -> Self {
        Self::Kind(name)
    }
}

impl From<Vec<Test>> for Test {
    fn from(tests: Vec<Test>) -> Self {
        Self::AnyOf(tests)
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Kind(name) => f.debug_tuple("Kind").field(name).finish(),
            Self::Attrs(fields) => f.debug_tuple("Attrs").field(fields).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::AnyOf(tests) => f.debug_tuple("AnyOf").field(tests).finish(),
        }
    }
}

/// Errors from decoding a dynamic test description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestError {
    /// The value is not a shape a test can be built from.
    #[error("expected null, string, object, or array as test, found {found}")]
    Unsupported {
        /// Name of the offending JSON shape.
        found: String,
    },
}

impl TestError {
    fn unsupported(found: impl Into<String>) -> Self {
        Self::Unsupported {
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn text(value: &str) -> Node {
        Node::text("text", value)
    }

    #[test]
    fn test_any_matches_everything() {
        assert!(Test::Any.matches(&text("a"), None, None));
        assert!(Test::Any.matches(&Node::leaf("thematicBreak"), Some(3), None));
    }

    #[test]
    fn test_kind_compares_type() {
        let node = text("a");
        assert!(Test::kind("text").matches(&node, None, None));
        assert!(!Test::kind("emphasis").matches(&node, None, None));
    }

    #[test]
    fn test_attrs_partial_match() {
        let node = Node::text("text", ".").with_field("checked", json!(true));

        let Value::Object(fields) = json!({"value": "."}) else {
            unreachable!()
        };
        assert!(Test::attrs(fields).matches(&node, None, None));

        let Value::Object(fields) = json!({"value": ".", "checked": true}) else {
            unreachable!()
        };
        assert!(Test::attrs(fields).matches(&node, None, None));

        let Value::Object(fields) = json!({"value": ".", "checked": false}) else {
            unreachable!()
        };
        assert!(!Test::attrs(fields).matches(&node, None, None));
    }

    #[test]
    fn test_predicate_receives_index_and_parent() {
        let test = Test::predicate(|node, index, parent| {
            node.node_type == "text"
                && index == Some(2)
                && parent.is_some_and(|p| p.node_type == "paragraph")
        });

        let parent = Node::parent("paragraph", vec![]);
        assert!(test.matches(&text("a"), Some(2), Some(&parent)));
        assert!(!test.matches(&text("a"), Some(1), Some(&parent)));
        assert!(!test.matches(&text("a"), Some(2), None));
    }

    #[test]
    fn test_any_of_is_logical_or() {
        let test = Test::any_of(["emphasis", "text"]);
        assert!(test.matches(&text("a"), None, None));
        assert!(!test.matches(&Node::leaf("break"), None, None));

        let mixed = Test::any_of([
            Test::kind("emphasis"),
            Test::predicate(|node, _, _| node.text_value() == Some("a")),
        ]);
        assert!(mixed.matches(&text("a"), None, None));
        assert!(!mixed.matches(&text("b"), None, None));
    }

    #[test]
    fn test_from_value_shapes() {
        assert!(matches!(Test::from_value(json!(null)), Ok(Test::Any)));
        assert!(matches!(
            Test::from_value(json!("text")),
            Ok(Test::Kind(name)) if name == "text"
        ));
        assert!(matches!(
            Test::from_value(json!({"depth": 1})),
            Ok(Test::Attrs(_))
        ));
        assert!(matches!(
            Test::from_value(json!(["text", {"depth": 1}])),
            Ok(Test::AnyOf(tests)) if tests.len() == 2
        ));
    }

    #[test]
    fn test_from_value_rejects_other_shapes() {
        assert_eq!(
            Test::from_value(json!(1)).unwrap_err(),
            TestError::unsupported("number")
        );
        assert_eq!(
            Test::from_value(json!([true])).unwrap_err(),
            TestError::unsupported("boolean")
        );
    }
}
