//! Read-only traversal.

use tracing::trace;

use crate::matcher::Test;
use crate::node::Node;
use crate::visitor::action::{Action, VisitResult};

/// Outcome of visiting one node together with its subtree.
enum Flow {
    /// Abort the entire walk.
    Exit,
    /// Resume the parent's child loop, optionally at an absolute index.
    Resume(Option<usize>),
}

/// Visits every node of `tree` in preorder.
///
/// The visitor is called with `(node, index, parent)`; the root is visited
/// with `(None, None)`. The returned [`VisitResult`] steers the walk.
///
/// # Example
///
/// ```rust
/// use unist_visit::{Node, VisitResult, visit};
///
/// let tree = Node::parent("root", vec![Node::text("text", "hi")]);
/// let mut kinds = Vec::new();
///
/// visit(&tree, |node, _, _| {
///     kinds.push(node.node_type.clone());
///     VisitResult::Continue
/// });
///
/// assert_eq!(kinds, ["root", "text"]);
/// ```
pub fn visit<V>(tree: &Node, visitor: V)
where
    V: FnMut(&Node, Option<usize>, Option<&Node>) -> VisitResult,
{
    visit_with(tree, Test::Any, visitor, false);
}

/// Visits the nodes of `tree` matching `test`, in preorder, or in reverse
/// preorder when `reverse` is set (siblings last-to-first at every level).
///
/// Nodes failing `test` are not reported but their subtrees are still
/// walked. Steering applies as with [`visit`].
///
/// # Example
///
/// ```rust
/// use unist_visit::{Node, VisitResult, visit_with};
///
/// let tree = Node::parent(
///     "root",
///     vec![Node::text("text", "a"), Node::leaf("break"), Node::text("text", "b")],
/// );
/// let mut seen = Vec::new();
///
/// visit_with(&tree, "text", |node, index, _| {
///     seen.push((node.value.clone().unwrap(), index));
///     VisitResult::Continue
/// }, false);
///
/// assert_eq!(seen, [("a".to_owned(), Some(0)), ("b".to_owned(), Some(2))]);
/// ```
pub fn visit_with<T, V>(tree: &Node, test: T, mut visitor: V, reverse: bool)
where
    T: Into<Test>,
    V: FnMut(&Node, Option<usize>, Option<&Node>) -> VisitResult,
{
    let test = test.into();
    trace!(root = %tree.node_type, reverse, "walking tree");
    walk(tree, None, None, &test, &mut visitor, reverse);
}

fn walk<V>(
    node: &Node,
    index: Option<usize>,
    parent: Option<&Node>,
    test: &Test,
    visitor: &mut V,
    reverse: bool,
) -> Flow
where
    V: FnMut(&Node, Option<usize>, Option<&Node>) -> VisitResult,
{
    let result = if test.matches(node, index, parent) {
        visitor(node, index, parent)
    } else {
        VisitResult::Continue
    };

    let (action, next) = result.decode();
    if action == Action::Exit {
        return Flow::Exit;
    }
    if action != Action::Skip
        && node.is_parent()
        && matches!(walk_children(node, test, visitor, reverse), Flow::Exit)
    {
        return Flow::Exit;
    }

    // The parent's child loop applies the index, after the subtree above.
    Flow::Resume(next)
}

fn walk_children<V>(parent: &Node, test: &Test, visitor: &mut V, reverse: bool) -> Flow
where
    V: FnMut(&Node, Option<usize>, Option<&Node>) -> VisitResult,
{
    let step: isize = if reverse { -1 } else { 1 };
    let children = parent.children().unwrap_or_default();
    let mut cursor: isize = if reverse {
        children.len() as isize - 1
    } else {
        0
    };

    while cursor >= 0 && (cursor as usize) < children.len() {
        let index = cursor as usize;
        match walk(&children[index], Some(index), Some(parent), test, visitor, reverse) {
            Flow::Exit => return Flow::Exit,
            // An explicit index is absolute, not a delta.
            Flow::Resume(Some(next)) => cursor = next as isize,
            Flow::Resume(None) => cursor += step,
        }
    }

    Flow::Resume(None)
}
