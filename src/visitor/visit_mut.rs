//! Mutating traversal.
//!
//! The mutable walk lets the visitor restructure the tree while it is being
//! walked: insert, remove, or reorder siblings, rewrite node fields, and
//! steer with the usual [`VisitResult`]. Rust cannot hand out `&mut` node
//! and `&mut` parent at once (the node lives inside the parent's children
//! vector), so the visitor receives a [`VisitedMut`] cursor that reaches both
//! through a single borrow.
//!
//! The child loop re-reads the live children sequence on every step (length
//! and contents are never cached across a visitor call), so structural edits
//! are observed from the current step forward.

use tracing::trace;

use crate::matcher::Test;
use crate::node::Node;
use crate::visitor::action::{Action, VisitResult};

/// The current stop of a mutable walk, handed to the visitor.
///
/// Gives access to the visited node and, when there is one, its parent. The
/// parent access is mutable, so the visitor may edit the surrounding sibling
/// sequence, including the slot currently being visited.
///
/// # Panics
///
/// [`node`](Self::node) and [`node_mut`](Self::node_mut) panic if the
/// visitor has already removed the visited slot through
/// [`parent_mut`](Self::parent_mut); after such an edit there is no current
/// node to return.
pub struct VisitedMut<'a> {
    place: Place<'a>,
}

enum Place<'a> {
    Root(&'a mut Node),
    Child { parent: &'a mut Node, index: usize },
}

impl<'a> VisitedMut<'a> {
    /// The visited node.
    pub fn node(&self) -> &Node {
        match &self.place {
            Place::Root(node) => node,
            Place::Child { parent, index } => &expect_children(parent)[*index],
        }
    }

    /// Mutable access to the visited node.
    pub fn node_mut(&mut self) -> &mut Node {
        match &mut self.place {
            Place::Root(node) => node,
            Place::Child { parent, index } => &mut expect_children_mut(parent)[*index],
        }
    }

    /// The node's index in its parent's children; `None` at the root.
    pub const fn index(&self) -> Option<usize> {
        match &self.place {
            Place::Root(_) => None,
            Place::Child { index, .. } => Some(*index),
        }
    }

    /// The node's parent; `None` at the root.
    pub fn parent(&self) -> Option<&Node> {
        match &self.place {
            Place::Root(_) => None,
            Place::Child { parent, .. } => Some(parent),
        }
    }

    /// Mutable access to the node's parent; `None` at the root.
    pub fn parent_mut(&mut self) -> Option<&mut Node> {
        match &mut self.place {
            Place::Root(_) => None,
            Place::Child { parent, .. } => Some(parent),
        }
    }
}

fn expect_children(parent: &Node) -> &[Node] {
    match parent.children() {
        Some(children) => children,
        None => &[],
    }
}

fn expect_children_mut(parent: &mut Node) -> &mut Vec<Node> {
    // A Child place is only built for a parent with children; reaching the
    // fallthrough means the visitor detached them, and indexing will report
    // the missing slot.
    parent.children.get_or_insert_with(Vec::new)
}

/// Visits every node of `tree` in preorder, with mutable access.
///
/// # Example
///
/// ```rust
/// use unist_visit::{Node, VisitResult, visit_mut};
///
/// let mut tree = Node::parent("root", vec![Node::text("text", "hi")]);
///
/// visit_mut(&mut tree, |mut stop| {
///     if stop.node().node_type == "text" {
///         stop.node_mut().value = Some("bye".into());
///     }
///     VisitResult::Continue
/// });
///
/// assert_eq!(tree.children().unwrap()[0].value.as_deref(), Some("bye"));
/// ```
pub fn visit_mut<V>(tree: &mut Node, visitor: V)
where
    V: FnMut(VisitedMut<'_>) -> VisitResult,
{
    visit_mut_with(tree, Test::Any, visitor, false);
}

/// Visits the nodes of `tree` matching `test`, with mutable access, in
/// preorder or reverse preorder.
///
/// Steering and matching behave exactly as in
/// [`visit_with`](crate::visit_with). Structural edits made by the visitor
/// are picked up by the walk from the current step forward; when an edit
/// shifts the remaining siblings, return [`VisitResult::ContinueAt`] with
/// the absolute index to resume from.
pub fn visit_mut_with<T, V>(tree: &mut Node, test: T, mut visitor: V, reverse: bool)
where
    T: Into<Test>,
    V: FnMut(VisitedMut<'_>) -> VisitResult,
{
    let test = test.into();
    trace!(root = %tree.node_type, reverse, "walking tree mutably");

    let result = if test.matches(tree, None, None) {
        visitor(VisitedMut {
            place: Place::Root(&mut *tree),
        })
    } else {
        VisitResult::Continue
    };

    // A root visit has no sibling loop, so only the action matters here.
    let (action, _) = result.decode();
    if action == Action::Continue && tree.is_parent() {
        walk_children_mut(tree, &test, &mut visitor, reverse);
    }
}

/// Walks the live children of `parent`. Returns `Exit` to unwind the walk.
fn walk_children_mut<V>(parent: &mut Node, test: &Test, visitor: &mut V, reverse: bool) -> Action
where
    V: FnMut(VisitedMut<'_>) -> VisitResult,
{
    let step: isize = if reverse { -1 } else { 1 };
    let mut cursor: isize = if reverse {
        parent.children().map_or(0, <[Node]>::len) as isize - 1
    } else {
        0
    };

    loop {
        // Fresh length every turn: the visitor may have edited the sequence.
        let len = parent.children().map_or(0, <[Node]>::len);
        if cursor < 0 || cursor as usize >= len {
            break;
        }
        let index = cursor as usize;

        let (matched, was_parent) = {
            let child = &expect_children(parent)[index];
            (
                test.matches(child, Some(index), Some(&*parent)),
                child.is_parent(),
            )
        };
        let result = if matched {
            visitor(VisitedMut {
                place: Place::Child {
                    parent: &mut *parent,
                    index,
                },
            })
        } else {
            VisitResult::Continue
        };

        let (action, next) = result.decode();
        if action == Action::Exit {
            return Action::Exit;
        }

        // Descend through the visited slot only when it held a parent before
        // the visit and still holds one after. A visitor that removed the
        // current leaf must not drag the walk into its successor's subtree,
        // and a shrunken sequence leaves nothing to enter.
        if action != Action::Skip
            && was_parent
            && let Some(child) = parent.children.as_mut().and_then(|c| c.get_mut(index))
            && child.is_parent()
            && walk_children_mut(child, test, visitor, reverse) == Action::Exit
        {
            return Action::Exit;
        }

        match next {
            // Absolute index, applied after the subtree above.
            Some(next) => cursor = next as isize,
            None => cursor += step,
        }
    }

    Action::Continue
}
