//! # unist-visit
//!
//! Steered preorder traversal for unist-compatible syntax trees.
//!
//! This crate walks ordered, typed trees - every node carries a `type` tag
//! and parents own an ordered children sequence - in document order (or
//! reverse), filters nodes through an optional [`Test`], and hands each match
//! to a visitor that steers the walk: continue, skip a subtree, exit
//! entirely, or jump to an arbitrary sibling index.
//!
//! ## Architecture
//!
//! - [`Node`] is a plain owned value; the caller owns the tree and visitors
//!   may restructure it mid-walk through the mutable traversal
//! - Matching is delegated entirely to [`Test`]; the walk itself compares
//!   nothing
//! - The child loop indexes into the live children sequence and re-reads its
//!   length on every step, so insertions and removals made by the visitor
//!   are observed from the current step forward
//!
//! ## Example
//!
//! ```rust
//! use unist_visit::{Node, VisitResult, visit_with};
//!
//! let tree = Node::parent(
//!     "root",
//!     vec![Node::parent(
//!         "paragraph",
//!         vec![
//!             Node::text("text", "Some "),
//!             Node::parent("emphasis", vec![Node::text("text", "emphasis")]),
//!             Node::text("text", "."),
//!         ],
//!     )],
//! );
//!
//! let mut count = 0;
//! visit_with(&tree, "text", |_, _, _| {
//!     count += 1;
//!     VisitResult::Continue
//! }, false);
//!
//! assert_eq!(count, 3);
//! ```

mod matcher;
mod node;
pub mod visitor;

pub use matcher::{Predicate, Test, TestError};
pub use node::Node;

// Re-export the traversal surface for convenience
pub use visitor::{Action, VisitResult, VisitedMut, visit, visit_mut, visit_mut_with, visit_with};
