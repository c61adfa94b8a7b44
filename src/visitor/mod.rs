//! Tree traversal.
//!
//! This module provides the steered preorder walks over [`Node`] trees.
//!
//! # Overview
//!
//! - [`visit`] / [`visit_with`] - read-only traversal
//! - [`visit_mut`] / [`visit_mut_with`] - traversal with tree mutation
//! - [`Action`] / [`VisitResult`] - traversal control values
//!
//! # Examples
//!
//! ## Collecting matching nodes
//!
//! ```rust
//! use unist_visit::{Node, VisitResult, visit_with};
//!
//! let tree = Node::parent(
//!     "root",
//!     vec![
//!         Node::text("text", "a"),
//!         Node::parent("emphasis", vec![Node::text("text", "b")]),
//!     ],
//! );
//!
//! let mut texts = Vec::new();
//! visit_with(&tree, "text", |node, _, _| {
//!     texts.push(node.value.clone().unwrap());
//!     VisitResult::Continue
//! }, false);
//!
//! assert_eq!(texts, ["a", "b"]);
//! ```
//!
//! ## Early termination
//!
//! ```rust
//! use unist_visit::{Node, VisitResult, visit};
//!
//! let tree = Node::parent("root", vec![Node::text("text", "a")]);
//! let mut visits = 0;
//!
//! visit(&tree, |_, _, _| {
//!     visits += 1;
//!     VisitResult::Exit // Stop traversal
//! });
//!
//! assert_eq!(visits, 1);
//! ```
//!
//! [`Node`]: crate::Node

mod action;
mod visit;
mod visit_mut;

pub use action::{Action, VisitResult};
pub use visit::{visit, visit_with};
pub use visit_mut::{VisitedMut, visit_mut, visit_mut_with};
