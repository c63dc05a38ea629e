//! This crate implements an ordered-set Binary Search Tree (BST): a tree
//! of unique values supporting insertion, lookup, deletion, four traversal
//! orders, an AVL-style balance check, and second-highest-value lookup.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. Every `Node`
//! stores one value and owns up to two child `Node`s. The invariants that
//! make the structure searchable are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold values
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree hold values
//!    greater than its own value.
//!
//! > `Node`s with no children are called "leaf nodes".
//!
//! Together the invariants mean a lookup only ever walks one root-to-leaf
//! path, taking `O(height)` comparisons (where `height` is the longest such
//! path). They also mean an in-order traversal (left subtree, then the
//! node, then the right subtree) visits the values in ascending order,
//! which this crate exposes along with pre-order, post-order, and
//! breadth-first (level-order) traversals.
//!
//! This tree does not rebalance itself: inserting already-sorted input
//! degrades it into a chain. [`Tree::is_balanced`] reports whether every
//! node's subtrees are within one level of each other, so callers can
//! detect that degradation.
//!
//! # Examples
//!
//! ```
//! use bstree::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [8, 3, 10, 1, 6] {
//!     tree.insert(value).unwrap();
//! }
//!
//! // In-order traversal yields the values in ascending order.
//! let sorted: Vec<&i32> = tree.traverse(Traversal::InOrder).collect();
//! assert_eq!(sorted, [&1, &3, &6, &8, &10]);
//!
//! // Values are unique; duplicates are rejected rather than overwritten.
//! assert!(tree.insert(6).is_err());
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.find(&3), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod tree;

pub use error::DuplicateValue;
pub use iter::{Traversal, TraverseIter};
pub use tree::Tree;

#[cfg(test)]
pub(crate) mod test;
