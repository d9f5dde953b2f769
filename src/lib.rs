//! This crate exposes [`OrderedTree`], a Binary Search Tree (BST) over a single ordered type
//! that can rebuild itself into its most compact shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of edges on the longest path from the root `Node` to a leaf `Node`).
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Balance
//!
//! A tree is balanced when, at every `Node`, the heights of the two subtrees
//! differ by at most one. An [`OrderedTree`] starts out balanced because it is
//! built from the sorted values by repeatedly promoting the middle one. Inserts
//! and deletes don't rotate anything, so they can wear that shape down (inserting
//! ascending values grows a single long branch). [`OrderedTree::rebalance`]
//! rebuilds the whole tree from its sorted values.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.len(), 11);
//! assert!(tree.is_balanced());
//!
//! for value in [150, 200, 250, 300, 400] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 16);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod traverse;
mod tree;

pub use error::TraversalError;
pub use node::{height, Diagram, Node};
pub use traverse::{IntoIter, Iter};
pub use tree::OrderedTree;
