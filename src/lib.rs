//! This crate exposes a plain, unbalanced Binary Search Tree (BST) keyed by any totally ordered
//! type.
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
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf
//! `Node`. This tree never rebalances itself, so its height depends entirely on insertion order:
//! random keys give a height around `O(lg N)` while sorted keys give a height of `N`. Visiting the
//! left subtree, then the subtree root, then the right subtree yields keys in sorted order.
//!
//! ## Deleting
//!
//! Nodes don't know their parent. Deleting a node with at most one child rewires the parent's
//! child link straight to that child. Deleting a node with two children keeps the node in place
//! and moves its predecessor (the largest key of its left subtree) into it instead.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for (key, value) in [("d", "delta"), ("b", "bravo"), ("c", "charlie"), ("e", "echo"), ("a", "alpha")] {
//!     tree.insert(key, value);
//! }
//!
//! let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, ["a", "b", "c", "d", "e"]);
//!
//! tree.delete(&"d").unwrap();
//! assert_eq!(tree.find(&"d"), None);
//! assert_eq!(tree.len(), 4);
//! ```
//!
//! Operations emit `tracing` events at `trace` and `debug` level; install a subscriber to see
//! them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod tree;


pub use error::{Error, Result};
pub use iter::Iter;
pub use tree::Tree;
