//! This crate exposes an unbalanced Binary Search Tree (BST) storing a set of ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree in this crate does nothing
//! to limit its height so keys inserted in sorted order produce a chain with a
//! height of `N`. Visiting the left subtree, then the subtree root, then the right
//! subtree yields the keys in sorted order.
//!
//! # Examples
//!
//! ```
//! use bst::{Order, Tree};
//!
//! let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//!
//! let mut out = Vec::new();
//! tree.print(Order::Preorder, &mut out).unwrap();
//! assert_eq!(out, b"5\n3\n1\n4\n8\n");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;
mod walk;

pub use error::{Result, TreeError};
pub use tree::Tree;
pub use walk::Order;
