//! This crate implements a self-balancing Binary Search Tree (BST) -
//! specifically an AVL tree - storing a set of distinct values, along with
//! the small command language that drives it from a single input line.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## AVL tree
//!
//! A plain BST degrades to a linked list when values arrive in sorted order.
//! An AVL tree avoids this by additionally requiring that, at every `Node`,
//! the heights of the two subtrees differ by at most one. Each insert and
//! delete restores that invariant on its way back up the tree with a single
//! or double rotation per ancestor where needed, so the height - and
//! therefore the cost of every operation - stays `O(lg N)` where `N` is the
//! number of nodes in the tree. Sorted iteration falls out naturally by
//! visiting the left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod tree;

pub use tree::Tree;
