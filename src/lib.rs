//! This crate exposes a Binary Search Tree (BST) that is built
//! height-balanced from its input, is allowed to drift out of balance
//! under later insertions and deletions, and can be rebuilt into its
//! minimal-height shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of the
//! trees in this crate are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//! 3. No value is stored twice. Inserting a value that is already present
//!    leaves the tree untouched.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! Balance, on the other hand, is deliberately *not* an invariant here.
//! [`tree::Tree::build`] and [`tree::Tree::rebalance`] produce trees of
//! minimal height for their value set, but insertions in between never
//! rotate anything, so a hostile insertion order degrades the height to
//! `O(N)`. [`tree::Tree::is_balanced`] reports whether that has happened.

#![deny(missing_docs)]

pub mod tree;

mod pretty;

#[cfg(test)]
mod test;
