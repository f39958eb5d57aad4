// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigon BST: an unbalanced binary search tree with single-step rotations.
//!
//! This crate is the data layer behind the Trigon visualizer.
//!
//! - Insert keys in arrival order; smaller keys go left, everything else goes right (ties go right).
//! - Rotate a node up one level with [`Tree::rotate`], addressed by its key.
//! - Walk the tree in order, inspect its shape, and check the ordering invariant.
//!
//! Nodes live in an arena and are addressed by [`NodeId`].
//! A node is never removed on its own: rotations only relink nodes, and the whole arena is dropped with the tree.
//!
//! The tree is generic over any `Copy + PartialOrd` key.
//! [`Value`] is the key produced from user text: an integer, or a not-a-number marker for tokens that do not parse.
//! A not-a-number key compares as neither smaller nor equal to anything, so it always descends right and is never found by search.
//!
//! # Example
//!
//! ```rust
//! use trigon_bst::{Direction, Tree};
//!
//! let mut tree = Tree::new();
//! for v in [5, 3, 8, 1, 4] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 8]);
//!
//! // Move 3 up above 5.
//! let moved = tree.rotate(Direction::Right, 3);
//! assert_eq!(moved, tree.root());
//! assert_eq!(tree[tree.root().unwrap()].value(), 3);
//!
//! // Unknown keys are ignored.
//! assert_eq!(tree.rotate(Direction::Left, 42), None);
//! ```
//!
//! ## Rotation policy
//!
//! A rotation always moves a node *up*.
//! When the request would move the addressed node down (it is the root, or a left rotation of a left child,
//! or a right rotation of a right child), the rotation is applied one level lower instead:
//! the addressed node's right child (left rotation) or left child (right rotation) moves up into its place.
//! If that child does not exist the request is a no-op.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;
pub mod value;

pub use tree::Tree;
pub use types::{Direction, Link, Node, NodeId};
pub use value::Value;
