// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node handles, nodes, rotation direction, and shape links.

/// Handle of a node in a [`Tree`](crate::Tree).
///
/// Handles are slot indices into the tree's arena.
/// Nodes are never freed individually, so a handle stays valid for as long as the tree that issued it
/// (until [`Tree::clear`](crate::Tree::clear)).
/// Using a handle with a different tree is a logic error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A node of the tree: a key and up to two children.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) value: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K: Copy> Node<K> {
    pub(crate) const fn leaf(value: K) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub const fn value(&self) -> K {
        self.value
    }

    /// Left child (keys strictly smaller than this node's key).
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child (keys greater than or equal to this node's key).
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// Direction of a single rotation.
///
/// A left rotation lifts a right child over its parent; a right rotation lifts a left child.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Lift a right child; its parent becomes its left child.
    Left,
    /// Lift a left child; its parent becomes its right child.
    Right,
}

impl Direction {
    /// Decode the numeric flag used by UI controls: `0` is left, anything else is right.
    pub const fn from_flag(flag: u8) -> Self {
        match flag {
            0 => Self::Left,
            _ => Self::Right,
        }
    }
}

/// One node's contribution to the shape of a tree, as reported by [`Tree::links`](crate::Tree::links).
///
/// Two trees with equal link lists (in pre-order) have the same shape and keys.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link<K> {
    /// Key of the node.
    pub value: K,
    /// Key of its left child, if any.
    pub left: Option<K>,
    /// Key of its right child, if any.
    pub right: Option<K>,
}
