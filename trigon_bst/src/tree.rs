// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: insertion, rotation, traversal.

use alloc::vec::Vec;
use core::ops::Index;

use crate::types::{Direction, Link, Node, NodeId};

/// Unbalanced binary search tree over an arena of nodes.
///
/// For every node, keys in the left subtree are `<` its key and keys in the right subtree are `>=` it.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> core::fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<K> Index<NodeId> for Tree<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.idx()]
    }
}

impl<K> Tree<K> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create an empty tree with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            root: None,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node. Previously issued [`NodeId`]s become meaningless.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Handle of the root node, if any.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Access a node, or `None` if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.idx())
    }

    /// Number of levels (0 for an empty tree, 1 for a lone root).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self[id];
            stack.extend(node.left.map(|c| (c, level + 1)));
            stack.extend(node.right.map(|c| (c, level + 1)));
        }
        deepest
    }
}

impl<K: Copy + PartialOrd> Tree<K> {
    /// Insert `value` as a new leaf and return its handle.
    ///
    /// Descends left while `value` is smaller than the current key and right otherwise,
    /// so duplicates (and incomparable keys) land in right subtrees.
    pub fn insert(&mut self, value: K) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::leaf(value));
        let Some(mut cur) = self.root else {
            self.root = Some(id);
            return id;
        };
        loop {
            let node = &mut self.nodes[cur.idx()];
            let slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => cur = next,
                None => {
                    *slot = Some(id);
                    return id;
                }
            }
        }
    }

    /// Find the first node (from the root down) whose key equals `target`.
    pub fn find(&self, target: K) -> Option<NodeId> {
        self.search(target).map(|(id, _)| id)
    }

    /// Rotate a node up one level.
    ///
    /// `target` addresses the node; `direction` chooses which kind of rotation to apply.
    /// Requests that would move the addressed node down are applied to its child instead
    /// (see the crate docs for the policy).
    ///
    /// Returns the node that moved up, or `None` when nothing changed:
    /// `target` is absent, or the child that would have to move up does not exist.
    pub fn rotate(&mut self, direction: Direction, target: K) -> Option<NodeId> {
        let (found, mut path) = self.search(target)?;
        let moves_down = match path.last() {
            None => true,
            Some(&parent) => {
                let is_left_child = self[parent].left == Some(found);
                match direction {
                    Direction::Left => is_left_child,
                    Direction::Right => !is_left_child,
                }
            }
        };
        let pivot = if moves_down {
            let node = &self[found];
            let child = match direction {
                Direction::Left => node.right,
                Direction::Right => node.left,
            };
            path.push(found);
            child?
        } else {
            found
        };
        let parent = path.pop()?;
        let grandparent = path.pop();
        self.rotate_up(direction, pivot, parent, grandparent);
        Some(pivot)
    }

    /// Keys in ascending (in-order) order.
    pub fn in_order(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            out.push(self[id].value);
            cur = self[id].right;
        }
        out
    }

    /// Pre-order list of every node with the keys of its children.
    ///
    /// This is a compact description of the tree's shape, handy for comparing trees.
    pub fn links(&self) -> Vec<Link<K>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self[id];
            out.push(Link {
                value: node.value,
                left: node.left.map(|c| self[c].value),
                right: node.right.map(|c| self[c].value),
            });
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Check the search-tree invariant: left subtrees strictly smaller, right subtrees greater or equal.
    ///
    /// Incomparable keys (such as [`Value::NotANumber`](crate::Value::NotANumber)) fail the check.
    pub fn is_search_ordered(&self) -> bool {
        // (node, inclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(NodeId, Option<K>, Option<K>)> =
            self.root.map(|r| (r, None, None)).into_iter().collect();
        while let Some((id, lo, hi)) = stack.pop() {
            let node = &self[id];
            let v = node.value;
            let within = lo.is_none_or(|lo| lo <= v) && hi.is_none_or(|hi| v < hi);
            if !within {
                return false;
            }
            stack.extend(node.left.map(|c| (c, lo, Some(v))));
            stack.extend(node.right.map(|c| (c, Some(v), hi)));
        }
        true
    }

    /// Search for `target`, recording the ancestors passed on the way down (root first).
    fn search(&self, target: K) -> Option<(NodeId, Vec<NodeId>)> {
        let mut path = Vec::new();
        let mut cur = self.root?;
        loop {
            let node = &self[cur];
            if node.value == target {
                return Some((cur, path));
            }
            path.push(cur);
            let next = if target < node.value {
                node.left
            } else {
                node.right
            };
            cur = next?;
        }
    }

    /// Lift `pivot` over its `parent` and hook it back under `grandparent` (or make it the root).
    fn rotate_up(
        &mut self,
        direction: Direction,
        pivot: NodeId,
        parent: NodeId,
        grandparent: Option<NodeId>,
    ) {
        match direction {
            Direction::Left => {
                let inner = self.nodes[pivot.idx()].left;
                self.nodes[parent.idx()].right = inner;
                self.nodes[pivot.idx()].left = Some(parent);
            }
            Direction::Right => {
                let inner = self.nodes[pivot.idx()].right;
                self.nodes[parent.idx()].left = inner;
                self.nodes[pivot.idx()].right = Some(parent);
            }
        }
        if self.root == Some(parent) {
            self.root = Some(pivot);
        } else if let Some(g) = grandparent {
            let g = &mut self.nodes[g.idx()];
            if g.left == Some(parent) {
                g.left = Some(pivot);
            } else {
                g.right = Some(pivot);
            }
        }
    }
}
