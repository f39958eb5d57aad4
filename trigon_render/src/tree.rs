// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node/edge diagram of a tree.

use alloc::string::ToString;
use alloc::vec;
use core::fmt::Display;

use kurbo::{Circle, Line, Point};
use trigon_bst::{NodeId, Tree};

use crate::surface::Surface;
use crate::types::Layers;

/// Layout and appearance of the node/edge diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeStyle {
    /// Center of the root node.
    pub origin: Point,
    /// Radius of each node circle.
    pub node_radius: f64,
    /// Vertical gap between the bottom of a node and the top of its children.
    pub level_step: f64,
    /// Horizontal spread at the root. Children of the root sit `sibling_step / 2` to either side,
    /// and the offset halves again at every deeper level so sibling subtrees do not overlap.
    pub sibling_step: f64,
    /// Labels are drawn at `(x - label_offset, y + label_offset)` to sit roughly centered in the node.
    pub label_offset: f64,
    /// Parts to draw.
    pub layers: Layers,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            origin: Point::new(150.0, 40.0),
            node_radius: 15.0,
            level_step: 45.0,
            sibling_step: 150.0,
            label_offset: 2.0,
            layers: Layers::default(),
        }
    }
}

/// Clear `surface` and draw `tree` as circles joined by edges, top-down from [`TreeStyle::origin`].
///
/// Each child's subtree is drawn before the edge leading to it; left before right.
/// Absent children are skipped.
pub fn draw_tree<K, S>(surface: &mut S, tree: &Tree<K>, style: &TreeStyle)
where
    K: Copy + Display,
    S: Surface + ?Sized,
{
    surface.clear();
    let Some(root) = tree.root() else {
        return;
    };
    let r = style.node_radius;
    // Pending work, popped in drawing order.
    let mut stack = vec![Step::Node(root, style.origin, style.sibling_step / 2.0)];
    while let Some(step) = stack.pop() {
        let (id, center, dx) = match step {
            Step::Node(id, center, dx) => (id, center, dx),
            Step::Edge(line) => {
                surface.stroke_line(line);
                continue;
            }
        };
        let node = &tree[id];
        if style.layers.contains(Layers::NODES) {
            surface.stroke_circle(Circle::new(center, r));
        }
        if style.layers.contains(Layers::LABELS) {
            let at = Point::new(center.x - style.label_offset, center.y + style.label_offset);
            surface.draw_text(at, &node.value().to_string());
        }
        // Pushed right first so the left subtree and its edge come off the stack first.
        for (child, offset) in [(node.right(), dx), (node.left(), -dx)] {
            let Some(child) = child else {
                continue;
            };
            if style.layers.contains(Layers::EDGES) {
                stack.push(Step::Edge(Line::new(
                    (center.x, center.y + r),
                    (center.x + offset, center.y + style.level_step),
                )));
            }
            let child_center = Point::new(center.x + offset, center.y + style.level_step + r);
            stack.push(Step::Node(child, child_center, dx / 2.0));
        }
    }
}

enum Step {
    /// Draw a node centered at the point; its children sit the given distance to either side.
    Node(NodeId, Point, f64),
    /// Stroke the edge into an already drawn subtree.
    Edge(Line),
}
