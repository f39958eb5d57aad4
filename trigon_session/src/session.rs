// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visualization session: one tree, two surfaces.

use trigon_bst::{Direction, NodeId, Tree, Value};
use trigon_render::{PolygonStyle, Surface, TreeStyle, draw_tree, draw_triangulation};

use crate::input::parse_values;

/// State of one visualization: the current tree and the two surfaces it is drawn on.
///
/// `T` receives the node/edge diagram and `P` the polygon triangulation.
/// Both are fully redrawn whenever the tree changes.
#[derive(Debug)]
pub struct Session<T, P> {
    tree: Tree<Value>,
    tree_surface: T,
    polygon_surface: P,
    tree_style: TreeStyle,
    polygon_style: PolygonStyle,
}

impl<T: Surface, P: Surface> Session<T, P> {
    /// Create a session with an empty tree and default styles.
    pub fn new(tree_surface: T, polygon_surface: P) -> Self {
        Self {
            tree: Tree::new(),
            tree_surface,
            polygon_surface,
            tree_style: TreeStyle::default(),
            polygon_style: PolygonStyle::default(),
        }
    }

    /// Replace both styles. Takes effect on the next draw.
    pub fn with_styles(mut self, tree_style: TreeStyle, polygon_style: PolygonStyle) -> Self {
        self.tree_style = tree_style;
        self.polygon_style = polygon_style;
        self
    }

    /// Start over from `input`: build a new tree by inserting every token in order, then redraw.
    ///
    /// Blank input leaves an empty tree and two cleared surfaces.
    pub fn run(&mut self, input: &str) {
        let values = parse_values(input);
        self.tree = Tree::with_capacity(values.len());
        if values.is_empty() {
            tracing::debug!("blank input; clearing both surfaces");
            self.tree_surface.clear();
            self.polygon_surface.clear();
            return;
        }
        for value in values {
            self.tree.insert(value);
        }
        tracing::debug!(
            nodes = self.tree.len(),
            depth = self.tree.depth(),
            "built tree"
        );
        self.redraw();
    }

    /// Rotate the node holding `target` up one level and redraw.
    ///
    /// Returns the node that moved up. When `target` is absent, or the rotation has no child to lift,
    /// nothing changes and nothing is redrawn.
    pub fn rotate(&mut self, target: i64, direction: Direction) -> Option<NodeId> {
        let moved = self.tree.rotate(direction, Value::Int(target));
        match moved {
            Some(id) => {
                tracing::debug!(key = target, ?direction, lifted = %self.tree[id].value(), "rotated");
                self.redraw();
            }
            None => tracing::trace!(key = target, ?direction, "rotation had no effect"),
        }
        moved
    }

    /// [`Session::rotate`] with the UI's numeric direction flag (`0` left, otherwise right).
    pub fn rotate_flag(&mut self, target: i64, flag: u8) -> Option<NodeId> {
        self.rotate(target, Direction::from_flag(flag))
    }

    /// Redraw both surfaces from the current tree. Does nothing while the tree is empty.
    pub fn redraw(&mut self) {
        if self.tree.is_empty() {
            return;
        }
        draw_tree(&mut self.tree_surface, &self.tree, &self.tree_style);
        draw_triangulation(&mut self.polygon_surface, &self.tree, &self.polygon_style);
    }

    /// The current tree.
    pub fn tree(&self) -> &Tree<Value> {
        &self.tree
    }

    /// The surface holding the node/edge diagram.
    pub fn tree_surface(&self) -> &T {
        &self.tree_surface
    }

    /// The surface holding the polygon diagram.
    pub fn polygon_surface(&self) -> &P {
        &self.polygon_surface
    }

    /// End the session and hand back both surfaces.
    pub fn into_surfaces(self) -> (T, P) {
        (self.tree_surface, self.polygon_surface)
    }
}
