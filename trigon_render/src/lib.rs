// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigon Render: draw a binary search tree two ways.
//!
//! A binary tree with `n` nodes corresponds to a triangulation of a convex `(n + 2)`-gon.
//! This crate paints both pictures of the same [`trigon_bst::Tree`]:
//!
//! - [`draw_tree`]: the node/edge diagram, laid out top-down with the horizontal spread halving at every level.
//! - [`draw_triangulation`]: the polygon whose vertices are the tree's keys (descending) plus two sentinels,
//!   `-inf` and `inf`, with the chords contributed by every node.
//!
//! Both renderers paint onto a [`Surface`], a minimal drawing-surface abstraction
//! (clear, stroke circle, stroke line, draw text) over Kurbo geometry.
//! [`Recording`] captures draw calls for inspection and [`SvgSurface`] serializes them to SVG.
//!
//! ## The correspondence
//!
//! Each node is connected to its *left parent* and *right parent*: the nearest ancestors it sits right of and left of.
//! The root's parents are the sentinels. A left child inherits its parent's left parent and uses the parent itself
//! as its right parent; a right child mirrors this. Together with the `-inf`–`inf` chord this draws `2n + 1` lines.
//!
//! Every node contributes both chords whether or not it has two children. For incomplete trees this is
//! not a minimal triangulation; the mapping assumes absent children are completed by the sentinels.
//!
//! ## Pieces
//!
//! - [`vertex_labels`] → [`vertices`] → [`VertexMap`]: polygon geometry, in polygon-local coordinates.
//! - [`label_vertices`]: polygon boundary and vertex labels.
//! - [`triangulate`]: the chords.
//! - [`TreeStyle`], [`PolygonStyle`]: sizes, origins, and [`Layers`] toggles.
//!
//! # Example
//!
//! ```rust
//! use trigon_bst::Tree;
//! use trigon_render::{DrawCmd, PolygonStyle, Recording, TreeStyle, draw_tree, draw_triangulation};
//!
//! let mut tree = Tree::new();
//! for v in [5_i64, 3, 8] {
//!     tree.insert(v);
//! }
//!
//! let mut nodes = Recording::new();
//! draw_tree(&mut nodes, &tree, &TreeStyle::default());
//! assert_eq!(nodes.circles().count(), 3);
//! assert_eq!(nodes.lines().count(), 2);
//!
//! let mut polygon = Recording::new();
//! draw_triangulation(&mut polygon, &tree, &PolygonStyle::default());
//! let labels: Vec<&str> = polygon.texts().map(|(_, text)| text).collect();
//! assert_eq!(labels, ["8", "5", "3", "-inf", "inf"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod label;
pub mod polygon;
pub mod surface;
pub mod svg;
pub mod tree;
pub mod types;

pub use label::Label;
pub use polygon::{
    PolygonStyle, VertexMap, draw_triangulation, label_vertices, triangulate, vertex_labels,
    vertices,
};
pub use surface::{DrawCmd, Recording, Surface};
pub use svg::SvgSurface;
pub use tree::{TreeStyle, draw_tree};
pub use types::Layers;
