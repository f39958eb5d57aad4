// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon triangulation engine.
//!
//! A tree with `n` keys is drawn as a convex `(n + 2)`-gon whose vertices are the keys in descending
//! order followed by the sentinels `-inf` and `inf`, placed evenly on a circle.
//! Every node then draws a chord to its left parent and to its right parent.
//!
//! Geometry is computed in polygon-local coordinates and mapped onto the surface with
//! [`PolygonStyle::transform`].

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::f64::consts::TAU;

use kurbo::{Affine, Line, Point, Vec2};
use trigon_bst::{NodeId, Tree};

use crate::label::Label;
use crate::surface::Surface;
use crate::types::Layers;

/// Layout and appearance of the polygon diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonStyle {
    /// Radius of the circle the vertices sit on.
    pub radius: f64,
    /// Translation from polygon-local coordinates to the surface.
    pub origin: Point,
    /// Labels are drawn at the vertex position scaled by this factor, pushing them outward.
    pub label_scale: f64,
    /// Parts to draw.
    pub layers: Layers,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            radius: 100.0,
            origin: Point::new(180.0, 80.0),
            label_scale: 1.1,
            layers: Layers::default(),
        }
    }
}

impl PolygonStyle {
    /// Map from polygon-local coordinates to surface coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin.to_vec2())
    }
}

/// Ordered mapping from vertex label to polygon-local position.
///
/// Iteration follows insertion order. Setting a label that is already present moves that vertex
/// but keeps its place in the order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexMap {
    entries: Vec<(Label, Point)>,
}

impl VertexMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of `label`.
    pub fn set(&mut self, label: Label, at: Point) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = at,
            None => self.entries.push((label, at)),
        }
    }

    /// Position of `label`, if present.
    pub fn get(&self, label: Label) -> Option<Point> {
        self.entries
            .iter()
            .find_map(|&(l, at)| (l == label).then_some(at))
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vertices in order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, Point)> + '_ {
        self.entries.iter().copied()
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.entries.iter().map(|&(l, _)| l)
    }
}

/// Vertex labels for `tree`: integer keys in descending order, then any not-a-number keys,
/// then `NegInf` and `PosInf`.
///
/// Duplicate keys are kept; [`vertices`] collapses them onto one vertex.
pub fn vertex_labels<K>(tree: &Tree<K>) -> Vec<Label>
where
    K: Copy + PartialOrd + Into<Label>,
{
    let mut labels: Vec<Label> = tree.in_order().into_iter().map(Into::into).collect();
    labels.sort_by_key(|label| match *label {
        Label::Int(v) => (0, Reverse(v)),
        _ => (1, Reverse(0)),
    });
    labels.push(Label::NegInf);
    labels.push(Label::PosInf);
    labels
}

/// Place `labels` evenly on a circle.
///
/// Label `i` of `m` sits at angle `i · 2π / m` on a circle of [`PolygonStyle::radius`] `r`,
/// shifted by `(-r/2, r/2)`. Coordinates are polygon-local.
pub fn vertices(labels: &[Label], style: &PolygonStyle) -> VertexMap {
    let mut map = VertexMap::new();
    if labels.is_empty() {
        return map;
    }
    let r = style.radius;
    let step = TAU / labels.len() as f64;
    let shift = Vec2::new(-0.5 * r, 0.5 * r);
    for (i, &label) in labels.iter().enumerate() {
        let at = (Vec2::from_angle(step * i as f64) * r + shift).to_point();
        map.set(label, at);
    }
    map
}

/// Stroke the polygon outline and draw every vertex label.
///
/// The outline joins consecutive vertices in map order and closes back to the first.
/// Labels are drawn at the vertex position scaled by [`PolygonStyle::label_scale`].
pub fn label_vertices<S>(surface: &mut S, vertices: &VertexMap, style: &PolygonStyle)
where
    S: Surface + ?Sized,
{
    let to_surface = style.transform();
    let ring = &vertices.entries;
    if style.layers.contains(Layers::BOUNDARY) && ring.len() > 1 {
        for (i, &(_, a)) in ring.iter().enumerate() {
            let (_, b) = ring[(i + 1) % ring.len()];
            surface.stroke_line(Line::new(to_surface * a, to_surface * b));
        }
    }
    if style.layers.contains(Layers::LABELS) {
        for (label, at) in vertices.iter() {
            let at = to_surface * Point::new(at.x * style.label_scale, at.y * style.label_scale);
            surface.draw_text(at, &label.to_string());
        }
    }
}

/// Draw the triangulation chords of `tree` over `vertices`.
///
/// First the `NegInf`–`PosInf` chord, then, from the root down, a chord from each node to its
/// left parent and to its right parent. For `n` nodes this strokes `2n + 1` lines.
pub fn triangulate<K, S>(surface: &mut S, tree: &Tree<K>, vertices: &VertexMap, style: &PolygonStyle)
where
    K: Copy + PartialOrd + Into<Label>,
    S: Surface + ?Sized,
{
    if !style.layers.contains(Layers::CHORDS) {
        return;
    }
    let mut chords = Chords {
        surface,
        vertices,
        to_surface: style.transform(),
    };
    chords.draw(Label::NegInf, Label::PosInf);
    if let Some(root) = tree.root() {
        chords.descend(tree, root);
    }
}

/// Clear `surface` and draw the full polygon diagram for `tree`.
///
/// An empty tree leaves the surface blank.
pub fn draw_triangulation<K, S>(surface: &mut S, tree: &Tree<K>, style: &PolygonStyle)
where
    K: Copy + PartialOrd + Into<Label>,
    S: Surface + ?Sized,
{
    surface.clear();
    if tree.is_empty() {
        return;
    }
    let labels = vertex_labels(tree);
    let map = vertices(&labels, style);
    label_vertices(surface, &map, style);
    triangulate(surface, tree, &map, style);
}

struct Chords<'a, S: ?Sized> {
    surface: &'a mut S,
    vertices: &'a VertexMap,
    to_surface: Affine,
}

impl<S: Surface + ?Sized> Chords<'_, S> {
    fn draw(&mut self, from: Label, to: Label) {
        if let (Some(a), Some(b)) = (self.vertices.get(from), self.vertices.get(to)) {
            self.surface
                .stroke_line(Line::new(self.to_surface * a, self.to_surface * b));
        }
    }

    /// Pre-order walk from `root`, each node carrying its left and right parent.
    fn descend<K>(&mut self, tree: &Tree<K>, root: NodeId)
    where
        K: Copy + PartialOrd + Into<Label>,
    {
        let mut stack = vec![(root, Label::NegInf, Label::PosInf)];
        while let Some((id, left_parent, right_parent)) = stack.pop() {
            let node = &tree[id];
            let here: Label = node.value().into();
            self.draw(here, left_parent);
            self.draw(here, right_parent);
            stack.extend(node.right().map(|right| (right, here, right_parent)));
            stack.extend(node.left().map(|left| (left, left_parent, here)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recording;
    use trigon_bst::{Direction, Value};

    const EPS: f64 = 1e-9;

    fn build(values: &[i64]) -> Tree<i64> {
        let mut tree = Tree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < EPS
    }

    fn same_segment(line: Line, a: Point, b: Point) -> bool {
        (close(line.p0, a) && close(line.p1, b)) || (close(line.p0, b) && close(line.p1, a))
    }

    #[test]
    fn labels_descend_with_sentinels_last() {
        let tree = build(&[5, 3, 8]);
        assert_eq!(
            vertex_labels(&tree),
            vec![
                Label::Int(8),
                Label::Int(5),
                Label::Int(3),
                Label::NegInf,
                Label::PosInf
            ]
        );
    }

    #[test]
    fn nan_labels_follow_integers() {
        let mut tree = Tree::new();
        for token in ["4", "x", "9", "1"] {
            tree.insert(Value::parse(token));
        }
        assert_eq!(
            vertex_labels(&tree),
            vec![
                Label::Int(9),
                Label::Int(4),
                Label::Int(1),
                Label::NotANumber,
                Label::NegInf,
                Label::PosInf
            ]
        );
    }

    #[test]
    fn vertices_on_shifted_circle() {
        let tree = build(&[5, 3, 8]);
        let labels = vertex_labels(&tree);
        let map = vertices(&labels, &PolygonStyle::default());
        assert_eq!(map.len(), tree.len() + 2);
        assert_eq!(map.labels().collect::<Vec<_>>(), labels);

        // Vertex 0 sits at angle 0; every vertex is `radius` away from the shifted center.
        let center = Point::new(-50.0, 50.0);
        assert!(close(map.get(Label::Int(8)).unwrap(), Point::new(50.0, 50.0)));
        for (_, at) in map.iter() {
            assert!(((at - center).hypot() - 100.0).abs() < EPS, "on the circle");
        }
        let step = TAU / 5.0;
        let expected = center + Vec2::from_angle(3.0 * step) * 100.0;
        assert!(close(map.get(Label::NegInf).unwrap(), expected));
    }

    #[test]
    fn duplicate_labels_share_a_vertex() {
        let labels = [Label::Int(5), Label::Int(5), Label::NegInf, Label::PosInf];
        let map = vertices(&labels, &PolygonStyle::default());
        assert_eq!(map.len(), 3);
        assert_eq!(map.labels().next(), Some(Label::Int(5)));
        // The second placement (angle π/2) wins.
        assert!(close(map.get(Label::Int(5)).unwrap(), Point::new(-50.0, 150.0)));
    }

    #[test]
    fn chord_count_is_two_per_node_plus_one() {
        let cases: [&[i64]; 4] = [&[5, 3, 8], &[1, 2, 3, 4, 5], &[10, 5, 15, 3, 7, 6, 8], &[42]];
        for values in cases {
            let tree = build(values);
            let map = vertices(&vertex_labels(&tree), &PolygonStyle::default());
            let mut rec = Recording::new();
            triangulate(&mut rec, &tree, &map, &PolygonStyle::default());
            assert_eq!(rec.lines().count(), 2 * values.len() + 1);
        }
    }

    #[test]
    fn root_chords_reach_both_sentinels() {
        let tree = build(&[5, 3, 8]);
        let style = PolygonStyle::default();
        let map = vertices(&vertex_labels(&tree), &style);
        let mut rec = Recording::new();
        triangulate(&mut rec, &tree, &map, &style);
        let lines: Vec<Line> = rec.lines().collect();
        let tf = style.transform();
        let at = |label| tf * map.get(label).unwrap();

        assert!(same_segment(lines[0], at(Label::NegInf), at(Label::PosInf)));
        assert!(same_segment(lines[1], at(Label::Int(5)), at(Label::NegInf)));
        assert!(same_segment(lines[2], at(Label::Int(5)), at(Label::PosInf)));
        // 3 sits between -inf and 5; 8 between 5 and inf.
        assert!(same_segment(lines[3], at(Label::Int(3)), at(Label::NegInf)));
        assert!(same_segment(lines[4], at(Label::Int(3)), at(Label::Int(5))));
        assert!(same_segment(lines[5], at(Label::Int(8)), at(Label::Int(5))));
        assert!(same_segment(lines[6], at(Label::Int(8)), at(Label::PosInf)));
    }

    #[test]
    fn chain_keeps_both_chords_per_node() {
        // A right-leaning chain: every node still draws two chords.
        let tree = build(&[1, 2, 3]);
        let style = PolygonStyle::default();
        let map = vertices(&vertex_labels(&tree), &style);
        let mut rec = Recording::new();
        triangulate(&mut rec, &tree, &map, &style);
        let tf = style.transform();
        let at = |label| tf * map.get(label).unwrap();
        let lines: Vec<Line> = rec.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(same_segment(lines[3], at(Label::Int(2)), at(Label::Int(1))));
        assert!(same_segment(lines[4], at(Label::Int(2)), at(Label::PosInf)));
        assert!(same_segment(lines[6], at(Label::Int(3)), at(Label::PosInf)));
    }

    #[test]
    fn boundary_and_labels() {
        let tree = build(&[5, 3, 8]);
        let style = PolygonStyle::default();
        let map = vertices(&vertex_labels(&tree), &style);
        let mut rec = Recording::new();
        label_vertices(&mut rec, &map, &style);

        let lines: Vec<Line> = rec.lines().collect();
        assert_eq!(lines.len(), 5, "closed outline");
        let tf = style.transform();
        assert!(close(lines[4].p1, tf * map.get(Label::Int(8)).unwrap()));

        let texts: Vec<(Point, &str)> = rec.texts().collect();
        assert_eq!(
            texts.iter().map(|(_, t)| *t).collect::<Vec<_>>(),
            ["8", "5", "3", "-inf", "inf"]
        );
        // Label for 8 at local (50, 50) scaled by 1.1 then translated by (180, 80).
        assert!(close(texts[0].0, Point::new(235.0, 135.0)));
    }

    #[test]
    fn full_draw_counts() {
        let tree = build(&[5, 3, 8, 1, 4]);
        let mut rec = Recording::new();
        draw_triangulation(&mut rec, &tree, &PolygonStyle::default());
        // (n + 2) boundary edges plus (2n + 1) chords.
        assert_eq!(rec.lines().count(), 7 + 11);
        assert_eq!(rec.texts().count(), 7);
        assert_eq!(rec.clear_count(), 1);
    }

    #[test]
    fn rotation_changes_chords_not_vertices() {
        let mut tree = build(&[5, 3, 8, 1, 4]);
        let style = PolygonStyle::default();
        let before = vertices(&vertex_labels(&tree), &style);
        tree.rotate(Direction::Right, 3);
        let after = vertices(&vertex_labels(&tree), &style);
        assert_eq!(before, after, "vertex set depends only on the keys");

        let mut rec = Recording::new();
        triangulate(&mut rec, &tree, &after, &style);
        let tf = style.transform();
        let at = |label| tf * after.get(label).unwrap();
        let lines: Vec<Line> = rec.lines().collect();
        assert!(same_segment(lines[1], at(Label::Int(3)), at(Label::NegInf)));
        assert!(same_segment(lines[2], at(Label::Int(3)), at(Label::PosInf)));
    }

    #[test]
    fn empty_tree_draws_nothing() {
        let tree: Tree<i64> = Tree::new();
        let mut rec = Recording::new();
        draw_triangulation(&mut rec, &tree, &PolygonStyle::default());
        assert!(rec.commands().is_empty(), "blank surface");
        assert_eq!(rec.clear_count(), 1);
        assert!(vertices(&[], &PolygonStyle::default()).is_empty());
    }

    #[test]
    fn chords_layer_can_be_disabled() {
        let tree = build(&[2, 1, 3]);
        let style = PolygonStyle {
            layers: Layers::BOUNDARY,
            ..PolygonStyle::default()
        };
        let mut rec = Recording::new();
        draw_triangulation(&mut rec, &tree, &style);
        assert_eq!(rec.lines().count(), 5, "outline only");
        assert_eq!(rec.texts().count(), 0);
    }

    #[test]
    fn sorted_input_triangulates_a_long_chain() {
        let n = 5_000_usize;
        let mut tree = Tree::with_capacity(n);
        for v in (0..n as i64).rev() {
            tree.insert(v);
        }
        assert_eq!(tree.depth(), n);
        let style = PolygonStyle::default();
        let map = vertices(&vertex_labels(&tree), &style);
        let mut rec = Recording::new();
        triangulate(&mut rec, &tree, &map, &style);
        let lines: Vec<Line> = rec.lines().collect();
        assert_eq!(lines.len(), 2 * n + 1);
        // The deepest node, 0, sits between -inf and its parent 1.
        let tf = style.transform();
        let at = |label| tf * map.get(label).unwrap();
        assert!(same_segment(lines[lines.len() - 2], at(Label::Int(0)), at(Label::NegInf)));
        assert!(same_segment(lines[lines.len() - 1], at(Label::Int(0)), at(Label::Int(1))));
    }
}
