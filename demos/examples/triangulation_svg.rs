// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render both diagrams of one tree to SVG.
//!
//! Writes `tree.svg` (node/edge diagram) and `polygon.svg` (the triangulated
//! `(n + 2)`-gon) into the directory given as the first argument, or the
//! current directory. The keys come from the remaining arguments.
//!
//! Run:
//! - `cargo run -p trigon_demos --example triangulation_svg -- /tmp 5 3 8 1 4`

use std::path::PathBuf;

use kurbo::Size;
use trigon_bst::{Tree, Value};
use trigon_render::{
    PolygonStyle, SvgSurface, TreeStyle, draw_tree, draw_triangulation, vertex_labels, vertices,
};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| ".".into()));
    let keys: Vec<String> = args.collect();
    let keys = if keys.is_empty() {
        vec!["5".into(), "3".into(), "8".into(), "1".into(), "4".into()]
    } else {
        keys
    };

    let mut tree = Tree::new();
    for k in &keys {
        tree.insert(Value::parse(k));
    }

    let style = PolygonStyle::default();
    let order: Vec<String> = vertices(&vertex_labels(&tree), &style)
        .labels()
        .map(|label| label.to_string())
        .collect();
    println!("polygon vertices: {}", order.join(" "));

    let mut nodes = SvgSurface::new(Size::new(300.0, 300.0));
    draw_tree(&mut nodes, &tree, &TreeStyle::default());
    let mut polygon = SvgSurface::new(Size::new(300.0, 250.0));
    draw_triangulation(&mut polygon, &tree, &style);

    let tree_path = dir.join("tree.svg");
    let polygon_path = dir.join("polygon.svg");
    std::fs::write(&tree_path, nodes.finish())?;
    std::fs::write(&polygon_path, polygon.finish())?;
    println!(
        "{} nodes -> {} and {}",
        tree.len(),
        tree_path.display(),
        polygon_path.display()
    );
    Ok(())
}
