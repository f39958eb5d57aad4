// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insert and rotate nodes, then inspect the tree.
//!
//! This example builds a small BST, prints its shape, then rotates a few
//! nodes to show which node each request actually lifts. Rotating the root
//! (or a node already on the requested side) lifts its child instead.
//!
//! Run:
//! - `cargo run -p trigon_demos --example bst_basics`

use trigon_bst::{Direction, Link, Tree};

fn print_shape(tree: &Tree<i64>) {
    for Link { value, left, right } in tree.links() {
        let show = |c: Option<i64>| c.map_or_else(|| "-".to_string(), |v| v.to_string());
        println!("  {value}: left {} right {}", show(left), show(right));
    }
}

fn main() {
    let mut tree = Tree::new();
    for v in [50_i64, 30, 70, 20, 40, 60, 80] {
        tree.insert(v);
    }
    println!("built {} nodes, depth {}", tree.len(), tree.depth());
    print_shape(&tree);

    for (target, direction) in [
        (30, Direction::Right),
        (50, Direction::Left),
        (20, Direction::Left),
        (99, Direction::Right),
    ] {
        match tree.rotate(direction, target) {
            Some(id) => println!("\nrotate {direction:?} at {target}: lifted {}", tree[id].value()),
            None => println!("\nrotate {direction:?} at {target}: no change"),
        }
        print_shape(&tree);
    }

    let in_order = tree.in_order();
    println!("\nin order: {in_order:?}");
    assert!(tree.is_search_ordered(), "rotations keep the search order");
}
