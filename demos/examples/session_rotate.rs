// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a session the way an interactive page would.
//!
//! Each line of the script is either a list of keys (start over) or a
//! rotation `<key> <0|1>` prefixed with `r`. Draw calls land on recording
//! surfaces and are summarised after each step.
//!
//! Logging goes through `tracing`; set `RUST_LOG=trigon_session=trace` to
//! also see rotations that had no effect.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p trigon_demos --example session_rotate`

use tracing_subscriber::EnvFilter;
use trigon_render::Recording;
use trigon_session::session::Session;

const SCRIPT: &[&str] = &["5 3 8 1 4", "r 3 1", "r 5 0", "r 42 0", "7 x 2", "   "];

fn summary(session: &Session<Recording, Recording>) {
    let nodes = session.tree_surface();
    let polygon = session.polygon_surface();
    println!(
        "  tree: {} circles, {} edges | polygon: {} labels, {} lines | redraws {}",
        nodes.circles().count(),
        nodes.lines().count(),
        polygon.texts().count(),
        polygon.lines().count(),
        nodes.clear_count(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = Session::new(Recording::new(), Recording::new());
    for line in SCRIPT {
        println!("> {line:?}");
        if let Some(rest) = line.strip_prefix("r ") {
            let mut parts = rest.split_whitespace().map(str::parse::<i64>);
            let (Some(Ok(target)), Some(Ok(flag))) = (parts.next(), parts.next()) else {
                println!("  bad rotation");
                continue;
            };
            let flag = u8::from(flag != 0);
            if session.rotate_flag(target, flag).is_none() {
                println!("  no change");
            }
        } else {
            session.run(line);
        }
        summary(&session);
    }
}
