// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared rendering types.

bitflags::bitflags! {
    /// Parts of a diagram to paint.
    ///
    /// The tree renderer honors `NODES`, `EDGES`, and `LABELS`;
    /// the polygon renderer honors `BOUNDARY`, `LABELS`, and `CHORDS`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Layers: u8 {
        /// Node circles.
        const NODES    = 0b0000_0001;
        /// Parent-to-child edges.
        const EDGES    = 0b0000_0010;
        /// Node and vertex labels.
        const LABELS   = 0b0000_0100;
        /// Polygon outline.
        const BOUNDARY = 0b0000_1000;
        /// Triangulation chords, including the sentinel chord.
        const CHORDS   = 0b0001_0000;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}
