// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigon Session: the glue between user input and the two diagrams.
//!
//! ## Overview
//!
//! A [`Session`](crate::session::Session) owns the current tree and the two surfaces it is drawn on.
//! There is no global state: the host (a web page, a GUI, a CLI) creates a session and calls into it
//! on every user action.
//!
//! - [`Session::run`](crate::session::Session::run) builds a fresh tree from whitespace-separated integers
//!   (see [`parse_values`](crate::input::parse_values)) and redraws both surfaces.
//! - [`Session::rotate`](crate::session::Session::rotate) rotates one node up and redraws.
//!
//! Nothing here fails loudly. Tokens that are not integers become not-a-number keys, blank input
//! clears both surfaces, and rotating a key that is not in the tree leaves everything as it was. These cases are
//! reported through `tracing` at `debug`/`trace` level only.
//!
//! ## Example
//!
//! ```
//! use trigon_bst::Direction;
//! use trigon_render::Recording;
//! use trigon_session::session::Session;
//!
//! let mut session = Session::new(Recording::new(), Recording::new());
//! session.run("5 3 8 1 4");
//! assert_eq!(session.tree().in_order().len(), 5);
//!
//! // Lift 3 above 5; both diagrams are redrawn.
//! assert!(session.rotate(3, Direction::Right).is_some());
//! assert_eq!(session.tree_surface().clear_count(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod input;
pub mod session;
