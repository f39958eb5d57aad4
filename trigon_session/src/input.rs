// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing the insertion order typed by the user.

use alloc::vec::Vec;

use trigon_bst::Value;

/// Split `input` on whitespace and parse every token.
///
/// Order is preserved. Tokens that are not integers become [`Value::NotANumber`];
/// blank input yields no values.
///
/// ```
/// use trigon_session::input::parse_values;
/// let values = parse_values("  5 3\t8 ");
/// let ints: Vec<_> = values.iter().map(|v| v.as_int()).collect();
/// assert_eq!(ints, [Some(5), Some(3), Some(8)]);
/// ```
pub fn parse_values(input: &str) -> Vec<Value> {
    input.split_whitespace().map(Value::parse).collect()
}
