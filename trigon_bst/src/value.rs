// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys parsed from user input.

use core::cmp::Ordering;
use core::fmt;

/// A tree key parsed from a text token.
///
/// Tokens that are not integers are kept as [`Value::NotANumber`] rather than rejected.
/// `NotANumber` behaves like a floating-point NaN:
/// it is not equal to anything (itself included) and is neither smaller nor larger than anything.
/// Inserted into a [`Tree`](crate::Tree) it always descends right, and [`Tree::find`](crate::Tree::find)
/// never matches it.
#[derive(Copy, Clone, Debug)]
pub enum Value {
    /// An integer key.
    Int(i64),
    /// A token that did not parse as an integer.
    NotANumber,
}

impl Value {
    /// Parse a single token.
    ///
    /// Surrounding whitespace is ignored; anything that is not a base-10 `i64` yields `NotANumber`.
    ///
    /// ```
    /// use trigon_bst::Value;
    /// assert_eq!(Value::parse("42").as_int(), Some(42));
    /// assert_eq!(Value::parse("-7").as_int(), Some(-7));
    /// assert!(Value::parse("4x").is_nan());
    /// ```
    pub fn parse(token: &str) -> Self {
        token.trim().parse().map_or(Self::NotANumber, Self::Int)
    }

    /// The integer, if any.
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::NotANumber => None,
        }
    }

    /// True for [`Value::NotANumber`].
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}
