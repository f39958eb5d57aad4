// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon vertex labels.

use core::fmt;

use trigon_bst::Value;

/// Label of a polygon vertex: a tree key or one of the two sentinels.
///
/// Labels are identities, so unlike [`Value`] two `NotANumber` labels are equal
/// and name the same vertex.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Label {
    /// Sentinel below every key.
    NegInf,
    /// An integer key.
    Int(i64),
    /// A key that did not parse as an integer.
    NotANumber,
    /// Sentinel above every key.
    PosInf,
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Value> for Label {
    fn from(v: Value) -> Self {
        match v {
            Value::Int(v) => Self::Int(v),
            Value::NotANumber => Self::NotANumber,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInf => f.write_str("-inf"),
            Self::Int(v) => write!(f, "{v}"),
            Self::NotANumber => f.write_str("NaN"),
            Self::PosInf => f.write_str("inf"),
        }
    }
}
