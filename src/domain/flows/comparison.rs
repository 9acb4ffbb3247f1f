//! Shared result wrapper for the price comparison verticals.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::FlowKind;

/// Ordered list of generated offers, `{"results": [...]}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResults<T> {
    pub results: Vec<T>,
}

impl<T> ComparisonResults<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

/// Accepted number of results for a comparison flow.
///
/// Route searches must come back with 5 to 10 options. A hotel search by
/// name legitimately yields a single hotel, so accommodations accept 1.
pub fn result_count_bounds(kind: FlowKind) -> RangeInclusive<usize> {
    match kind {
        FlowKind::Accommodations => 1..=10,
        _ => 5..=10,
    }
}
