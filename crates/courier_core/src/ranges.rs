//! Sparse sets of byte ranges within a resource.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Upper bound of the default "whole resource" range.
const FULL_RANGE_END: i64 = i32::MAX as i64;

/// A sorted set of disjoint, half-open byte ranges.
///
/// Overlapping and adjacent ranges are merged on insertion, so iteration
/// always yields the minimal covering list in ascending order. The default
/// set spans the whole resource.
///
/// # Examples
///
/// ```
/// use courier_core::ByteRangeSet;
///
/// let mut ranges = ByteRangeSet::empty();
/// ranges.insert(100..200);
/// ranges.insert(0..50);
/// ranges.insert(50..120);
///
/// assert_eq!(ranges.ranges(), &[0..200]);
/// assert!(ranges.contains(150));
/// assert!(!ranges.contains(200));
/// assert_eq!(ByteRangeSet::default(), ByteRangeSet::full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRangeSet {
    ranges: Vec<Range<i64>>,
}

impl ByteRangeSet {
    /// A set selecting nothing.
    pub fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// A set spanning the entire resource.
    pub fn full() -> Self {
        Self {
            ranges: vec![0..FULL_RANGE_END],
        }
    }

    /// A set holding a single range.
    pub fn from_range(range: Range<i64>) -> Self {
        let mut set = Self::empty();
        set.insert(range);
        set
    }

    /// Adds a range, merging it with any range it overlaps or touches.
    ///
    /// Empty and negative-start ranges are clamped or ignored.
    pub fn insert(&mut self, range: Range<i64>) {
        let start = range.start.max(0);
        let end = range.end;
        if start >= end {
            return;
        }

        // First range whose end reaches the new start, and first range
        // starting strictly past the new end.
        let lo = self.ranges.partition_point(|r| r.end < start);
        let hi = self.ranges.partition_point(|r| r.start <= end);

        let merged = if lo < hi {
            self.ranges[lo].start.min(start)..self.ranges[hi - 1].end.max(end)
        } else {
            start..end
        };
        self.ranges.splice(lo..hi, std::iter::once(merged));
    }

    /// Whether `offset` falls inside one of the ranges.
    pub fn contains(&self, offset: i64) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start <= offset && offset < r.end)
    }

    /// Whether `range` is entirely covered by a single stored range.
    pub fn contains_range(&self, range: &Range<i64>) -> bool {
        if range.start >= range.end {
            return true;
        }
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start <= range.start && range.end <= r.end)
    }

    /// Total number of bytes selected.
    pub fn total_len(&self) -> i64 {
        self.ranges.iter().map(|r| r.end - r.start).sum()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the set spans the default whole-resource range.
    pub fn is_full(&self) -> bool {
        self.contains_range(&(0..FULL_RANGE_END))
    }

    /// The stored ranges in ascending order.
    pub fn ranges(&self) -> &[Range<i64>] {
        &self.ranges
    }

    /// Iterates over the stored ranges in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Range<i64>> {
        self.ranges.iter()
    }
}

impl Default for ByteRangeSet {
    fn default() -> Self {
        Self::full()
    }
}

impl From<Range<i64>> for ByteRangeSet {
    fn from(range: Range<i64>) -> Self {
        Self::from_range(range)
    }
}

impl FromIterator<Range<i64>> for ByteRangeSet {
    fn from_iter<I: IntoIterator<Item = Range<i64>>>(iter: I) -> Self {
        let mut set = Self::empty();
        for range in iter {
            set.insert(range);
        }
        set
    }
}

impl std::fmt::Display for ByteRangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .ranges
            .iter()
            .map(|r| format!("{}..{}", r.start, r.end))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
