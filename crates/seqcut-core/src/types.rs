//! Canonical core types shared by every enumerator.
//!
//! These are re-exported at the crate root so callers can import via
//! `seqcut_core::Span`, `seqcut_core::Partition`, etc.
//!
//! Groups are borrowed slices of the caller's sequence: enumeration never
//! copies elements, and a group cannot be used to mutate the source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// One contiguous output sub-sequence (an immutable view into the input).
pub type Group<'a, T> = &'a [T];

/// Ordered list of groups covering the input in strictly increasing ranges.
pub type Partition<'a, T> = Vec<Group<'a, T>>;

/// Half-open index range `[start, end)` over a sequence.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive lower bound.
    pub start: usize,
    /// Exclusive upper bound.
    pub end: usize,
}

impl Span {
    /// Create a span `[start, end)` (no validation).
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered (0 if inverted).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no index.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span as a `Range`, for slicing.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `idx` lies within `[start, end)`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, idx: usize) -> bool {
        idx >= self.start && idx < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

/// All non-overlapping windows of one fixed width, in ascending start order.
///
/// A trailing run shorter than `width` is not represented.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Tiling<'a, T> {
    /// Window width (≥ 1).
    pub width: usize,
    /// `⌊n / width⌋` windows of exactly `width` elements.
    pub windows: Vec<Group<'a, T>>,
}

impl<T> Tiling<'_, T> {
    /// Number of elements covered by the windows (excludes the dropped tail).
    #[must_use]
    pub fn covered(&self) -> usize {
        self.width * self.windows.len()
    }
}

/// Concatenate the groups of a partition back into an owned sequence.
#[must_use]
pub fn concat<T: Clone>(groups: &[&[T]]) -> Vec<T> {
    groups.iter().flat_map(|g| g.iter().cloned()).collect()
}
