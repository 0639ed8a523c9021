//! Slice a sequence by a set of cut positions.
//!
//! Every enumerator funnels through [`spans_at_gaps`]: a *gap* `g` sits
//! between elements `g - 1` and `g`, so the interior gaps of an `n`-element
//! sequence are `1..n`. Gap sets are normalized (ascending, deduplicated,
//! interior only) before use; anything else is dropped rather than rejected.
//!
//! Two cut conventions are exposed on top of the gap form:
//! - [`slice_at`]: split *before* each listed position (gap form as-is).
//! - [`split_after`]: close a group *after* each listed element index.

use crate::types::{Partition, Span};

/// Keep interior gaps `0 < g < n`, sorted ascending, without duplicates.
#[must_use]
pub fn normalize_gaps<I>(n: usize, gaps: I) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut out: Vec<usize> = gaps.into_iter().filter(|&g| g > 0 && g < n).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Spans produced by cutting `0..n` at the given gaps.
///
/// An empty sequence has no spans; otherwise the spans are non-empty,
/// contiguous, and cover `0..n` exactly.
#[must_use]
pub fn spans_at_gaps<I>(n: usize, gaps: I) -> Vec<Span>
where
    I: IntoIterator<Item = usize>,
{
    if n == 0 {
        return Vec::new();
    }
    let gaps = normalize_gaps(n, gaps);
    let mut spans = Vec::with_capacity(gaps.len() + 1);
    let mut start = 0usize;
    for g in gaps {
        spans.push(Span::new(start, g));
        start = g;
    }
    spans.push(Span::new(start, n));
    spans
}

/// Resolve spans into borrowed groups of `seq`.
///
/// Spans must lie within `seq` (as produced by [`spans_at_gaps`]).
#[inline]
#[must_use]
pub fn groups<'a, T>(seq: &'a [T], spans: &[Span]) -> Partition<'a, T> {
    spans.iter().map(|s| &seq[s.range()]).collect()
}

/// Split `seq` before each gap position in `gaps`.
///
/// Out-of-range (`0`, `>= n`) and duplicate positions are ignored.
#[must_use]
pub fn slice_at<T, I>(seq: &[T], gaps: I) -> Partition<'_, T>
where
    I: IntoIterator<Item = usize>,
{
    groups(seq, &spans_at_gaps(seq.len(), gaps))
}

/// Close a group after every element whose index is listed in `indices`.
///
/// Index `i` maps to gap `i + 1`. Indices `>= n` are ignored, and `n - 1`
/// only closes the final group, so no empty trailing group is produced.
/// An empty index set yields the whole sequence as one group.
#[must_use]
pub fn split_after<T, I>(seq: &[T], indices: I) -> Partition<'_, T>
where
    I: IntoIterator<Item = usize>,
{
    let n = seq.len();
    slice_at(seq, indices.into_iter().filter(|&i| i < n).map(|i| i + 1))
}
