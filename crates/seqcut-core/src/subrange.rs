//! Sub-range re-cutting.
//!
//! Walk every contiguous sub-range of the index domain `0..n` (by length,
//! then by start) and re-partition the *whole* sequence, closing a group
//! after each index the sub-range contains.

use tracing::debug;

use crate::slice::split_after;
use crate::types::{Partition, Span};

/// Lazy iterator over every contiguous non-empty [`Span`] of `0..n`.
///
/// Order: length `1..=n` ascending, and for each length the start index
/// `0..=n - len` ascending. Yields `n(n+1)/2` spans.
#[derive(Clone, Debug)]
pub struct SubRanges {
    n: usize,
    len: usize,
    start: usize,
}

impl SubRanges {
    /// Create the iterator for an index domain of size `n`.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n, len: 1, start: 0 }
    }

    fn remaining(&self) -> u128 {
        if self.len > self.n {
            return 0;
        }
        // Rest of the current length, then every longer length.
        let here = (self.n - self.len + 1 - self.start) as u128;
        let longer = (self.n - self.len) as u128;
        here + longer * (longer + 1) / 2
    }
}

impl Iterator for SubRanges {
    type Item = Span;

    #[inline]
    fn next(&mut self) -> Option<Span> {
        if self.len > self.n {
            return None;
        }
        let span = Span::new(self.start, self.start + self.len);
        if self.start + self.len == self.n {
            self.len += 1;
            self.start = 0;
        } else {
            self.start += 1;
        }
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        usize::try_from(self.remaining()).map_or((usize::MAX, None), |r| (r, Some(r)))
    }
}

impl std::iter::FusedIterator for SubRanges {}

/// Iterator over the re-cut partitions, one per sub-range.
///
/// Created by [`enumerate_subrange_recuts`].
#[derive(Clone, Debug)]
pub struct SubrangeRecuts<'a, T> {
    seq: &'a [T],
    ranges: SubRanges,
}

impl<'a, T> Iterator for SubrangeRecuts<'a, T> {
    type Item = Partition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ranges.next().map(|span| split_after(self.seq, span.range()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<T> std::iter::FusedIterator for SubrangeRecuts<'_, T> {}

/// Re-partition `seq` once for every contiguous sub-range of its indices.
///
/// Each sub-range is read as a set of "close group after this index"
/// positions applied to the full sequence. Yields `n(n+1)/2` partitions; the
/// empty sequence yields none.
///
/// ```
/// use seqcut_core::enumerate_subrange_recuts;
///
/// let seq = ["J", "O", "H", "N"];
/// let first = enumerate_subrange_recuts(&seq).next().unwrap();
/// assert_eq!(first, vec![&["J"][..], &["O", "H", "N"][..]]);
/// ```
#[must_use]
pub fn enumerate_subrange_recuts<T>(seq: &[T]) -> SubrangeRecuts<'_, T> {
    debug!(n = seq.len(), "enumerate_subrange_recuts");
    SubrangeRecuts {
        seq,
        ranges: SubRanges::new(seq.len()),
    }
}
