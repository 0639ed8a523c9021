//! Cut-position enumeration: every partition with exactly `k` cuts, and the
//! cumulative stream over `0..=max_cuts` cuts.
//!
//! Both iterators are lazy. Each item is sliced from the live combination
//! on demand, so stopping early costs nothing for the unconsumed tail.

use tracing::debug;

use crate::combinations::GapCombinations;
use crate::slice::slice_at;
use crate::types::Partition;

/// Iterator over all partitions of a sequence with exactly `k` cuts.
///
/// Created by [`enumerate_cuts`].
#[derive(Clone, Debug)]
pub struct Cuts<'a, T> {
    seq: &'a [T],
    combos: GapCombinations,
}

impl<'a, T> Iterator for Cuts<'a, T> {
    type Item = Partition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.combos.next().map(|gaps| slice_at(self.seq, gaps))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.combos.size_hint()
    }
}

impl<T> std::iter::FusedIterator for Cuts<'_, T> {}

/// Enumerate every way to place `k` distinct cuts in the `n - 1` interior
/// gaps of `seq`, in ascending lexicographic order of the cut tuple.
///
/// Each partition has `k + 1` non-empty groups; there are `C(n - 1, k)` of
/// them. `k >= n` yields nothing. The empty sequence yields a single empty
/// partition for `k == 0`.
///
/// ```
/// use seqcut_core::enumerate_cuts;
///
/// let seq = [1, 2, 3];
/// let all: Vec<_> = enumerate_cuts(&seq, 1).collect();
/// assert_eq!(all, vec![vec![&seq[..1], &seq[1..]], vec![&seq[..2], &seq[2..]]]);
/// ```
#[must_use]
pub fn enumerate_cuts<T>(seq: &[T], k: usize) -> Cuts<'_, T> {
    let gaps = seq.len().saturating_sub(1);
    debug!(n = seq.len(), k, "enumerate_cuts");
    Cuts {
        seq,
        combos: GapCombinations::new(gaps, k),
    }
}

/// Iterator over partitions with `0, 1, …, max` cuts, in ascending cut count.
///
/// Created by [`enumerate_cuts_upto`].
#[derive(Clone, Debug)]
pub struct CutsUpTo<'a, T> {
    seq: &'a [T],
    next_k: usize,
    max_k: Option<usize>,
    current: Option<Cuts<'a, T>>,
}

impl<'a, T> Iterator for CutsUpTo<'a, T> {
    type Item = Partition<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.as_mut().and_then(Iterator::next) {
                return Some(p);
            }
            let max_k = self.max_k?;
            if self.next_k > max_k {
                self.current = None;
                return None;
            }
            self.current = Some(enumerate_cuts(self.seq, self.next_k));
            self.next_k += 1;
        }
    }
}

impl<T> std::iter::FusedIterator for CutsUpTo<'_, T> {}

/// Enumerate all partitions with between `0` and `max_cuts` cuts.
///
/// `max_cuts` is clamped to `n - 1`; the stream equals chaining
/// [`enumerate_cuts`] for each `k` in `0..=min(max_cuts, n - 1)`. The empty
/// sequence has no valid cut count in that range and yields nothing.
#[must_use]
pub fn enumerate_cuts_upto<T>(seq: &[T], max_cuts: usize) -> CutsUpTo<'_, T> {
    let max_k = seq.len().checked_sub(1).map(|gaps| max_cuts.min(gaps));
    if max_k != Some(max_cuts) {
        debug!(n = seq.len(), max_cuts, ?max_k, "clamped max_cuts");
    }
    CutsUpTo {
        seq,
        next_k: 0,
        max_k,
        current: None,
    }
}
