//! Lazy lexicographic k-combinations of gap positions `{1, …, m}`.
//!
//! The cursor holds one live combination (O(k) memory) and advances it in
//! place; nothing is materialized ahead of the caller.

use crate::count::binomial;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Current `picks` not yet emitted.
    Fresh,
    /// Current `picks` emitted; advance before the next emit.
    Emitted,
    /// Exhausted.
    Done,
}

/// Cursor over every k-subset of `{1, …, m}` in ascending lexicographic order.
///
/// `k == 0` yields a single empty combination; `k > m` yields nothing.
#[derive(Clone, Debug)]
pub struct GapCombinations {
    m: usize,
    picks: Vec<usize>,
    state: State,
    remaining: Option<u128>,
}

impl GapCombinations {
    /// Create a cursor choosing `k` gaps out of `1..=m`.
    #[must_use]
    pub fn new(m: usize, k: usize) -> Self {
        if k > m {
            return Self {
                m,
                picks: Vec::new(),
                state: State::Done,
                remaining: Some(0),
            };
        }
        Self {
            m,
            picks: (1..=k).collect(),
            state: State::Fresh,
            remaining: binomial(m as u128, k as u128),
        }
    }

    /// Number of gaps chosen per combination.
    #[inline]
    #[must_use]
    pub fn k(&self) -> usize {
        self.picks.len()
    }

    /// Advance `picks` to its lexicographic successor; `false` when exhausted.
    fn advance(&mut self) -> bool {
        let k = self.picks.len();
        // Slot `i` may rise to `m - k + i + 1` (1-based values).
        let Some(i) = (0..k).rev().find(|&i| self.picks[i] < self.m - k + i + 1) else {
            return false;
        };
        self.picks[i] += 1;
        for j in i + 1..k {
            self.picks[j] = self.picks[j - 1] + 1;
        }
        true
    }
}

impl Iterator for GapCombinations {
    type Item = Vec<usize>;

    #[inline]
    fn next(&mut self) -> Option<Vec<usize>> {
        match self.state {
            State::Done => return None,
            State::Fresh => {}
            State::Emitted => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        self.state = State::Emitted;
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(self.picks.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(r)) => (r, Some(r)),
            _ => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for GapCombinations {}
