//! Closed-form lengths of each enumeration stream.
//!
//! All helpers are checked: `None` means the computation overflowed `u128`.

/// Binomial coefficient `C(n, k)`; `0` when `k > n`.
#[must_use]
pub fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

/// Partitions of an `n`-element sequence with exactly `k` cuts: `C(n-1, k)`.
///
/// An empty sequence admits only the empty partition, at `k == 0`.
#[must_use]
pub fn cut_count(n: usize, k: usize) -> Option<u128> {
    match n.checked_sub(1) {
        Some(gaps) => binomial(gaps as u128, k as u128),
        None => Some(u128::from(k == 0)),
    }
}

/// Partitions with `0..=max_cuts` cuts (clamped to `n - 1`).
#[must_use]
pub fn cumulative_cut_count(n: usize, max_cuts: usize) -> Option<u128> {
    let Some(gaps) = n.checked_sub(1) else {
        return Some(0);
    };
    (0..=max_cuts.min(gaps)).try_fold(0u128, |acc, k| acc.checked_add(cut_count(n, k)?))
}

/// Contiguous sub-ranges of `0..n`: `n(n+1)/2`.
#[must_use]
pub fn subrange_count(n: usize) -> Option<u128> {
    let n = n as u128;
    n.checked_mul(n + 1).map(|x| x / 2)
}

/// Windows of exactly `width` elements that tile `n` elements: `⌊n / width⌋`.
#[must_use]
pub const fn tiling_window_count(n: usize, width: usize) -> usize {
    if width == 0 {
        0
    } else {
        n / width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_binomials() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(52, 5), Some(2_598_960));
    }

    #[test]
    fn binomial_overflow_is_none() {
        assert_eq!(binomial(999, 500), None);
        assert_eq!(binomial(100, 50), Some(100_891_344_545_564_193_334_812_497_256));
    }

    #[test]
    fn cut_counts_small_table() {
        assert_eq!(cut_count(4, 0), Some(1));
        assert_eq!(cut_count(4, 1), Some(3));
        assert_eq!(cut_count(4, 3), Some(1));
        assert_eq!(cut_count(4, 4), Some(0));
        assert_eq!(cut_count(1, 0), Some(1));
        assert_eq!(cut_count(1, 1), Some(0));
        assert_eq!(cut_count(0, 0), Some(1));
        assert_eq!(cut_count(0, 2), Some(0));
    }

    #[test]
    fn cumulative_counts() {
        // 2^(n-1) when every cut count is allowed.
        assert_eq!(cumulative_cut_count(5, 10), Some(16));
        assert_eq!(cumulative_cut_count(5, 1), Some(1 + 4));
        assert_eq!(cumulative_cut_count(0, 3), Some(0));
    }

    #[test]
    fn subrange_and_tiling_counts() {
        assert_eq!(subrange_count(0), Some(0));
        assert_eq!(subrange_count(4), Some(10));
        assert_eq!(tiling_window_count(4, 3), 1);
        assert_eq!(tiling_window_count(10, 3), 3);
        assert_eq!(tiling_window_count(3, 0), 0);
    }
}
