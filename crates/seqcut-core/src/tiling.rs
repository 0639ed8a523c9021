//! Fixed-width tiling: for every width `1..=n`, the non-overlapping windows
//! starting at `0, w, 2w, …`. A tail shorter than `w` is dropped, so unlike
//! the cut enumerators a tiling need not cover the whole sequence.

use tracing::debug;

use crate::types::Tiling;

/// Iterator over one [`Tiling`] per width, widths ascending.
///
/// Created by [`enumerate_tilings`].
#[derive(Clone, Debug)]
pub struct Tilings<'a, T> {
    seq: &'a [T],
    width: usize,
}

impl<'a, T> Iterator for Tilings<'a, T> {
    type Item = Tiling<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width > self.seq.len() {
            return None;
        }
        let width = self.width;
        self.width += 1;
        Some(Tiling {
            width,
            windows: self.seq.chunks_exact(width).collect(),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.seq.len() + 1).saturating_sub(self.width);
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Tilings<'_, T> {}
impl<T> std::iter::FusedIterator for Tilings<'_, T> {}

/// Tile `seq` at every width from `1` to `n`.
///
/// Width `k` has `⌊n / k⌋` windows; the empty sequence yields nothing.
///
/// ```
/// use seqcut_core::enumerate_tilings;
///
/// let seq = ["J", "O", "H", "N"];
/// let t3 = enumerate_tilings(&seq).nth(2).unwrap();
/// assert_eq!(t3.width, 3);
/// assert_eq!(t3.windows, vec![&["J", "O", "H"][..]]);
/// ```
#[must_use]
pub fn enumerate_tilings<T>(seq: &[T]) -> Tilings<'_, T> {
    debug!(n = seq.len(), "enumerate_tilings");
    Tilings { seq, width: 1 }
}
