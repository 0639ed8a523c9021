//! seqcut-core — lazy enumeration of order-preserving contiguous partitions.
//!
//! Given a sequence, the crate enumerates the ways to break it into
//! contiguous blocks under four policies:
//!
//! - [`enumerate_cuts`]: exactly `k` cuts among the `n - 1` interior gaps,
//!   in lexicographic order of the cut positions (`C(n-1, k)` partitions).
//! - [`enumerate_cuts_upto`]: every cut count from `0` to `max_cuts`.
//! - [`enumerate_subrange_recuts`]: each contiguous sub-range of the index
//!   domain re-read as "close a group after these indices" (`n(n+1)/2`).
//! - [`enumerate_tilings`]: fixed-width non-overlapping windows for each width.
//!
//! All enumerators borrow the input and return iterators; groups are
//! `&[T]` views, nothing is computed until pulled, and dropping the iterator
//! early abandons the remaining work.
//!
//! ```
//! use seqcut_core::prelude::*;
//!
//! let seq = ["J", "O", "H", "N"];
//! assert_eq!(enumerate_cuts(&seq, 2).count(), 3);
//! assert_eq!(enumerate_cuts_upto(&seq, 9).count(), 8);
//! assert_eq!(enumerate_subrange_recuts(&seq).count(), 10);
//! assert_eq!(enumerate_tilings(&seq).map(|t| t.windows.len()).sum::<usize>(), 4 + 2 + 1 + 1);
//! ```
//!
//! Parameters are clamped rather than rejected: a cut count with no valid
//! placement yields an empty stream, and explicit cut positions that are
//! out of range or duplicated are dropped (see [`slice`]).

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::cast_possible_truncation
)]

/// Lexicographic k-combination cursor over gap positions.
pub mod combinations;
/// Closed-form stream lengths.
pub mod count;
/// Exactly-`k` and cumulative cut enumeration.
pub mod cuts;
/// Sequence readers (JSON / text) and output file helpers.
pub mod io;
/// Streaming JSONL helpers.
pub mod io_jsonl;
/// The shared "slice by cut positions" primitive.
pub mod slice;
/// Sub-range enumeration and re-cutting.
pub mod subrange;
/// Fixed-width tiling.
pub mod tiling;
/// Span, group, partition and tiling types.
pub mod types;

pub use cuts::{enumerate_cuts, enumerate_cuts_upto, Cuts, CutsUpTo};
pub use subrange::{enumerate_subrange_recuts, SubRanges, SubrangeRecuts};
pub use tiling::{enumerate_tilings, Tilings};
pub use types::*;

/// Commonly-used items for quick imports.
///
/// ```rust
/// use seqcut_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        cuts::{enumerate_cuts, enumerate_cuts_upto},
        subrange::enumerate_subrange_recuts,
        tiling::enumerate_tilings,
        types::*,
    };
}
