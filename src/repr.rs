//! The closed set of internal representations.
//!
//! A [`ByteStr`](crate::ByteStr) is one logical sequence of bytes; `Repr` is
//! how it is actually stored. The factory operations pick the cheapest
//! correct variant, and everything downstream dispatches on it. Two
//! invariants keep indexing depth bounded and are enforced by the only
//! constructors that exist (see `ByteStr::rope_from_vec` and
//! `ByteStr::slice_inner`):
//!
//! - a `Slice`'s delegate is never itself a `Slice`;
//! - a `Rope`'s children are never `Rope`s and never empty.
//!
//! Shared state lives behind `Arc`, so cloning any variant is O(1) and a
//! slice or rope keeps its delegates alive exactly as long as it is
//! reachable. Nothing here is interiorly mutable, which is what makes the
//! whole immutable side of the crate freely shareable across threads.

use std::sync::Arc;

use crate::bytestr::ByteStr;
use crate::rope::Rope;

/// Internal representation of a byte string.
///
/// Only `len` and `byte_at` are primitive; every other operation is defined
/// generically over them, with per-variant overrides where an exact cheaper
/// algorithm exists.
#[derive(Clone)]
pub(crate) enum Repr {
    /// The empty sequence. Canonical: every zero-length result is this.
    Empty,
    /// Exactly one byte, stored inline.
    Single(u8),
    /// One byte value repeated `len` times; O(1) space for any length.
    Constant { value: u8, len: usize },
    /// Consecutive values `lower..upper`, reinterpreted as raw bytes.
    /// `lower < upper`, and the pair fits the signed domain `[-128, 128]`
    /// or the unsigned domain `[0, 256]`.
    Range { lower: i32, upper: i32 },
    /// A flat buffer, created only by copying caller bytes. The `Arc` is
    /// never handed out, so no one else can observe or alias it.
    Array(Arc<[u8]>),
    /// A delegate repeated `times` times. Delegate is non-empty, `times >= 2`
    /// (0 becomes `Empty`, 1 becomes the delegate itself).
    Repeated { seq: Arc<ByteStr>, times: usize },
    /// A zero-copy window into a delegate. Delegate is never a `Slice`,
    /// `len >= 1`, and `offset + len <= delegate.len()`.
    Slice {
        delegate: Arc<ByteStr>,
        offset: usize,
        len: usize,
    },
    /// An ordered list of non-empty, non-rope children with a cumulative
    /// offset table; at least two children.
    Rope(Arc<Rope>),
}

/// Which representation a sequence currently uses.
///
/// Exposed for internals-aware tests (space and sharing properties cannot be
/// observed through the value contract alone). Not part of the stable API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReprKind {
    Empty,
    Single,
    Constant,
    Range,
    Array,
    Repeated,
    Slice,
    Rope,
}

impl Repr {
    pub(crate) fn len(&self) -> usize {
        match self {
            Repr::Empty => 0,
            Repr::Single(_) => 1,
            Repr::Constant { len, .. } => *len,
            Repr::Range { lower, upper } => (upper - lower) as usize,
            Repr::Array(bytes) => bytes.len(),
            Repr::Repeated { seq, times } => seq.len() * times,
            Repr::Slice { len, .. } => *len,
            Repr::Rope(rope) => rope.len(),
        }
    }

    /// Primitive indexed read. Callers have already bounds-checked `index`.
    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        debug_assert!(index < self.len(), "byte_at({index}) on length {}", self.len());
        match self {
            Repr::Empty => unreachable!("empty sequence has no bytes"),
            Repr::Single(value) => *value,
            Repr::Constant { value, .. } => *value,
            Repr::Range { lower, .. } => (lower + index as i32) as u8,
            Repr::Array(bytes) => bytes[index],
            Repr::Repeated { seq, .. } => seq.repr.byte_at(index % seq.len()),
            Repr::Slice {
                delegate, offset, ..
            } => delegate.repr.byte_at(offset + index),
            Repr::Rope(rope) => rope.byte_at(index),
        }
    }

    /// Copy `self[start..start + dest.len()]` into `dest`.
    ///
    /// The workhorse behind `to_vec`, the `copy_to` family, and builder
    /// appends. Callers guarantee the window is in bounds.
    pub(crate) fn copy_range_into(&self, start: usize, dest: &mut [u8]) {
        debug_assert!(start + dest.len() <= self.len());
        if dest.is_empty() {
            return;
        }
        match self {
            Repr::Empty => unreachable!("empty sequence has no bytes"),
            Repr::Single(value) => dest[0] = *value,
            Repr::Constant { value, .. } => dest.fill(*value),
            Repr::Range { lower, .. } => {
                for (i, slot) in dest.iter_mut().enumerate() {
                    *slot = (lower + (start + i) as i32) as u8;
                }
            }
            Repr::Array(bytes) => dest.copy_from_slice(&bytes[start..start + dest.len()]),
            Repr::Repeated { seq, .. } => {
                let period = seq.len();
                let mut pos = start;
                let mut written = 0;
                while written < dest.len() {
                    let local = pos % period;
                    let take = (period - local).min(dest.len() - written);
                    seq.repr
                        .copy_range_into(local, &mut dest[written..written + take]);
                    written += take;
                    pos += take;
                }
            }
            Repr::Slice {
                delegate, offset, ..
            } => delegate.repr.copy_range_into(offset + start, dest),
            Repr::Rope(rope) => rope.copy_range_into(start, dest),
        }
    }

    pub(crate) fn kind(&self) -> ReprKind {
        match self {
            Repr::Empty => ReprKind::Empty,
            Repr::Single(_) => ReprKind::Single,
            Repr::Constant { .. } => ReprKind::Constant,
            Repr::Range { .. } => ReprKind::Range,
            Repr::Array(_) => ReprKind::Array,
            Repr::Repeated { .. } => ReprKind::Repeated,
            Repr::Slice { .. } => ReprKind::Slice,
            Repr::Rope(_) => ReprKind::Rope,
        }
    }
}
