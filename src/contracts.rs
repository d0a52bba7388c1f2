//! Debug-mode structural invariant checks.
//!
//! Every check here is a `debug_assert!`: zero-cost in release builds, loud
//! and early in development. They are called from the smart constructors and
//! builder edits, so a violated invariant is caught at the moment a bad value
//! is built rather than when it is later read.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Check                 | Guarantees                                        |
//! |-----------------------|---------------------------------------------------|
//! | `check_rope`          | >= 2 children, none empty, none a rope, offsets   |
//! |                       | cumulative, length = sum of child lengths         |
//! | `check_slice`         | delegate not a slice, window within delegate      |
//! | `check_repeated`      | delegate non-empty, at least 2 repetitions        |
//! | `check_builder`       | logical length within capacity                    |

use crate::bytestr::ByteStr;
use crate::repr::ReprKind;

/// Verify rope construction preconditions and the offset table.
#[inline]
pub(crate) fn check_rope(segments: &[ByteStr], offsets: &[usize], len: usize) {
    debug_assert!(
        segments.len() >= 2,
        "rope with {} children; 0 is Empty, 1 is the child itself",
        segments.len()
    );
    debug_assert_eq!(segments.len(), offsets.len());
    let mut expected_offset = 0;
    for (i, segment) in segments.iter().enumerate() {
        debug_assert!(!segment.is_empty(), "rope child {i} is empty");
        debug_assert!(
            segment.kind() != ReprKind::Rope,
            "rope child {i} is itself a rope"
        );
        debug_assert_eq!(
            offsets[i], expected_offset,
            "offsets[{i}] = {} but children before it total {expected_offset}",
            offsets[i]
        );
        expected_offset += segment.len();
    }
    debug_assert_eq!(len, expected_offset);
}

/// Verify slice construction preconditions.
#[inline]
pub(crate) fn check_slice(delegate: &ByteStr, offset: usize, len: usize) {
    debug_assert!(
        delegate.kind() != ReprKind::Slice,
        "slice delegate is itself a slice"
    );
    debug_assert!(len >= 1, "zero-length slice; use Empty");
    debug_assert!(
        offset < delegate.len(),
        "slice offset {offset} >= delegate length {}",
        delegate.len()
    );
    debug_assert!(
        len <= delegate.len() - offset,
        "slice window {offset}+{len} exceeds delegate length {}",
        delegate.len()
    );
}

/// Verify repeated-sequence construction preconditions.
#[inline]
pub(crate) fn check_repeated(seq: &ByteStr, times: usize) {
    debug_assert!(!seq.is_empty(), "repeating the empty sequence; use Empty");
    debug_assert!(times >= 2, "repeat x{times}; 0 is Empty, 1 is the sequence");
}

/// Verify the builder's length/capacity relationship after an edit.
#[inline]
pub(crate) fn check_builder(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "builder length {len} exceeds capacity {capacity}"
    );
}
