//! Rope internals: the cumulative-offset table and the algorithms that make
//! a list of segments behave as one flat sequence.
//!
//! A rope stores its children in order plus `offsets[i]` = total length of
//! children before child `i`. Locating the child owning a global index is a
//! binary search for the greatest offset `<= index`, so reads cost
//! O(log segments) and never recurse (children are never ropes themselves).

use crate::bytestr::ByteStr;
use crate::contracts;

/// Ordered, non-empty segments with their cumulative offsets.
///
/// Constructed only through [`Rope::new`], which is itself reached only via
/// `ByteStr::rope_from_vec` — by then the segment list is already flattened
/// (no rope children) and stripped of empties, and has at least two entries.
pub(crate) struct Rope {
    segments: Box<[ByteStr]>,
    offsets: Box<[usize]>,
    len: usize,
}

impl Rope {
    pub(crate) fn new(segments: Vec<ByteStr>) -> Rope {
        let mut offsets = Vec::with_capacity(segments.len());
        let mut len = 0;
        for segment in &segments {
            offsets.push(len);
            len += segment.len();
        }
        let rope = Rope {
            segments: segments.into_boxed_slice(),
            offsets: offsets.into_boxed_slice(),
            len,
        };
        contracts::check_rope(&rope.segments, &rope.offsets, rope.len);
        rope
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn segments(&self) -> &[ByteStr] {
        &self.segments
    }

    /// Index of the child holding global index `index`: the greatest
    /// `offsets[i] <= index`.
    fn segment_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        // offsets[0] == 0, so the partition point is always >= 1.
        self.offsets.partition_point(|&offset| offset <= index) - 1
    }

    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        let child = self.segment_at(index);
        self.segments[child].repr.byte_at(index - self.offsets[child])
    }

    /// Copy `self[start..start + dest.len()]` into `dest`, walking children
    /// from the one holding `start`.
    pub(crate) fn copy_range_into(&self, start: usize, dest: &mut [u8]) {
        if dest.is_empty() {
            return;
        }
        let mut child = self.segment_at(start);
        let mut local = start - self.offsets[child];
        let mut written = 0;
        while written < dest.len() {
            let segment = &self.segments[child];
            let take = (segment.len() - local).min(dest.len() - written);
            segment
                .repr
                .copy_range_into(local, &mut dest[written..written + take]);
            written += take;
            child += 1;
            local = 0;
        }
    }

    /// Substring with `begin < end` (the empty case is handled by the
    /// caller). A span inside one child delegates to that child; a span
    /// crossing children builds a new rope that reuses the interior children
    /// unchanged and substrings only the two boundary children.
    pub(crate) fn substring(&self, begin: usize, end: usize) -> ByteStr {
        debug_assert!(begin < end && end <= self.len);
        let first = self.segment_at(begin);
        let last = self.segment_at(end - 1);
        if first == last {
            let offset = self.offsets[first];
            return self.segments[first].substring_inner(begin - offset, end - offset);
        }
        let mut children = Vec::with_capacity(last - first + 1);
        let head = &self.segments[first];
        children.push(head.substring_inner(begin - self.offsets[first], head.len()));
        children.extend(self.segments[first + 1..last].iter().cloned());
        children.push(self.segments[last].substring_inner(0, end - self.offsets[last]));
        ByteStr::rope_from_vec(children)
    }

    /// First occurrence of `value` at or after `from` (`from < len`).
    ///
    /// Resumes from the child containing `from` and probes every child from
    /// there forward, translating a local hit back by that child's offset.
    pub(crate) fn find_value(&self, value: u8, from: usize) -> Option<usize> {
        let start = self.segment_at(from);
        for child in start..self.segments.len() {
            let local_from = from.saturating_sub(self.offsets[child]);
            if let Some(local) = self.segments[child].find_value(value, local_from) {
                return Some(self.offsets[child] + local);
            }
        }
        None
    }
}
