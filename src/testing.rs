//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical ways of building the same logical content under
//! different representations, which is what most of the test suite wants:
//! the whole external contract is "every representation behaves like the
//! flat array".

#![doc(hidden)]

use crate::bytestr::ByteStr;

/// The content as a plain flat array.
pub fn make_array(bytes: &[u8]) -> ByteStr {
    ByteStr::copy_from(bytes)
}

/// The content as a rope of two halves (an actual rope whenever both halves
/// are non-empty).
pub fn make_rope(bytes: &[u8]) -> ByteStr {
    let mid = bytes.len() / 2;
    ByteStr::rope(vec![
        ByteStr::copy_from(&bytes[..mid]),
        ByteStr::copy_from(&bytes[mid..]),
    ])
}

/// The content as a zero-copy window into a larger padded buffer.
pub fn make_sliced(bytes: &[u8]) -> ByteStr {
    let mut padded = vec![0xAA];
    padded.extend_from_slice(bytes);
    padded.push(0xAA);
    let base = ByteStr::from(padded);
    ByteStr::slice(&base, 1, 1 + bytes.len()).expect("window is in bounds")
}

/// The content via a builder snapshot.
pub fn make_built(bytes: &[u8]) -> ByteStr {
    let mut builder = crate::builder::ByteStrBuilder::new();
    builder.append(bytes);
    builder.to_byte_str()
}

/// The same content under every generic construction path, labeled for
/// assertion messages.
pub fn equivalent_reprs(bytes: &[u8]) -> Vec<(&'static str, ByteStr)> {
    vec![
        ("array", make_array(bytes)),
        ("rope", make_rope(bytes)),
        ("sliced", make_sliced(bytes)),
        ("built", make_built(bytes)),
    ]
}
