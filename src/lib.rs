//! Immutable byte strings with automatic representation selection.
//!
//! A [`ByteStr`] is one logical sequence of bytes behind several internal
//! representations, picked by the factory operations so callers never pay
//! for storage they do not need: a million-byte fill is O(1) space, a large
//! concatenation shares both operands instead of copying, a large substring
//! is a window rather than a clone.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  policy.rs   │────▶│   repr.rs    │────▶│  bytestr.rs  │
//! │ (validation, │     │ (variant set,│     │ (factories,  │
//! │  thresholds) │     │  dispatch)   │     │  algorithms) │
//! └──────────────┘     └──────┬───────┘     └──────┬───────┘
//!                             │                    │
//!                      ┌──────▼───────┐     ┌──────▼───────┐
//!                      │   rope.rs    │     │  builder.rs  │
//!                      │ (offset table│     │ (shift-based │
//!                      │  indexing)   │     │  edits)      │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! The factory operations are the only places a representation is chosen;
//! after construction a string never changes. Structural invariants (a slice
//! never delegates to a slice, a rope never contains a rope or an empty
//! segment) hold by construction because the variant constructors are
//! private and every public path goes through the flattening factories;
//! `contracts.rs` re-checks them in debug builds.
//!
//! # Key properties
//!
//! | Property                         | Where verified                     |
//! |----------------------------------|------------------------------------|
//! | representation-blind equality    | `tests/property/properties.rs`     |
//! | concat identity / associativity  | `tests/property/properties.rs`     |
//! | substring round-trip             | `tests/property/properties.rs`     |
//! | rope indexing vs flat oracle     | `tests/property/properties.rs`     |
//! | builder snapshot isolation       | `tests/unit/builder.rs`, fuzz      |
//! | structural invariants            | `src/contracts.rs` (debug builds)  |
//!
//! # Usage
//!
//! ```
//! use byterope::{ByteStr, ByteStrBuilder};
//!
//! let header = ByteStr::of(&[0xDE, 0xAD])?;
//! let payload = ByteStr::fill(0, 4096)?;       // O(1) space
//! let frame = header.concat(&payload);          // shares, no copy
//!
//! assert_eq!(frame.len(), 4098);
//! assert_eq!(frame.get(0), Ok(0xDE));
//! assert_eq!(frame.substring(2, 6)?, ByteStr::zeros(4));
//!
//! let mut builder = ByteStrBuilder::new();
//! builder.append(b"hello");
//! builder.insert_slice(5, b", world")?;
//! assert_eq!(builder.to_byte_str().len(), 12);
//! # Ok::<(), byterope::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Immutable strings need no locking: [`ByteStr`] is `Send + Sync`, and any
//! number of threads may read shared strings concurrently. The only mutable
//! type is [`ByteStrBuilder`], which requires `&mut self` for every edit and
//! is therefore single-writer by construction.

// Module declarations
mod builder;
mod bytestr;
mod contracts;
mod error;
mod policy;
mod repr;
mod rope;
pub mod testing;

// Re-exports for public API
pub use builder::ByteStrBuilder;
pub use bytestr::{ByteStr, Iter};
pub use error::{Error, ErrorKind, Result};

#[doc(hidden)]
pub use repr::ReprKind;
