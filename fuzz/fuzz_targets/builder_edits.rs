//! Fuzz target for the builder's shift-based edits.
//!
//! Runs an arbitrary edit script against the builder and a plain `Vec<u8>`
//! model in lockstep. The builder must match the model byte for byte, a
//! mid-script snapshot must never change afterwards, and no script may
//! panic or leave `len` past `capacity`.

#![no_main]

use arbitrary::Arbitrary;
use byterope::ByteStrBuilder;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Edit {
    Push(u8),
    Append(Vec<u8>),
    Insert(u16, Vec<u8>),
    Delete(u16, u16),
    Replace(u16, u16, Vec<u8>),
    Truncate(u16),
    Snapshot,
}

fuzz_target!(|edits: Vec<Edit>| {
    let mut builder = ByteStrBuilder::new();
    let mut model: Vec<u8> = Vec::new();
    let mut snapshots = Vec::new();

    for edit in edits {
        let len = model.len();
        match edit {
            Edit::Push(byte) => {
                builder.push_byte(byte);
                model.push(byte);
            }
            Edit::Append(bytes) => {
                let bytes: Vec<u8> = bytes.into_iter().take(64).collect();
                builder.append(&bytes);
                model.extend_from_slice(&bytes);
            }
            Edit::Insert(raw, bytes) => {
                let bytes: Vec<u8> = bytes.into_iter().take(64).collect();
                let index = usize::from(raw) % (len + 1);
                builder.insert_slice(index, &bytes).expect("index is valid");
                model.splice(index..index, bytes.iter().copied());
            }
            Edit::Delete(raw_begin, raw_span) => {
                let begin = usize::from(raw_begin) % (len + 1);
                let end = begin + usize::from(raw_span) % (len - begin + 1);
                builder.delete(begin, end).expect("range is valid");
                model.drain(begin..end);
            }
            Edit::Replace(raw_begin, raw_span, bytes) => {
                let bytes: Vec<u8> = bytes.into_iter().take(64).collect();
                let begin = usize::from(raw_begin) % (len + 1);
                let end = begin + usize::from(raw_span) % (len - begin + 1);
                builder.replace(begin, end, &bytes).expect("range is valid");
                model.splice(begin..end, bytes.iter().copied());
            }
            Edit::Truncate(raw) => {
                let new_len = usize::from(raw) % (len + 2);
                builder.truncate(new_len);
                model.truncate(new_len);
            }
            Edit::Snapshot => {
                snapshots.push((builder.to_byte_str(), model.clone()));
            }
        }

        assert_eq!(builder.as_slice(), model.as_slice());
        assert!(builder.len() <= builder.capacity());
    }

    // every snapshot still shows the bytes from the moment it was taken
    for (snapshot, frozen) in &snapshots {
        assert_eq!(&snapshot.to_vec(), frozen);
    }
});
