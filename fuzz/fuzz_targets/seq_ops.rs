//! Fuzz target for the representation family.
//!
//! Builds an arbitrarily structured byte string alongside a flat reference
//! vector, then checks the whole observable contract against it. If the
//! structured side ever disagrees with the flat side, the factories or the
//! indexing algorithms are wrong.

#![no_main]

use arbitrary::Arbitrary;
use byterope::ByteStr;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Array(Vec<u8>),
    Fill(u8, u16),
    Range(u8, u8),
    Single(u8),
    Concat,
    Rope,
    Substring(u16, u16),
    Slice(u16, u16),
    Repeat(u8),
}

const MAX_LEN: usize = 1 << 16;

fuzz_target!(|ops: Vec<Op>| {
    // a small stack of (structured, flat) pairs the ops combine
    let mut stack: Vec<(ByteStr, Vec<u8>)> = Vec::new();

    for op in ops {
        match op {
            Op::Array(bytes) => {
                let bytes: Vec<u8> = bytes.into_iter().take(256).collect();
                stack.push((ByteStr::copy_from(&bytes), bytes));
            }
            Op::Fill(value, len) => {
                let len = usize::from(len) % 512;
                let string = ByteStr::fill(i32::from(value), len).expect("valid byte value");
                stack.push((string, vec![value; len]));
            }
            Op::Range(lower, span) => {
                let lower = i32::from(lower);
                let upper = (lower + i32::from(span)).min(256);
                let string = ByteStr::unsigned_range(lower, upper).expect("valid bounds");
                let flat: Vec<u8> = (lower..upper).map(|v| v as u8).collect();
                stack.push((string, flat));
            }
            Op::Single(value) => {
                let string = ByteStr::single(i32::from(value)).expect("valid byte value");
                stack.push((string, vec![value]));
            }
            Op::Concat => {
                if let (Some((b, fb)), Some((a, fa))) = (stack.pop(), stack.pop()) {
                    if fa.len() + fb.len() <= MAX_LEN {
                        let mut flat = fa;
                        flat.extend_from_slice(&fb);
                        stack.push((a.concat(&b), flat));
                    }
                }
            }
            Op::Rope => {
                if let (Some((b, fb)), Some((a, fa))) = (stack.pop(), stack.pop()) {
                    if fa.len() + fb.len() <= MAX_LEN {
                        let mut flat = fa;
                        flat.extend_from_slice(&fb);
                        stack.push((ByteStr::rope(vec![a, b]), flat));
                    }
                }
            }
            Op::Substring(raw_begin, raw_span) => {
                if let Some((s, flat)) = stack.pop() {
                    let (begin, end) = window(flat.len(), raw_begin, raw_span);
                    let sub = s.substring(begin, end).expect("window is valid");
                    stack.push((sub, flat[begin..end].to_vec()));
                }
            }
            Op::Slice(raw_begin, raw_span) => {
                if let Some((s, flat)) = stack.pop() {
                    let (begin, end) = window(flat.len(), raw_begin, raw_span);
                    let sub = ByteStr::slice(&s, begin, end).expect("window is valid");
                    stack.push((sub, flat[begin..end].to_vec()));
                }
            }
            Op::Repeat(times) => {
                if let Some((s, flat)) = stack.pop() {
                    let times = usize::from(times) % 4;
                    if flat.len() * times <= MAX_LEN {
                        stack.push((ByteStr::repeat(&s, times), flat.repeat(times)));
                    }
                }
            }
        }
    }

    for (string, flat) in &stack {
        check(string, flat);
    }
});

fn window(len: usize, raw_begin: u16, raw_span: u16) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let begin = usize::from(raw_begin) % len;
    let end = begin + usize::from(raw_span) % (len - begin + 1);
    (begin, end)
}

fn check(string: &ByteStr, flat: &[u8]) {
    assert_eq!(string.len(), flat.len());
    assert_eq!(string.to_vec(), flat);
    for (i, &expected) in flat.iter().enumerate() {
        assert_eq!(string.get(i), Ok(expected));
    }
    assert!(string.get(flat.len()).is_err());
    if let Some(&first) = flat.first() {
        let expected = flat.iter().position(|&b| b == first);
        assert_eq!(
            string.index_of_value(i32::from(first), 0).unwrap(),
            expected
        );
    }
    assert_eq!(string, &ByteStr::copy_from(flat));
}
