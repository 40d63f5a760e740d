use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::{Parser, ParserOptions, Status, Value, parse_str};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: serializing a document and parsing the text back yields an
/// identical tree.
#[test]
fn canonical_text_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let text = value.to_canonical_string();
        match parse_str(&text) {
            Ok(parsed) => parsed == value && parsed.to_canonical_string() == text,
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: parsing is deterministic, and the result does not depend on how
/// the source is split into `feed` calls.
#[test]
fn chunked_feed_matches_whole_parse_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, splits: Vec<usize>) -> bool {
        let text = value.to_canonical_string();
        let bytes = text.as_bytes();

        let Ok(first) = parse_str(&text) else {
            return false;
        };
        let Ok(second) = parse_str(&text) else {
            return false;
        };
        if first.to_canonical_string() != second.to_canonical_string() {
            return false;
        }

        let mut parser = Parser::new(ParserOptions {
            panic_on_error: true,
            ..ParserOptions::default()
        });
        let mut idx = 0;
        let mut status = Status::NeedMore;
        for s in splits {
            let remaining = bytes.len() - idx;
            if remaining == 0 {
                break;
            }
            let end = idx + 1 + s % remaining;
            status = parser.feed(&bytes[idx..end]).unwrap();
            idx = end;
        }
        if idx < bytes.len() {
            status = parser.feed(&bytes[idx..]).unwrap();
        }
        status == Status::Complete
            && parser
                .finish()
                .is_ok_and(|v| v.to_canonical_string() == first.to_canonical_string())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value, Vec<usize>) -> bool);
}
