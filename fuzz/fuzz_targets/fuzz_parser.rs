#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonstack::{Parser, ParserOptions, Value, parse_str, parse_with_options};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Number};

const HEADER: usize = 5; // 1 flag byte + 4-byte split seed

/// A `serde_json` document whose serialization this parser reads back
/// exactly: the root is an object and no string needs escaping.
#[derive(Debug)]
struct Document(serde_json::Value);

fn plain_string(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    let s: String = u.arbitrary()?;
    Ok(s.chars().filter(|c| *c != '"' && *c != '\\' && !c.is_control()).collect())
}

fn arbitrary_value(u: &mut Unstructured<'_>, depth: usize) -> arbitrary::Result<serde_json::Value> {
    let choices = if depth == 0 { 4 } else { 6 };
    Ok(match u.choose_index(choices)? {
        0 => serde_json::Value::Null,
        1 => serde_json::Value::Bool(u.arbitrary()?),
        2 => {
            let n: f64 = u.arbitrary()?;
            serde_json::Value::Number(Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?)
        }
        3 => serde_json::Value::String(plain_string(u)?),
        4 => {
            let len = u.choose_index(4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            serde_json::Value::Array(items)
        }
        _ => arbitrary_object(u, depth - 1)?,
    })
}

fn arbitrary_object(u: &mut Unstructured<'_>, depth: usize) -> arbitrary::Result<serde_json::Value> {
    let len = u.choose_index(4)?;
    let mut map = Map::new();
    for _ in 0..len {
        map.insert(plain_string(u)?, arbitrary_value(u, depth)?);
    }
    Ok(serde_json::Value::Object(map))
}

impl<'a> Arbitrary<'a> for Document {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let depth = u.choose_index(4)?;
        Ok(Document(arbitrary_object(u, depth)?))
    }
}

/// Structural comparison, including the values under object keys.
fn same(ours: &Value, theirs: &serde_json::Value) -> bool {
    match (ours, theirs) {
        (Value::Null, serde_json::Value::Null) => true,
        (Value::Boolean(a), serde_json::Value::Bool(b)) => a == b,
        (Value::Number(a), serde_json::Value::Number(b)) => b.as_f64() == Some(*a),
        (Value::String(a), serde_json::Value::String(b)) => a == b,
        (Value::Array(a), serde_json::Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
        }
        (Value::Object(a), serde_json::Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| same(v, w)))
        }
        _ => false,
    }
}

fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        max_depth: (flags & 1 != 0).then_some(64),
        allow_trailing_data: flags & 2 != 0,
        strict_null_literal: flags & 4 != 0,
        panic_on_error: false,
    }
}

/// Raw bytes: parsing must never panic, splitting the input must not change
/// the outcome, and any accepted document must survive a canonical round
/// trip.
fn raw(flags: u8, split_seed: u64, data: &[u8]) {
    let options = options(flags);
    let whole = parse_with_options(data, options);

    let mut parser = Parser::new(options);
    let mut split = Ok(());
    for chunk in split_chunks(data, split_seed) {
        if let Err(err) = parser.feed(chunk) {
            split = Err(err);
            break;
        }
    }
    let split = split.and_then(|()| parser.finish());

    match (&whole, &split) {
        (Ok(a), Ok(b)) => assert_eq!(a.to_canonical_string(), b.to_canonical_string()),
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("whole parse {whole:?} disagrees with chunked parse {split:?}"),
    }

    if let Ok(value) = whole {
        let text = value.to_canonical_string();
        let reparsed = parse_str(&text).unwrap_or_else(|err| panic!("{text}: {err}"));
        assert_eq!(reparsed.to_canonical_string(), text);
    }
}

/// Structured documents: text produced by `serde_json` parses to the same
/// tree.
fn structured(data: &[u8]) {
    let Ok(Document(doc)) = Document::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    let text = serde_json::to_string(&doc).expect("serialize arbitrary document");
    let value = parse_str(&text).unwrap_or_else(|err| panic!("{text}: {err}"));
    assert!(same(&value, &doc), "{text} parsed as {value:?}");
}

fn run(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u64::from(u32::from_le_bytes([data[1], data[2], data[3], data[4]]));
    let data = &data[HEADER..];

    if flags & 0x80 != 0 {
        structured(data);
    } else {
        raw(flags, split_seed, data);
    }
}

fuzz_target!(|data: &[u8]| run(data));

/// Splits `data` into non-empty chunks whose sizes derive from `split_seed`.
fn split_chunks(data: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut seed = split_seed;
    while start < data.len() {
        let remaining = data.len() - start;
        let size = (seed as usize % remaining) + 1;
        chunks.push(&data[start..start + size]);
        start += size;
        seed = seed.rotate_left(7) ^ 0x9e37_79b9;
    }
    chunks
}
