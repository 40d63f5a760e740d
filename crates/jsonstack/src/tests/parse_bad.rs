use alloc::string::ToString;

use crate::{ErrorKind, ParserOptions, parse_with_options};

fn kind_of(src: &str) -> ErrorKind {
    match parse_with_options(src.as_bytes(), ParserOptions::default()) {
        Ok(v) => panic!("{src:?} parsed as {v}"),
        Err(err) => err.kind(),
    }
}

#[rstest::rstest]
#[case("", ErrorKind::IncompleteInput)]
#[case(r#"{"a":{"b":[1,"#, ErrorKind::IncompleteInput)]
#[case("[]", ErrorKind::Parse)]
#[case(r#"{"a":[1}"#, ErrorKind::Parse)]
#[case(r#"{"a":1]"#, ErrorKind::Parse)]
#[case(r#"{"a":}"#, ErrorKind::Parse)]
#[case(r#"{"a":1} {}"#, ErrorKind::Parse)]
#[case(r#"{"a":yes}"#, ErrorKind::Parse)]
#[case(r#"{"a":falsy}"#, ErrorKind::Format)]
#[case(r#"{"a":0x10}"#, ErrorKind::Format)]
#[case(r#"{"a":1e999}"#, ErrorKind::Format)]
#[case(r#"{"a":[-1e999]}"#, ErrorKind::Format)]
#[case(r#"{"a":1,"a":1}"#, ErrorKind::InvalidState)]
#[case(r#"{1:2}"#, ErrorKind::Format)]
#[case(r#"{true,2}"#, ErrorKind::InvalidState)]
#[case(r#"{{}:1}"#, ErrorKind::InvalidState)]
fn rejects_malformed_documents(#[case] src: &str, #[case] expected: ErrorKind) {
    assert_eq!(kind_of(src), expected);
}

#[test]
fn errors_render_with_position() {
    let err = parse_with_options(&b"{\n  \"a\": [1, 2}\n}"[..], ParserOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "syntax error: invalid character '}' at 2:13");
}
