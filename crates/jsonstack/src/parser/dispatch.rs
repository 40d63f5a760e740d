/// The grammar production a construct frame builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Object,
    Array,
    String,
    Boolean,
    Number,
    Null,
}

type ByteClass = fn(u8) -> bool;

/// Lookahead table, checked in order; the first class matching a byte
/// selects the construct that byte opens.
static DISPATCH_TABLE: [(ByteClass, ConstructKind); 6] = [
    (|b| b == b'{', ConstructKind::Object),
    (|b| b == b'[', ConstructKind::Array),
    (|b| b == b'"', ConstructKind::String),
    (|b| matches!(b, b't' | b'T' | b'f' | b'F'), ConstructKind::Boolean),
    (|b| matches!(b, b'-' | b'0'..=b'9' | b'.'), ConstructKind::Number),
    (|b| matches!(b, b'n' | b'N'), ConstructKind::Null),
];

/// Returns the construct `byte` opens, if any.
#[inline]
pub(crate) fn dispatch(byte: u8) -> Option<ConstructKind> {
    DISPATCH_TABLE
        .iter()
        .find(|(class, _)| class(byte))
        .map(|&(_, kind)| kind)
}

/// Bytes skipped between tokens: the ASCII whitespace set, vertical tab
/// included.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Bytes that end a bare literal (boolean, number or null).
#[inline]
pub(crate) fn is_literal_delimiter(byte: u8) -> bool {
    matches!(byte, b',' | b']' | b'}')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b'{', Some(ConstructKind::Object))]
    #[case(b'[', Some(ConstructKind::Array))]
    #[case(b'"', Some(ConstructKind::String))]
    #[case(b'T', Some(ConstructKind::Boolean))]
    #[case(b'f', Some(ConstructKind::Boolean))]
    #[case(b'-', Some(ConstructKind::Number))]
    #[case(b'.', Some(ConstructKind::Number))]
    #[case(b'7', Some(ConstructKind::Number))]
    #[case(b'N', Some(ConstructKind::Null))]
    #[case(b'}', None)]
    #[case(b']', None)]
    #[case(b',', None)]
    #[case(b':', None)]
    #[case(b' ', None)]
    #[case(b'+', None)]
    #[case(b'x', None)]
    fn dispatch_table(#[case] byte: u8, #[case] expected: Option<ConstructKind>) {
        assert_eq!(dispatch(byte), expected);
    }

    #[rstest]
    #[case(b' ', true)]
    #[case(b'\t', true)]
    #[case(b'\n', true)]
    #[case(b'\x0b', true)]
    #[case(b'\x0c', true)]
    #[case(b'\r', true)]
    #[case(b'\0', false)]
    #[case(0xa0, false)]
    #[case(b',', false)]
    fn whitespace_class(#[case] byte: u8, #[case] expected: bool) {
        assert_eq!(is_whitespace(byte), expected);
    }
}
