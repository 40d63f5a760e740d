use alloc::vec::Vec;

use bstr::{BString, ByteSlice};

use super::{dispatch::is_whitespace, error::FormatError};
use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    Boolean,
    Number,
    Null,
}

/// Bytes of a bare literal (`true`, `-3.5`, `null`, ...) collected up to the
/// delimiter that ends it.
///
/// The buffer is seeded with the byte that selected the literal kind and is
/// only interpreted once the delimiter arrives; until then every byte is
/// kept verbatim, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LiteralBuffer {
    kind: LiteralKind,
    bytes: Vec<u8>,
}

impl LiteralBuffer {
    pub(crate) fn new(kind: LiteralKind, first: u8) -> Self {
        let mut bytes = Vec::with_capacity(8);
        bytes.push(first);
        Self { kind, bytes }
    }

    pub(crate) fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Interprets the buffered text. Surrounding whitespace, as the parser
    /// defines it between tokens, is ignored.
    ///
    /// `strict_null` selects whether a null literal is validated at all.
    pub(crate) fn finish(&mut self, strict_null: bool) -> Result<Value, FormatError> {
        let bytes = core::mem::take(&mut self.bytes);
        let text = bytes.trim_with(|c| u8::try_from(c).is_ok_and(is_whitespace));
        match self.kind {
            LiteralKind::Boolean => parse_boolean(text)
                .map(Value::Boolean)
                .ok_or_else(|| FormatError::InvalidBoolean(BString::from(text))),
            LiteralKind::Number => parse_number(text)
                .map(Value::Number)
                .ok_or_else(|| FormatError::InvalidNumber(BString::from(text))),
            LiteralKind::Null => {
                if strict_null && !text.eq_ignore_ascii_case(b"null") {
                    return Err(FormatError::InvalidNull(BString::from(text)));
                }
                Ok(Value::Null)
            }
        }
    }
}

fn parse_boolean(text: &[u8]) -> Option<bool> {
    if text.eq_ignore_ascii_case(b"true") {
        Some(true)
    } else if text.eq_ignore_ascii_case(b"false") {
        Some(false)
    } else {
        None
    }
}

/// Accepts decimal literals with an optional fraction and exponent. Names
/// such as `inf` or `NaN`, which `f64::from_str` would take, are rejected,
/// and so are literals that overflow to an infinity.
fn parse_number(text: &[u8]) -> Option<f64> {
    if !text
        .iter()
        .all(|b| matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    text.to_str()
        .ok()?
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
}
