//! Construct frames: one small state machine per grammar production.
//!
//! A frame sees one byte at a time through [`Construct::consume`] and
//! answers with a [`Step`]. Container frames (object, array) receive the
//! values completed by the frames above them through
//! [`Construct::add_child`]; scalar frames never do.

use alloc::{string::String, vec::Vec};

use super::{
    dispatch::{ConstructKind, dispatch, is_literal_delimiter, is_whitespace},
    error::{Byte, ErrorSource, FormatError, SyntaxError},
    literal_buffer::{LiteralBuffer, LiteralKind},
};
use crate::{
    Value,
    error::{ValueError, ValueKind},
};

/// What happened after feeding one more byte into a frame?
#[derive(Debug)]
pub(crate) enum Step {
    /// The byte was buffered or ignored.
    Pending,
    /// The byte starts a nested value; a new frame of this kind must be
    /// pushed and seeded with the same byte.
    Open(ConstructKind),
    /// The byte closed the production.
    Complete(Value),
}

#[derive(Debug)]
pub(crate) enum Construct {
    Object {
        building: Value,
        pending_key: Option<String>,
    },
    Array {
        building: Value,
    },
    String {
        buffer: Vec<u8>,
    },
    /// Boolean, number and null frames only differ in how the buffered text
    /// is interpreted.
    Literal(LiteralBuffer),
}

impl Construct {
    /// Creates the frame for `kind`, whose first byte is `first`.
    ///
    /// Containers and strings treat `first` as their opening delimiter;
    /// literals keep it as the first byte of their text.
    pub(crate) fn open(kind: ConstructKind, first: u8) -> Result<Self, ValueError> {
        Ok(match kind {
            ConstructKind::Object => Construct::Object {
                building: Value::default(),
                pending_key: None,
            },
            ConstructKind::Array => {
                let mut building = Value::default();
                building.to_array()?;
                Construct::Array { building }
            }
            ConstructKind::String => Construct::String { buffer: Vec::new() },
            ConstructKind::Boolean => {
                Construct::Literal(LiteralBuffer::new(LiteralKind::Boolean, first))
            }
            ConstructKind::Number => {
                Construct::Literal(LiteralBuffer::new(LiteralKind::Number, first))
            }
            ConstructKind::Null => Construct::Literal(LiteralBuffer::new(LiteralKind::Null, first)),
        })
    }

    pub(crate) fn kind(&self) -> ConstructKind {
        match self {
            Construct::Object { .. } => ConstructKind::Object,
            Construct::Array { .. } => ConstructKind::Array,
            Construct::String { .. } => ConstructKind::String,
            Construct::Literal(buffer) => match buffer.kind() {
                LiteralKind::Boolean => ConstructKind::Boolean,
                LiteralKind::Number => ConstructKind::Number,
                LiteralKind::Null => ConstructKind::Null,
            },
        }
    }

    pub(crate) fn consume(&mut self, byte: u8, strict_null: bool) -> Result<Step, ErrorSource> {
        match self {
            Construct::Object {
                building,
                pending_key,
            } => {
                if let Some(kind) = dispatch(byte) {
                    return Ok(Step::Open(kind));
                }
                match byte {
                    b'}' if pending_key.is_some() => Err(SyntaxError::DanglingKey.into()),
                    b'}' => Ok(Step::Complete(core::mem::take(building))),
                    b',' | b':' => Ok(Step::Pending),
                    b if is_whitespace(b) => Ok(Step::Pending),
                    b => Err(SyntaxError::UnexpectedCharacter(Byte(b)).into()),
                }
            }
            Construct::Array { building } => {
                if let Some(kind) = dispatch(byte) {
                    return Ok(Step::Open(kind));
                }
                match byte {
                    b']' => Ok(Step::Complete(core::mem::take(building))),
                    b',' => Ok(Step::Pending),
                    b if is_whitespace(b) => Ok(Step::Pending),
                    b => Err(SyntaxError::UnexpectedCharacter(Byte(b)).into()),
                }
            }
            Construct::String { buffer } => {
                if byte != b'"' {
                    buffer.push(byte);
                    return Ok(Step::Pending);
                }
                let text = String::from_utf8(core::mem::take(buffer)).map_err(|err| {
                    FormatError::InvalidUtf8 {
                        valid_up_to: err.utf8_error().valid_up_to(),
                    }
                })?;
                Ok(Step::Complete(Value::String(text)))
            }
            Construct::Literal(buffer) => {
                if is_literal_delimiter(byte) {
                    Ok(Step::Complete(buffer.finish(strict_null)?))
                } else {
                    buffer.push(byte);
                    Ok(Step::Pending)
                }
            }
        }
    }

    /// Hands a completed child value to this frame.
    ///
    /// Objects take children in pairs: a string key, then its value.
    pub(crate) fn add_child(&mut self, mut child: Value) -> Result<(), ValueError> {
        match self {
            Construct::Object {
                building,
                pending_key,
            } => match pending_key.take() {
                Some(key) => building.add_child(key, child),
                None => match &mut child {
                    Value::String(key) => {
                        *pending_key = Some(core::mem::take(key));
                        Ok(())
                    }
                    other => Err(ValueError::InvalidState {
                        operation: "object key",
                        expected: ValueKind::String,
                        found: other.kind(),
                    }),
                },
            },
            Construct::Array { building } => building.append(child),
            Construct::String { .. } => Err(ValueError::ScalarParent(ValueKind::String)),
            Construct::Literal(buffer) => Err(ValueError::ScalarParent(match buffer.kind() {
                LiteralKind::Boolean => ValueKind::Boolean,
                LiteralKind::Number => ValueKind::Number,
                LiteralKind::Null => ValueKind::Null,
            })),
        }
    }
}
