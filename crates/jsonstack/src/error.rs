use alloc::string::String;

use thiserror::Error;

/// The tag of a [`Value`](crate::Value), used to describe mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Null`](crate::Value::Null)
    Null,
    /// [`Value::Boolean`](crate::Value::Boolean)
    Boolean,
    /// [`Value::Number`](crate::Value::Number)
    Number,
    /// [`Value::String`](crate::Value::String)
    String,
    /// [`Value::Array`](crate::Value::Array)
    Array,
    /// [`Value::Object`](crate::Value::Object)
    Object,
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

/// Errors raised by mutating operations on a [`Value`](crate::Value).
///
/// Mutators follow a strict policy: an operation that does not apply to the
/// value's tag reports an error and leaves the value unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A re-tagging conversion would discard data the caller did not intend
    /// to discard.
    #[error("cannot convert {found} holding data into {target}")]
    Type {
        /// Tag the value currently holds.
        found: ValueKind,
        /// Tag the conversion asked for.
        target: ValueKind,
    },
    /// The operation requires a different tag.
    #[error("{operation} requires {expected}, found {found}")]
    InvalidState {
        /// Name of the attempted operation.
        operation: &'static str,
        /// Tag the operation applies to.
        expected: ValueKind,
        /// Tag the value actually holds.
        found: ValueKind,
    },
    /// An object already holds the key being added.
    #[error("duplicate key \"{0}\"")]
    DuplicateKey(String),
    /// A child was handed to something that builds a scalar.
    #[error("a {0} cannot hold children")]
    ScalarParent(ValueKind),
}
