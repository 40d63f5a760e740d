use alloc::string::String;
use core::fmt;

use bstr::BString;
use thiserror::Error;

use crate::error::ValueError;

/// The error returned by a failed parse.
///
/// Carries the failure together with the position of the byte that caused
/// it: `line` and `column` are 1-based (columns count characters), `offset`
/// is the 0-based byte offset into the source.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    pub(crate) source: ErrorSource,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl ParserError {
    /// The underlying failure.
    #[must_use]
    pub fn source_error(&self) -> &ErrorSource {
        &self.source
    }

    /// The broad category of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.source {
            ErrorSource::Syntax(_) => ErrorKind::Parse,
            ErrorSource::Format(_) => ErrorKind::Format,
            ErrorSource::InvalidState(_) => ErrorKind::InvalidState,
            ErrorSource::IncompleteInput => ErrorKind::IncompleteInput,
            ErrorSource::Source(_) => ErrorKind::Source,
        }
    }
}

/// Broad failure categories, one per way a parse can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unexpected character, or a structural limit was hit.
    Parse,
    /// A buffered literal did not have the expected lexical form.
    Format,
    /// A value was delivered somewhere it cannot be stored.
    InvalidState,
    /// The source ended while constructs were still open.
    IncompleteInput,
    /// The byte source itself failed.
    Source,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorSource {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("invalid state: {0}")]
    InvalidState(#[from] ValueError),
    #[error("unexpected end of input")]
    IncompleteInput,
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// Renders a single input byte, escaping anything that is not printable
/// ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte(pub u8);

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid character '{0}'")]
    UnexpectedCharacter(Byte),
    #[error("document must start with '{{', found '{0}'")]
    ExpectedObjectRoot(Byte),
    #[error("trailing character '{0}' after the root object")]
    TrailingCharacter(Byte),
    #[error("object key without a value")]
    DanglingKey,
    #[error("nesting deeper than {0} constructs")]
    DepthLimitExceeded(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid boolean literal \"{0}\"")]
    InvalidBoolean(BString),
    #[error("invalid number literal \"{0}\"")]
    InvalidNumber(BString),
    #[error("invalid null literal \"{0}\"")]
    InvalidNull(BString),
    #[error("invalid UTF-8 in string after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Failures reported by a [`ByteSource`](crate::ByteSource).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source has no byte available yet and cannot block for one.
    #[error("byte source stalled")]
    Stalled,
    #[error("byte source failed: {0}")]
    Failed(String),
}
