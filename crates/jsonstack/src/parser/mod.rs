//! Construct-stack JSON parser.
//!
//! Overview
//! - The parser is a recursive-descent parser run iteratively: every open
//!   grammar production is a `Construct` frame on an explicit stack, so
//!   nesting depth never grows the host call stack.
//! - Bytes arrive one at a time through [`Parser::push`]. The byte goes to the
//!   frame on top of the stack, which buffers it, ignores it, asks for a new
//!   frame to be opened, or completes and yields a finished [`Value`].
//! - A completed value is popped and handed to the frame below it; when no
//!   frame is left it is the parse result.
//!
//! Dispatch
//! - Container frames look each byte up in a static table of byte classes
//!   (`{`, `[`, `"`, `tTfF`, `-0-9.`, `nN`). A match opens a frame of that
//!   kind, and the same byte is the first one the new frame sees.
//!
//! Terminator replay
//! - Bare literals (booleans, numbers, null) have no closing character of
//!   their own and end at the first `,`, `]` or `}`. When that delimiter is a
//!   closing bracket it also belongs to the enclosing container. So whenever
//!   `]` completes something other than an array (or `}` something other
//!   than an object), the byte is fed once more to the new top frame. This
//!   is what closes `{"a":[1,2]}` correctly.
//!
//! Limitations
//! - The document root must be an object.
//! - Strings are read verbatim up to the next `"`; escape sequences are not
//!   interpreted, so a string cannot contain a quote.
//! - Objects ignore `:` and `,` wherever they appear between children; the
//!   parser checks that keys are strings, not that separators are in place.

mod construct;
mod dispatch;
mod error;
mod literal_buffer;
mod options;
mod source;


use alloc::vec::Vec;

use construct::{Construct, Step};
pub use dispatch::ConstructKind;
use dispatch::is_whitespace;
pub use error::{Byte, ErrorKind, ErrorSource, FormatError, ParserError, SourceError, SyntaxError};
pub use options::ParserOptions;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{ByteSource, IterSource};

use crate::Value;

/// Progress reported after each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The root object is still open.
    NeedMore,
    /// The root object has closed; [`Parser::finish`] returns it.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping whitespace before the root `{`.
    Start,
    /// At least one construct is open.
    Building,
    /// The root closed; only trailing bytes remain.
    Done,
    Error,
}

/// Line, column and byte offset of the next byte to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    line: usize,
    column: usize,
    offset: usize,
}

impl Position {
    fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Position of `byte`, which is about to be consumed. A UTF-8
    /// continuation byte belongs to the character before it.
    fn locate(self, byte: u8) -> Self {
        if is_continuation(byte) {
            Self {
                column: self.column.saturating_sub(1).max(1),
                ..self
            }
        } else {
            self
        }
    }

    fn advance(&mut self, byte: u8) {
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// The incremental parsing engine.
///
/// Feed bytes with [`push`](Parser::push) (or [`feed`](Parser::feed) for
/// slices), then call [`finish`](Parser::finish) once the source is
/// exhausted. The parser never hands out a partially built value: `finish`
/// returns either the complete root object or an error.
///
/// The first error is final. Every later call returns the same error.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{Parser, ParserOptions, Status};
///
/// let mut parser = Parser::new(ParserOptions::default());
/// assert_eq!(parser.feed(br#"{"a":[1,"#).unwrap(), Status::NeedMore);
/// assert_eq!(parser.feed(br#"2]}"#).unwrap(), Status::Complete);
/// let value = parser.finish().unwrap();
/// assert_eq!(value["a"][1], 2.0);
/// ```
#[derive(Debug)]
pub struct Parser {
    stack: Vec<Construct>,
    state: State,
    result: Option<Value>,
    error: Option<ParserError>,
    position: Position,
    options: ParserOptions,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl Parser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            stack: Vec::with_capacity(16),
            state: State::Start,
            result: None,
            error: None,
            position: Position::new(),
            options,
        }
    }

    /// Number of currently open constructs.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Kinds of the currently open constructs, outermost first.
    pub fn open_constructs(&self) -> impl Iterator<Item = ConstructKind> + '_ {
        self.stack.iter().map(Construct::kind)
    }

    /// Consumes one byte.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; once a parser has failed, every
    /// call returns that same error.
    pub fn push(&mut self, byte: u8) -> Result<Status, ParserError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let at = self.position.locate(byte);
        self.position.advance(byte);
        self.step(byte).map_err(|source| self.fail(source, at))
    }

    /// Consumes a slice of bytes.
    ///
    /// With [`ParserOptions::allow_trailing_data`] set, bytes after the root
    /// object are left unread.
    ///
    /// # Errors
    ///
    /// See [`Parser::push`].
    pub fn feed(&mut self, bytes: &[u8]) -> Result<Status, ParserError> {
        let mut status = self.status();
        for &byte in bytes {
            if status == Status::Complete && self.options.allow_trailing_data {
                break;
            }
            status = self.push(byte)?;
        }
        Ok(status)
    }

    /// Marks the end of the source and returns the root object.
    ///
    /// # Errors
    ///
    /// Returns the stored error if parsing already failed, or an
    /// [`ErrorKind::IncompleteInput`] error if the root object never closed.
    pub fn finish(mut self) -> Result<Value, ParserError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        match self.result.take() {
            Some(value) => Ok(value),
            None => Err(self.fail(ErrorSource::IncompleteInput, self.position)),
        }
    }

    /// Records a failure of the byte source feeding this parser.
    pub(crate) fn source_failed(&mut self, err: SourceError) -> ParserError {
        if let Some(stored) = &self.error {
            return stored.clone();
        }
        self.fail(err.into(), self.position)
    }

    fn status(&self) -> Status {
        if self.state == State::Done {
            Status::Complete
        } else {
            Status::NeedMore
        }
    }

    fn step(&mut self, byte: u8) -> Result<Status, ErrorSource> {
        match self.state {
            State::Start => {
                if is_whitespace(byte) {
                    return Ok(Status::NeedMore);
                }
                if byte != b'{' {
                    return Err(SyntaxError::ExpectedObjectRoot(Byte(byte)).into());
                }
                self.open(ConstructKind::Object, byte)?;
                self.state = State::Building;
                Ok(Status::NeedMore)
            }
            State::Building => self.build(byte),
            State::Done => {
                if self.options.allow_trailing_data || is_whitespace(byte) {
                    Ok(Status::Complete)
                } else {
                    Err(SyntaxError::TrailingCharacter(Byte(byte)).into())
                }
            }
            // `push` returns the stored error before reaching this point.
            State::Error => Ok(Status::NeedMore),
        }
    }

    fn build(&mut self, byte: u8) -> Result<Status, ErrorSource> {
        let Some(completed) = self.consume_top(byte)? else {
            return Ok(Status::NeedMore);
        };
        let replay = match byte {
            b']' => !completed.is_array(),
            b'}' => !completed.is_object(),
            _ => false,
        };
        if self.deliver(completed)? {
            return Ok(Status::Complete);
        }
        if replay {
            if let Some(completed) = self.consume_top(byte)? {
                if self.deliver(completed)? {
                    return Ok(Status::Complete);
                }
            }
        }
        Ok(Status::NeedMore)
    }

    /// Feeds `byte` to the top frame, opening or popping frames as it asks.
    /// Returns the value of a frame that completed.
    fn consume_top(&mut self, byte: u8) -> Result<Option<Value>, ErrorSource> {
        let strict_null = self.options.strict_null_literal;
        let Some(top) = self.stack.last_mut() else {
            unreachable!("a building parser always has an open construct");
        };
        match top.consume(byte, strict_null)? {
            Step::Pending => Ok(None),
            Step::Open(kind) => {
                self.open(kind, byte)?;
                Ok(None)
            }
            Step::Complete(value) => {
                self.stack.pop();
                Ok(Some(value))
            }
        }
    }

    /// Hands a completed value to the new top frame. Returns `true` when the
    /// value was the root.
    fn deliver(&mut self, value: Value) -> Result<bool, ErrorSource> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.add_child(value)?;
                Ok(false)
            }
            None => {
                self.result = Some(value);
                self.state = State::Done;
                Ok(true)
            }
        }
    }

    fn open(&mut self, kind: ConstructKind, byte: u8) -> Result<(), ErrorSource> {
        if let Some(limit) = self.options.max_depth {
            if self.stack.len() >= limit {
                return Err(SyntaxError::DepthLimitExceeded(limit).into());
            }
        }
        self.stack.push(Construct::open(kind, byte)?);
        Ok(())
    }

    fn fail(&mut self, source: ErrorSource, at: Position) -> ParserError {
        let err = ParserError {
            source,
            line: at.line,
            column: at.column,
            offset: at.offset,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        self.state = State::Error;
        self.stack.clear();
        self.error = Some(err.clone());
        err
    }
}

/// Parses a complete document from `source` with default options.
///
/// # Examples
///
/// ```rust
/// let value = jsonstack::parse(&br#"{"a":true,"b":-3.5}"#[..]).unwrap();
/// assert_eq!(value["a"], true);
/// assert_eq!(value["b"], -3.5);
/// ```
///
/// # Errors
///
/// Any [`ParserError`]; see [`ErrorKind`] for the categories.
pub fn parse<S: ByteSource>(source: S) -> Result<Value, ParserError> {
    parse_with_options(source, ParserOptions::default())
}

/// Parses a complete document from `source`.
///
/// Reads one byte at a time until the source ends, or, with
/// [`ParserOptions::allow_trailing_data`], until the root object closes.
///
/// # Errors
///
/// Any [`ParserError`]; see [`ErrorKind`] for the categories.
pub fn parse_with_options<S: ByteSource>(
    mut source: S,
    options: ParserOptions,
) -> Result<Value, ParserError> {
    let mut parser = Parser::new(options);
    loop {
        let byte = match source.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => break,
            Err(err) => return Err(parser.source_failed(err)),
        };
        if parser.push(byte)? == Status::Complete && options.allow_trailing_data {
            break;
        }
    }
    parser.finish()
}

/// Parses a document held in a string.
///
/// # Errors
///
/// Any [`ParserError`]; see [`ErrorKind`] for the categories.
pub fn parse_str(text: &str) -> Result<Value, ParserError> {
    parse(text.as_bytes())
}

/// Parses a document from a reader, one byte per `read` call.
///
/// # Errors
///
/// Any [`ParserError`]; reader failures surface as [`ErrorKind::Source`].
#[cfg(feature = "std")]
pub fn parse_reader<R: std::io::Read>(reader: R) -> Result<Value, ParserError> {
    parse(ReadSource::new(reader))
}
