//! A single-pass JSON parser built on an explicit stack of construct frames,
//! together with the dynamically typed [`Value`] tree it produces.
//!
//! ```rust
//! use jsonstack::parse_str;
//!
//! let value = parse_str(r#"{"a":[1,[2,3]]}"#).unwrap();
//! assert_eq!(value["a"][1][0], 2.0);
//! assert_eq!(value.to_string(), r#"{"a":[1, [2, 3]]}"#);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod parser;
mod value;
mod value_ops;

#[cfg(test)]
mod tests;

pub use error::{ValueError, ValueKind};
#[cfg(feature = "std")]
pub use parser::{ReadSource, parse_reader};
pub use parser::{
    Byte, ByteSource, ConstructKind, ErrorKind, ErrorSource, FormatError, IterSource, Parser,
    ParserError, ParserOptions, SourceError, Status, SyntaxError, parse, parse_str,
    parse_with_options,
};
pub use value::{Array, Map, Value};
