//! Byte sources feeding the parser.
//!
//! The parser pulls exactly one byte per read and never reads ahead, so a
//! source only has to answer "next byte, or end of input".

use super::error::SourceError;

/// A sequentially readable source of bytes.
pub trait ByteSource {
    /// Reads the next byte. `Ok(None)` marks the end of the source and is
    /// never a data byte.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the underlying source fails or stalls.
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError>;
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError> {
        let Some((first, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(*first))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError> {
        (**self).read_byte()
    }
}

/// Adapts any iterator of bytes into a [`ByteSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I: Iterator<Item = u8>> IterSource<I> {
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: inner.into_iter(),
        }
    }
}

impl<I: Iterator<Item = u8>> ByteSource for IterSource<I> {
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError> {
        Ok(self.inner.next())
    }
}

#[cfg(feature = "std")]
mod io {
    use alloc::string::ToString;
    use std::io::{ErrorKind, Read};

    use super::{ByteSource, SourceError};

    /// Reads from a [`std::io::Read`] implementation one byte at a time.
    ///
    /// No buffering is added; wrap slow readers in a `BufReader` if needed.
    /// Interrupted reads are retried. `WouldBlock` and `TimedOut` are
    /// reported as [`SourceError::Stalled`] so callers can tell a stalled
    /// source from a closed one.
    #[derive(Debug)]
    pub struct ReadSource<R> {
        reader: R,
    }

    impl<R: Read> ReadSource<R> {
        pub fn new(reader: R) -> Self {
            Self { reader }
        }

        pub fn into_inner(self) -> R {
            self.reader
        }
    }

    impl<R: Read> ByteSource for ReadSource<R> {
        fn read_byte(&mut self) -> Result<Option<u8>, SourceError> {
            let mut byte = [0u8; 1];
            loop {
                match self.reader.read(&mut byte) {
                    Ok(0) => return Ok(None),
                    Ok(_) => return Ok(Some(byte[0])),
                    Err(err) if err.kind() == ErrorKind::Interrupted => {}
                    Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                        return Err(SourceError::Stalled);
                    }
                    Err(err) => return Err(SourceError::Failed(err.to_string())),
                }
            }
        }
    }
}

#[cfg(feature = "std")]
pub use io::ReadSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_advances_and_ends() {
        let mut src: &[u8] = b"ab";
        assert_eq!(src.read_byte(), Ok(Some(b'a')));
        assert_eq!(src.read_byte(), Ok(Some(b'b')));
        assert_eq!(src.read_byte(), Ok(None));
        assert_eq!(src.read_byte(), Ok(None));
    }

    #[test]
    fn iter_source_wraps_iterators() {
        let mut src = IterSource::new("{}".bytes());
        assert_eq!(src.read_byte(), Ok(Some(b'{')));
        assert_eq!(src.read_byte(), Ok(Some(b'}')));
        assert_eq!(src.read_byte(), Ok(None));
    }
}
