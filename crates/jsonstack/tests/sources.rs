#![expect(missing_docs)]

use std::io::{self, Cursor, Read};

use jsonstack::{ErrorKind, ErrorSource, ReadSource, SourceError, parse, parse_reader};

/// Yields its bytes, then fails with `kind` instead of reporting the end.
struct FailAfter {
    data: Cursor<Vec<u8>>,
    kind: io::ErrorKind,
    interrupted_once: bool,
}

impl FailAfter {
    fn new(data: &[u8], kind: io::ErrorKind) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            kind,
            interrupted_once: false,
        }
    }
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted_once {
            self.interrupted_once = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        match self.data.read(buf)? {
            0 => Err(io::Error::new(self.kind, "connection reset")),
            n => Ok(n),
        }
    }
}

#[test]
fn reads_documents_from_io_readers() {
    let v = parse_reader(Cursor::new(br#"{"a":[1,2]}"#.to_vec())).unwrap();
    assert_eq!(v.to_string(), r#"{"a":[1, 2]}"#);
}

#[test]
fn reader_is_consumed_one_byte_at_a_time() {
    let mut source = ReadSource::new(Cursor::new(b"{}   ".to_vec()));
    let v = parse(&mut source).unwrap();
    assert!(v.is_object());
    assert_eq!(source.into_inner().position(), 5);
}

#[test]
fn interrupted_reads_are_retried() {
    let err =
        parse_reader(FailAfter::new(br#"{"ok":true}"#, io::ErrorKind::WouldBlock)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Source);
    assert_eq!(err.offset, 11);
}

#[test]
fn stalled_reader_is_not_end_of_input() {
    let err = parse_reader(FailAfter::new(br#"{"a":"#, io::ErrorKind::WouldBlock)).unwrap_err();
    assert_eq!(err.source_error(), &ErrorSource::Source(SourceError::Stalled));
    assert_eq!((err.line, err.column, err.offset), (1, 6, 5));

    let err = parse_reader(FailAfter::new(b"{", io::ErrorKind::TimedOut)).unwrap_err();
    assert_eq!(err.source_error(), &ErrorSource::Source(SourceError::Stalled));
}

#[test]
fn failing_reader_reports_the_io_error() {
    let err = parse_reader(FailAfter::new(b"{", io::ErrorKind::ConnectionReset)).unwrap_err();
    assert_eq!(
        err.source_error(),
        &ErrorSource::Source(SourceError::Failed("connection reset".into()))
    );
    assert_eq!(
        err.to_string(),
        "source error: byte source failed: connection reset at 1:2"
    );
}
