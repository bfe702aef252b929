//! RESP decoder
//!
//! Pulls bytes from a `BufRead` and builds a `Value`.
//!
//! ## Wire Format
//! ```text
//! +<payload>\r\n                      simple string
//! $<len>\r\n<len bytes>\r\n           bulk string
//! *<count>\r\n<count values>          array
//! ```
//!
//! A failed decode leaves the stream wherever the failing read stopped.
//! Nothing is skipped or resynchronized.

use std::io::{self, BufRead, Read};

use bytes::Bytes;

use super::value::{Value, ARRAY_TAG, BULK_STRING_TAG, SIMPLE_STRING_TAG};
use crate::error::DecodeError;

/// Default maximum array nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default maximum bulk string length (512 MB)
pub const DEFAULT_MAX_BULK_LEN: usize = 512 * 1024 * 1024;

/// Length of the CRLF delimiter
const CRLF_LEN: usize = 2;

/// Decode one value from the stream using default limits
pub fn decode<R: BufRead>(reader: &mut R) -> Result<Value, DecodeError> {
    Decoder::default().decode(reader)
}

/// Stateless decoder carrying framing limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
    max_bulk_len: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bulk_len: DEFAULT_MAX_BULK_LEN,
        }
    }
}

impl Decoder {
    /// Create a decoder with the given limits
    pub fn new(max_depth: usize, max_bulk_len: usize) -> Self {
        Self {
            max_depth,
            max_bulk_len,
        }
    }

    /// Maximum array nesting depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Maximum bulk string length
    pub fn max_bulk_len(&self) -> usize {
        self.max_bulk_len
    }

    /// Decode one complete value, blocking until it is read or the stream fails
    pub fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Value, DecodeError> {
        self.decode_at(reader, 0)
    }

    fn decode_at<R: BufRead>(&self, reader: &mut R, depth: usize) -> Result<Value, DecodeError> {
        let mut tag = [0u8; 1];
        reader.read_exact(&mut tag)?;

        match tag[0] {
            SIMPLE_STRING_TAG => self.decode_simple_string(reader),
            BULK_STRING_TAG => self.decode_bulk_string(reader),
            ARRAY_TAG => self.decode_array(reader, depth),
            other => Err(DecodeError::UnknownTypeTag(other)),
        }
    }

    /// +OK\r\n
    fn decode_simple_string<R: BufRead>(&self, reader: &mut R) -> Result<Value, DecodeError> {
        let line = read_until_crlf(reader)?;
        Ok(Value::SimpleString(Bytes::from(line)))
    }

    /// $5\r\nhello\r\n
    fn decode_bulk_string<R: BufRead>(&self, reader: &mut R) -> Result<Value, DecodeError> {
        let len = read_length(reader)?;
        if len > self.max_bulk_len {
            return Err(DecodeError::BulkTooLarge {
                len,
                max: self.max_bulk_len,
            });
        }

        // Payload plus trailing CRLF. Reading through `take` avoids
        // reserving `len` bytes for a prefix the stream cannot back.
        let want = len.saturating_add(CRLF_LEN);
        let mut payload = Vec::new();
        reader.by_ref().take(want as u64).read_to_end(&mut payload)?;
        if payload.len() < want {
            return Err(DecodeError::Stream(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "bulk string truncated: expected {} bytes, got {}",
                    want,
                    payload.len()
                ),
            )));
        }

        payload.truncate(len);
        Ok(Value::BulkString(Bytes::from(payload)))
    }

    /// *2\r\n+a\r\n+b\r\n
    fn decode_array<R: BufRead>(&self, reader: &mut R, depth: usize) -> Result<Value, DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::NestingTooDeep {
                max: self.max_depth,
            });
        }

        let count = read_length(reader)?;

        // Each element takes at least one byte, so the count alone is not
        // trusted for preallocation.
        let mut elements = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            elements.push(self.decode_at(reader, depth + 1)?);
        }

        Ok(Value::Array(elements))
    }
}

/// Read up to and including the next CRLF, returning the line without it.
///
/// A lone LF does not end the line; reading continues until an LF directly
/// follows a CR.
pub fn read_until_crlf<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();

    loop {
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 || line.last() != Some(&b'\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended before CRLF",
            ));
        }

        if line.len() >= CRLF_LEN && line[line.len() - CRLF_LEN] == b'\r' {
            line.truncate(line.len() - CRLF_LEN);
            return Ok(line);
        }
    }
}

/// Read a length/count line and parse it as a non-negative decimal integer
fn read_length<R: BufRead>(reader: &mut R) -> Result<usize, DecodeError> {
    let line = read_until_crlf(reader)?;
    parse_length(&line)
}

fn parse_length(line: &[u8]) -> Result<usize, DecodeError> {
    let malformed = || DecodeError::MalformedLength(String::from_utf8_lossy(line).into_owned());

    if line.is_empty() || !line.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    // Digits only, so this is valid UTF-8; overflow is the remaining failure.
    std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(malformed)
}
