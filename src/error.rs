//! Error types for respkv
//!
//! `DecodeError` covers everything the RESP decoder can fail with.
//! `KvError` is the unified error for the rest of the crate.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Errors produced while decoding a RESP value from a stream
#[derive(Debug, Error)]
pub enum DecodeError {
    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    /// Underlying read failed. A truncated payload or a missing CRLF shows up
    /// here as `UnexpectedEof`.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("unknown type tag: 0x{0:02x}")]
    UnknownTypeTag(u8),

    #[error("malformed length: {0:?}")]
    MalformedLength(String),

    // -------------------------------------------------------------------------
    // Limit Errors
    // -------------------------------------------------------------------------
    #[error("array nesting exceeds maximum depth of {max}")]
    NestingTooDeep { max: usize },

    #[error("bulk string of {len} bytes exceeds maximum of {max}")]
    BulkTooLarge { len: usize, max: usize },
}

impl DecodeError {
    /// True when the stream ended before a value was complete
    pub fn is_eof(&self) -> bool {
        matches!(self, DecodeError::Stream(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Unified error type for respkv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Decode(#[from] DecodeError),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
