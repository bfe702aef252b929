//! # respkv
//!
//! A streaming decoder for RESP, the Redis serialization protocol, plus the
//! small pieces needed to put it on a socket:
//! - Blocking, pull-based decoding from any `BufRead`
//! - Simple strings, bulk strings and arbitrarily nested arrays
//! - A single-threaded TCP server that answers every request with PONG
//! - An in-memory string map
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                             │
//! │               (one connection at a time)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ BufReader<TcpStream>
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RESP Decoder                             │
//! │            bytes in ──► Value tree out                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use respkv::protocol::{decode, Value};
//!
//! let mut stream = Cursor::new(&b"*2\r\n+OK\r\n$2\r\nhi\r\n"[..]);
//! let value = decode(&mut stream).unwrap();
//!
//! assert_eq!(value.as_array().len(), 2);
//! assert_eq!(value.as_array()[1].as_string(), "hi");
//! assert!(matches!(value, Value::Array(_)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod network;
pub mod protocol;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{DecodeError, KvError, Result};
pub use protocol::{decode, Decoder, Value};
pub use store::DataStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
