//! Protocol Module
//!
//! Decoding side of RESP, the Redis serialization protocol.
//!
//! ## Supported Types
//! - `+` Simple string: `+OK\r\n`
//! - `$` Bulk string:   `$5\r\nhello\r\n`
//! - `*` Array:         `*2\r\n+a\r\n$1\r\nb\r\n` (elements may nest)
//!
//! Lengths and counts are non-negative decimal integers. There is no null
//! value: `$-1` and `*-1` are malformed. Encoding is not provided.

mod decoder;
mod value;

pub use decoder::{decode, read_until_crlf, Decoder, DEFAULT_MAX_BULK_LEN, DEFAULT_MAX_DEPTH};
pub use value::{Value, ValueKind, ARRAY_TAG, BULK_STRING_TAG, SIMPLE_STRING_TAG};
