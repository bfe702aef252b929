//! Value definitions
//!
//! The typed tree produced by the decoder.

use std::fmt;

use bytes::Bytes;

/// Type tag for simple strings
pub const SIMPLE_STRING_TAG: u8 = b'+';

/// Type tag for bulk strings
pub const BULK_STRING_TAG: u8 = b'$';

/// Type tag for arrays
pub const ARRAY_TAG: u8 = b'*';

/// Value kinds, one per wire type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueKind {
    SimpleString = SIMPLE_STRING_TAG,
    BulkString = BULK_STRING_TAG,
    Array = ARRAY_TAG,
}

/// A decoded RESP value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Line-terminated payload, no length prefix
    SimpleString(Bytes),

    /// Length-prefixed payload, may contain any bytes
    BulkString(Bytes),

    /// Count-prefixed sequence of values
    Array(Vec<Value>),
}

impl Value {
    /// Get the value kind
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::SimpleString(_) => ValueKind::SimpleString,
            Value::BulkString(_) => ValueKind::BulkString,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Get the wire type tag byte
    pub fn type_tag(&self) -> u8 {
        self.kind() as u8
    }

    /// Payload as text for string variants, empty string otherwise.
    ///
    /// Invalid UTF-8 is replaced, not reported.
    pub fn as_string(&self) -> String {
        match self.as_bytes() {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => String::new(),
        }
    }

    /// Elements for arrays, empty slice otherwise
    pub fn as_array(&self) -> &[Value] {
        match self {
            Value::Array(elements) => elements.as_slice(),
            _ => &[],
        }
    }

    /// Raw payload for string variants
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::SimpleString(bytes) | Value::BulkString(bytes) => Some(bytes.as_ref()),
            Value::Array(_) => None,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Value::SimpleString(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::BulkString(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            Value::Array(elements) if elements.is_empty() => write!(f, "(empty array)"),
            Value::Array(elements) => {
                let width = elements.len().to_string().len();
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        write!(f, "{:indent$}", "")?;
                    }
                    let label = format!("{:>width$}) ", i + 1);
                    write!(f, "{label}")?;
                    element.fmt_indented(f, indent + label.len())?;
                }
                Ok(())
            }
        }
    }
}

/// Renders values the way redis-cli does: simple strings bare, bulk strings
/// quoted, arrays as numbered lines.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
