//! Value Tests
//!
//! Tests for the accessors and rendering of decoded values.

use std::io::Cursor;

use bytes::Bytes;
use respkv::protocol::{decode, Value, ValueKind};

fn decode_bytes(input: &[u8]) -> Value {
    decode(&mut Cursor::new(input)).unwrap()
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn test_as_string_on_string_variants() {
    assert_eq!(decode_bytes(b"+PONG\r\n").as_string(), "PONG");
    assert_eq!(decode_bytes(b"$5\r\nHELLO\r\n").as_string(), "HELLO");
}

#[test]
fn test_as_string_on_array_is_empty() {
    assert_eq!(decode_bytes(b"*1\r\n+a\r\n").as_string(), "");
}

#[test]
fn test_as_string_is_lossy() {
    let value = decode_bytes(b"$3\r\na\xffb\r\n");
    assert_eq!(value.as_string(), "a\u{fffd}b");
}

#[test]
fn test_as_array_on_array() {
    let value = decode_bytes(b"*2\r\n+a\r\n+b\r\n");
    let elements = value.as_array();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].as_string(), "a");
    assert_eq!(elements[1].as_string(), "b");
}

#[test]
fn test_as_array_on_strings_is_empty() {
    assert!(decode_bytes(b"+OK\r\n").as_array().is_empty());
    assert!(decode_bytes(b"$2\r\nhi\r\n").as_array().is_empty());
}

#[test]
fn test_as_bytes() {
    assert_eq!(decode_bytes(b"$2\r\nhi\r\n").as_bytes(), Some(&b"hi"[..]));
    assert_eq!(decode_bytes(b"*0\r\n").as_bytes(), None);
}

#[test]
fn test_kind_and_type_tag() {
    let simple = decode_bytes(b"+a\r\n");
    let bulk = decode_bytes(b"$1\r\na\r\n");
    let array = decode_bytes(b"*0\r\n");

    assert_eq!(simple.kind(), ValueKind::SimpleString);
    assert_eq!(bulk.kind(), ValueKind::BulkString);
    assert_eq!(array.kind(), ValueKind::Array);

    assert_eq!(simple.type_tag(), b'+');
    assert_eq!(bulk.type_tag(), b'$');
    assert_eq!(array.type_tag(), b'*');
}

#[test]
fn test_decoded_values_are_independent() {
    let mut cursor = Cursor::new(&b"+same\r\n+same\r\n"[..]);
    let first = decode(&mut cursor).unwrap();
    let second = decode(&mut cursor).unwrap();

    assert_eq!(first, second);
    drop(first);
    assert_eq!(second.as_string(), "same");
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_strings() {
    assert_eq!(decode_bytes(b"+PONG\r\n").to_string(), "PONG");
    assert_eq!(decode_bytes(b"$5\r\nHELLO\r\n").to_string(), "\"HELLO\"");
}

#[test]
fn test_display_empty_array() {
    assert_eq!(decode_bytes(b"*0\r\n").to_string(), "(empty array)");
}

#[test]
fn test_display_flat_array() {
    let value = decode_bytes(b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
    assert_eq!(value.to_string(), "1) \"GET\"\n2) \"key\"");
}

#[test]
fn test_display_nested_array() {
    let value = Value::Array(vec![
        Value::SimpleString(Bytes::from_static(b"a")),
        Value::Array(vec![
            Value::BulkString(Bytes::from_static(b"b")),
            Value::BulkString(Bytes::from_static(b"c")),
        ]),
    ]);
    assert_eq!(value.to_string(), "1) a\n2) 1) \"b\"\n   2) \"c\"");
}

#[test]
fn test_display_pads_labels_for_wide_arrays() {
    let mut wire = b"*10\r\n".to_vec();
    for _ in 0..10 {
        wire.extend_from_slice(b"+x\r\n");
    }
    let rendered = decode_bytes(&wire).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], " 1) x");
    assert_eq!(lines[9], "10) x");
}
