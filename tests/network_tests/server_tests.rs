//! Server Tests
//!
//! Loopback tests for the PONG server.

use std::io::{BufReader, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use respkv::network::{Server, PONG_REPLY};
use respkv::protocol::{decode, Value};
use respkv::{Config, KvError};

fn start_server(config: Config) -> (std::net::SocketAddr, impl FnOnce()) {
    let server = Server::bind(config).unwrap();
    let addr = server.local_addr();
    let shutdown = server.shutdown_handle();

    let handle = thread::spawn(move || server.run());

    let stop = move || {
        shutdown.store(true, Ordering::Relaxed);
        handle.join().unwrap().unwrap();
    };
    (addr, stop)
}

fn loopback_config() -> Config {
    Config::builder()
        .listen_addr("127.0.0.1:0")
        .read_timeout_ms(2000)
        .build()
}

fn connect(addr: std::net::SocketAddr) -> TcpStream {
    let stream = TcpStream::connect(addr).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
}

#[test]
fn test_ping_gets_pong() {
    let (addr, stop) = start_server(loopback_config());

    let mut stream = connect(addr);
    stream.write_all(b"*1\r\n$4\r\nPING\r\n").unwrap();

    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let reply = decode(&mut reader).unwrap();
    assert_eq!(reply, Value::SimpleString("PONG".into()));

    stream.shutdown(Shutdown::Both).unwrap();
    stop();
}

#[test]
fn test_one_pong_per_request() {
    let (addr, stop) = start_server(loopback_config());

    let mut stream = connect(addr);
    // Three requests in one write
    stream
        .write_all(b"*1\r\n$4\r\nPING\r\n+PING\r\n*2\r\n$4\r\nECHO\r\n$2\r\nhi\r\n")
        .unwrap();

    let mut replies = vec![0u8; PONG_REPLY.len() * 3];
    stream.read_exact(&mut replies).unwrap();
    assert_eq!(replies, PONG_REPLY.repeat(3));

    stream.shutdown(Shutdown::Both).unwrap();
    stop();
}

#[test]
fn test_protocol_error_closes_connection() {
    let (addr, stop) = start_server(loopback_config());

    let mut stream = connect(addr);
    stream.write_all(b"$abc\r\n").unwrap();

    let mut reply = String::new();
    stream.read_to_string(&mut reply).unwrap();
    assert!(reply.starts_with("-ERR Protocol error"), "got {:?}", reply);
    assert!(reply.ends_with("\r\n"));

    stop();
}

#[test]
fn test_serves_next_client_after_disconnect() {
    let (addr, stop) = start_server(loopback_config());

    for _ in 0..2 {
        let mut stream = connect(addr);
        stream.write_all(b"+PING\r\n").unwrap();

        let mut reply = vec![0u8; PONG_REPLY.len()];
        stream.read_exact(&mut reply).unwrap();
        assert_eq!(reply, PONG_REPLY);

        stream.shutdown(Shutdown::Both).unwrap();
    }

    stop();
}

#[test]
fn test_bind_rejects_invalid_config() {
    let config = Config::builder()
        .listen_addr("127.0.0.1:0")
        .max_depth(0)
        .build();
    assert!(matches!(Server::bind(config), Err(KvError::Config(_))));
}

#[test]
fn test_bind_reports_unusable_address() {
    let config = Config::builder().listen_addr("not an address").build();
    assert!(matches!(Server::bind(config), Err(KvError::Network(_))));
}
