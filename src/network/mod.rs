//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single thread accepts and serves connections in turn
//! - Every decoded request gets the fixed `+PONG` reply
//! - Undecodable input gets an `-ERR` line and the connection is closed

mod connection;
mod server;

pub use connection::{Connection, PONG_REPLY};
pub use server::Server;
