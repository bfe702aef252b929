//! TCP Server
//!
//! Accepts connections and serves them one at a time on the calling thread.

use std::io::ErrorKind;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::Connection;
use crate::config::Config;
use crate::error::{KvError, Result};

/// How long the accept loop sleeps when no client is waiting
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP server answering every request with PONG
pub struct Server {
    config: Config,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Bind the listen address from the config
    pub fn bind(config: Config) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            KvError::Network(format!("failed to bind {}: {}", config.listen_addr, e))
        })?;

        // Non-blocking accept so the loop can observe shutdown
        listener.set_nonblocking(true)?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Listening on {}", local_addr);

        Ok(Self {
            config,
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Flag that stops the accept loop when set
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Start the server (blocking until shutdown)
    ///
    /// The shutdown flag is checked between connections, so a connected
    /// client is served until it goes away.
    pub fn run(&self) -> Result<()> {
        let decoder = self.config.decoder();

        while !self.shutdown.load(Ordering::Relaxed) {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                    continue;
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            // Accepted sockets may inherit non-blocking mode
            stream.set_nonblocking(false)?;

            let mut connection = match Connection::new(stream, decoder) {
                Ok(connection) => connection,
                Err(e) => {
                    tracing::warn!("Failed to set up connection from {}: {}", peer, e);
                    continue;
                }
            };
            connection.set_timeouts(self.config.read_timeout_ms, self.config.write_timeout_ms)?;

            if let Err(e) = connection.handle() {
                tracing::debug!("Connection from {} ended with error: {}", peer, e);
            }
        }

        tracing::info!("Server on {} shut down", self.local_addr);
        Ok(())
    }

    /// Signal the server to stop accepting connections
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
