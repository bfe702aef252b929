//! respkv Server Binary
//!
//! Starts the PONG server.

use clap::Parser;
use respkv::network::Server;
use respkv::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// respkv Server
#[derive(Parser, Debug)]
#[command(name = "respkv-server")]
#[command(about = "RESP server that answers every request with PONG")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:6379")]
    listen: String,

    /// Read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "5000")]
    write_timeout_ms: u64,

    /// Maximum array nesting depth accepted from clients
    #[arg(long, default_value_t = respkv::protocol::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum bulk string length in MB
    #[arg(long, default_value = "512")]
    max_bulk_mb: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,respkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("respkv server v{}", respkv::VERSION);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .max_depth(args.max_depth)
        .max_bulk_len(args.max_bulk_mb.saturating_mul(1024 * 1024))
        .build();

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
