//! respkv CLI Client
//!
//! Pings a server or decodes a captured RESP byte stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use respkv::{Decoder, Result};

/// Raw PING request as a one-element array of bulk strings
const PING_REQUEST: &[u8] = b"*1\r\n$4\r\nPING\r\n";

/// respkv CLI
#[derive(Parser, Debug)]
#[command(name = "respkv-cli")]
#[command(about = "CLI for the respkv decoder and server")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ping the server and print its reply
    Ping {
        /// Server address
        #[arg(short, long, default_value = "127.0.0.1:6379")]
        server: String,
    },

    /// Decode every value in a RESP capture and print it
    Decode {
        /// Capture file (reads stdin when omitted)
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Ping { server } => ping(&server),
        Commands::Decode { path: Some(path) } => match File::open(&path) {
            Ok(file) => decode_all(&mut BufReader::new(file)),
            Err(e) => Err(e.into()),
        },
        Commands::Decode { path: None } => decode_all(&mut io::stdin().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("(error) {}", e);
            ExitCode::FAILURE
        }
    }
}

fn ping(server: &str) -> Result<()> {
    let mut stream = TcpStream::connect(server)?;
    stream.write_all(PING_REQUEST)?;
    stream.flush()?;

    let reply = Decoder::default().decode(&mut BufReader::new(stream))?;
    println!("{}", reply);
    Ok(())
}

/// Decode values until the input ends cleanly between values
fn decode_all<R: BufRead>(reader: &mut R) -> Result<()> {
    let decoder = Decoder::default();

    while !reader.fill_buf()?.is_empty() {
        let value = decoder.decode(reader)?;
        println!("{}", value);
    }

    Ok(())
}
