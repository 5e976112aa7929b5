//! lineecho Server Binary
//!
//! Starts the TCP echo server.

use clap::Parser;
use lineecho::config::{DEFAULT_HOST, DEFAULT_PORT};
use lineecho::{Config, ConcurrencyMode, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// lineecho Server
#[derive(Parser, Debug)]
#[command(name = "lineecho-server")]
#[command(about = "Line-oriented TCP echo server")]
#[command(version)]
struct Args {
    /// Host or IP address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// TCP port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Handle each client on its own thread instead of one at a time
    #[arg(short, long)]
    concurrent: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lineecho=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    let mode = if args.concurrent {
        ConcurrencyMode::Concurrent
    } else {
        ConcurrencyMode::Serial
    };

    tracing::info!("lineecho Server v{}", lineecho::VERSION);

    // Build config from args
    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .mode(mode)
        .build();

    let server = match Server::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    match server.run() {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!("Listener failed: {}", e);
            std::process::exit(1);
        }
    }
}
