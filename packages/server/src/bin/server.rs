//! Collaborative interview room relay server.
//!
//! Serves the room provisioning API and the WebSocket session endpoint.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin codepair-server
//! cargo run --bin codepair-server -- --host 0.0.0.0 --port 3001 --room-ttl-secs 3600
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use codepair_server::{
    config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_URL, ServerConfig},
    ui::Server,
};
use codepair_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "codepair-server")]
#[command(about = "Real-time collaborative interview room relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Frontend base URL used to build shareable room links
    #[arg(long, env = "PUBLIC_URL", default_value = DEFAULT_PUBLIC_URL)]
    public_url: String,

    /// Reclaim rooms that stay empty for this many seconds (disabled when omitted)
    #[arg(long, env = "ROOM_TTL_SECS")]
    room_ttl_secs: Option<u64>,

    /// Interval between vacant-room sweeps, in seconds (at least 1)
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    sweep_interval_secs: u64,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            public_url: args.public_url,
            room_ttl: args.room_ttl_secs.map(Duration::from_secs),
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = ServerConfig::from(args);
    if let Some(ttl) = config.room_ttl {
        tracing::info!("Vacant rooms are reclaimed after {}s", ttl.as_secs());
    }

    let server = Server::from_config(&config, Arc::new(SystemClock));
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
