//! Deai matchmaking server.
//!
//! Pairs anonymous participants at random and relays chat and WebRTC
//! signaling events between the two members of each session.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin deai-server
//! cargo run --bin deai-server -- --host 0.0.0.0 --port 3000
//! ```

use clap::Parser;
use deai_server::{bootstrap::build_server, config::ServerConfig};
use deai_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_BIN_NAME"),
        &config.log_level,
    );

    tracing::info!(
        stats_interval_secs = config.stats_interval_secs,
        max_message_length = config.max_message_length,
        "starting deai-server"
    );

    let server = build_server(&config);
    if let Err(e) = server.run(config.host.clone(), config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
