//! Matchmaking server: HTTP/WebSocket surface over the use cases.

mod handler;
mod server;
mod signal;
mod stats;
pub mod state;

pub use server::Server;
pub use signal::shutdown_signal;
