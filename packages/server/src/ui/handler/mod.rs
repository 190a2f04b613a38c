//! axum handlers, split by protocol.

mod http;
mod websocket;

pub use http::{get_participant, get_stats, health_check};
pub use websocket::websocket_handler;
