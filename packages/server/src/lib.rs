//! Deai matchmaking server.
//!
//! Pairs anonymous participants at random for one-to-one chat sessions and
//! relays chat, typing and WebRTC signaling events between the two members
//! of each session.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
