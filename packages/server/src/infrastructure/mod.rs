//! Infrastructure layer: concrete implementations of the domain interfaces
//! and wire-format DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
