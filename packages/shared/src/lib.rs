//! Utilities shared by the Deai server binary and library.

pub mod logger;
pub mod time;
