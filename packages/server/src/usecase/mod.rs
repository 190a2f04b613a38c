//! UseCase layer: one use case per inbound event family.
//!
//! Use cases mutate lobby state only through a `LobbyTransaction` (one lock
//! acquisition per transition) and enqueue the resulting notifications before
//! releasing it. Each participant therefore sees notifications in transition
//! order. Enqueueing is an unbounded channel send, so a slow participant never
//! stalls matchmaking.

pub mod cancel_search;
pub mod connect_participant;
pub mod disconnect_participant;
pub mod end_chat;
pub mod error;
pub mod find_partner;
pub mod get_lobby_stats;
pub mod get_participant;
pub mod heartbeat;
mod notify;
pub mod relay_event;
#[cfg(test)]
mod test_support;

pub use cancel_search::CancelSearchUseCase;
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use end_chat::EndChatUseCase;
pub use error::{FindPartnerError, LookupError};
pub use find_partner::FindPartnerUseCase;
pub use get_lobby_stats::GetLobbyStatsUseCase;
pub use get_participant::GetParticipantUseCase;
pub use heartbeat::HeartbeatUseCase;
pub use relay_event::{RelayEventUseCase, RelayOutcome};
