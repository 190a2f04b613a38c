//! Domain layer: value objects, entities, the lobby aggregate and the
//! interfaces the outer layers implement.

pub mod entity;
pub mod error;
pub mod lobby;
pub mod notification;
pub mod pusher;
pub mod relay;
pub mod repository;
pub mod value_object;

pub use entity::Participant;
pub use error::{MessagePushError, PairingError, RepositoryError, ValueObjectError};
pub use lobby::{DisconnectOutcome, FindPartnerOutcome, Lobby, LobbyStats, ParticipantState};
pub use notification::Notification;
pub use pusher::{MessagePusher, PusherChannel};
pub use relay::RelayEvent;
pub use repository::{LobbyRepository, LobbyTransaction};
pub use value_object::{
    MessageContent, ParticipantId, SessionToken, SignalingPayload, Timestamp,
};

#[cfg(test)]
pub use pusher::MockMessagePusher;
