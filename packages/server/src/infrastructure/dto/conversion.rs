//! Conversion logic between DTOs and domain models.

use deai_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{
    LobbyStats, MessageContent, Notification, Participant, ParticipantState, RelayEvent,
    SignalingPayload, Timestamp, ValueObjectError,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// WebSocket DTO → Domain
// ========================================

/// Inbound event classified for dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum InboundCommand {
    FindPartner,
    CancelSearch,
    EndChat,
    Ping,
    Relay(RelayEvent),
}

impl dto::ClientEvent {
    /// Validate and convert into a domain command.
    ///
    /// Chat text is checked against `max_message_length` (characters).
    pub fn into_command(self, max_message_length: usize) -> Result<InboundCommand, ValueObjectError> {
        let command = match self {
            Self::FindPartner => InboundCommand::FindPartner,
            Self::CancelSearch => InboundCommand::CancelSearch,
            Self::EndChat => InboundCommand::EndChat,
            Self::Ping => InboundCommand::Ping,
            Self::SendMessage { text } => InboundCommand::Relay(RelayEvent::Message(
                MessageContent::with_limit(text, max_message_length)?,
            )),
            Self::TypingStart => InboundCommand::Relay(RelayEvent::TypingStart),
            Self::TypingStop => InboundCommand::Relay(RelayEvent::TypingStop),
            Self::StartVideoCall => InboundCommand::Relay(RelayEvent::CallInvite),
            Self::AcceptVideoCall => InboundCommand::Relay(RelayEvent::CallAccept),
            Self::RejectVideoCall => InboundCommand::Relay(RelayEvent::CallReject),
            Self::WebrtcOffer { payload } => {
                InboundCommand::Relay(RelayEvent::Offer(SignalingPayload::new(payload)))
            }
            Self::WebrtcAnswer { payload } => {
                InboundCommand::Relay(RelayEvent::Answer(SignalingPayload::new(payload)))
            }
            Self::WebrtcIceCandidate { payload } => {
                InboundCommand::Relay(RelayEvent::IceCandidate(SignalingPayload::new(payload)))
            }
        };
        Ok(command)
    }
}

// ========================================
// Domain → WebSocket DTO
// ========================================

impl From<Notification> for dto::ServerEvent {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::Connected { participant_id } => Self::Connected {
                participant_id: participant_id.into_string(),
            },
            Notification::WaitingForPartner => Self::WaitingForPartner,
            Notification::PartnerFound {
                partner_id,
                session_token,
            } => Self::PartnerFound {
                partner_id: partner_id.into_string(),
                session_token: session_token.into_string(),
            },
            Notification::PartnerDisconnected => Self::PartnerDisconnected,
            Notification::ReceiveMessage {
                content,
                timestamp,
                sender_id,
            } => Self::ReceiveMessage {
                text: content.into_string(),
                timestamp: timestamp.value(),
                sender_id: sender_id.into_string(),
            },
            Notification::PartnerTypingStart => Self::PartnerTypingStart,
            Notification::PartnerTypingStop => Self::PartnerTypingStop,
            Notification::IncomingVideoCall { caller_id } => Self::IncomingVideoCall {
                caller_id: caller_id.into_string(),
            },
            Notification::VideoCallAccepted { accepter_id } => Self::VideoCallAccepted {
                accepter_id: accepter_id.into_string(),
            },
            Notification::VideoCallRejected => Self::VideoCallRejected,
            Notification::WebRtcOffer { sender_id, payload } => Self::WebrtcOffer {
                sender_id: sender_id.into_string(),
                payload: payload.into_value(),
            },
            Notification::WebRtcAnswer { sender_id, payload } => Self::WebrtcAnswer {
                sender_id: sender_id.into_string(),
                payload: payload.into_value(),
            },
            Notification::WebRtcIceCandidate { sender_id, payload } => Self::WebrtcIceCandidate {
                sender_id: sender_id.into_string(),
                payload: payload.into_value(),
            },
            Notification::Pong => Self::Pong,
        }
    }
}

// ========================================
// Domain → HTTP DTO
// ========================================

impl http::LobbyStatsDto {
    pub fn from_domain(stats: LobbyStats, generated_at: Timestamp) -> Self {
        Self {
            connected_participants: stats.connected,
            waiting_participants: stats.waiting,
            active_sessions: stats.active_sessions,
            generated_at: timestamp_to_jst_rfc3339(generated_at.value()),
        }
    }
}

impl From<(Participant, ParticipantState)> for http::ParticipantDetailDto {
    fn from((participant, state): (Participant, ParticipantState)) -> Self {
        let (state, partner_id) = match state {
            ParticipantState::Unregistered => ("unregistered", None),
            ParticipantState::Idle => ("idle", None),
            ParticipantState::Waiting => ("waiting", None),
            ParticipantState::Paired(partner) => ("paired", Some(partner.into_string())),
        };
        Self {
            participant_id: participant.id.into_string(),
            joined_at: timestamp_to_jst_rfc3339(participant.joined_at.value()),
            state: state.to_string(),
            partner_id,
        }
    }
}
