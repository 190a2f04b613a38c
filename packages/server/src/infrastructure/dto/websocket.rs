//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `"type"` with kebab-case event
//! names and camelCase fields.

use serde::{Deserialize, Serialize};

/// Events sent by a participant to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    FindPartner,
    CancelSearch,
    EndChat,
    SendMessage {
        #[serde(alias = "message")]
        text: String,
    },
    TypingStart,
    TypingStop,
    StartVideoCall,
    AcceptVideoCall,
    RejectVideoCall,
    WebrtcOffer {
        payload: serde_json::Value,
    },
    WebrtcAnswer {
        payload: serde_json::Value,
    },
    WebrtcIceCandidate {
        payload: serde_json::Value,
    },
    Ping,
}

/// Events sent by the server to a participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    Connected {
        participant_id: String,
    },
    WaitingForPartner,
    PartnerFound {
        partner_id: String,
        session_token: String,
    },
    PartnerDisconnected,
    ReceiveMessage {
        text: String,
        /// Server-assigned relay time (Unix epoch millis)
        timestamp: i64,
        sender_id: String,
    },
    PartnerTypingStart,
    PartnerTypingStop,
    IncomingVideoCall {
        caller_id: String,
    },
    VideoCallAccepted {
        accepter_id: String,
    },
    VideoCallRejected,
    WebrtcOffer {
        sender_id: String,
        payload: serde_json::Value,
    },
    WebrtcAnswer {
        sender_id: String,
        payload: serde_json::Value,
    },
    WebrtcIceCandidate {
        sender_id: String,
        payload: serde_json::Value,
    },
    Pong,
}
