//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Lobby statistics snapshot (`GET /api/stats`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyStatsDto {
    pub connected_participants: usize,
    pub waiting_participants: usize,
    pub active_sessions: usize,
    /// RFC 3339 (JST)
    pub generated_at: String,
}

/// Participant detail (`GET /api/participants/{participant_id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetailDto {
    pub participant_id: String,
    /// RFC 3339 (JST)
    pub joined_at: String,
    /// `idle`, `waiting` or `paired`
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}
