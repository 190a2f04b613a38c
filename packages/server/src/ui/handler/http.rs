//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use deai_shared::time::unix_timestamp_millis;

use crate::{
    domain::Timestamp,
    infrastructure::dto::http::{LobbyStatsDto, ParticipantDetailDto},
    ui::state::AppState,
    usecase::LookupError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current lobby counts
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<LobbyStatsDto> {
    let stats = state.get_lobby_stats_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(LobbyStatsDto::from_domain(
        stats,
        Timestamp::new(unix_timestamp_millis()),
    ))
}

/// Get participant detail by ID
pub async fn get_participant(
    State(state): State<Arc<AppState>>,
    Path(participant_id): Path<String>,
) -> Result<Json<ParticipantDetailDto>, StatusCode> {
    match state.get_participant_usecase.execute(participant_id).await {
        // Domain Model から DTO への変換
        Ok(found) => Ok(Json(ParticipantDetailDto::from(found))),
        Err(LookupError::InvalidParticipantId(e)) => {
            tracing::debug!("Rejected participant lookup: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(LookupError::ParticipantNotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}
