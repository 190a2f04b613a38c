//! Shared application state handed to every axum handler.

use std::sync::Arc;

use crate::usecase::{
    CancelSearchUseCase, ConnectParticipantUseCase, DisconnectParticipantUseCase, EndChatUseCase,
    FindPartnerUseCase, GetLobbyStatsUseCase, GetParticipantUseCase, HeartbeatUseCase,
    RelayEventUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectParticipantUseCase（参加者接続のユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（参加者切断のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// FindPartnerUseCase（相手探しのユースケース）
    pub find_partner_usecase: Arc<FindPartnerUseCase>,
    /// CancelSearchUseCase（相手探しキャンセルのユースケース）
    pub cancel_search_usecase: Arc<CancelSearchUseCase>,
    /// EndChatUseCase（チャット終了のユースケース）
    pub end_chat_usecase: Arc<EndChatUseCase>,
    /// RelayEventUseCase（相手へのイベント中継のユースケース）
    pub relay_event_usecase: Arc<RelayEventUseCase>,
    /// HeartbeatUseCase（ping への応答）
    pub heartbeat_usecase: Arc<HeartbeatUseCase>,
    /// GetLobbyStatsUseCase（統計取得のユースケース）
    pub get_lobby_stats_usecase: Arc<GetLobbyStatsUseCase>,
    /// GetParticipantUseCase（参加者詳細取得のユースケース）
    pub get_participant_usecase: Arc<GetParticipantUseCase>,
    /// Maximum chat message length in characters
    pub max_message_length: usize,
}
