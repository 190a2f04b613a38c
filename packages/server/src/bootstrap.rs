//! Composition root: builds the dependency graph behind the server.

use std::{collections::HashMap, sync::Arc};

use deai_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::{
    config::ServerConfig,
    domain::{Lobby, LobbyRepository, MessagePusher},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryLobbyRepository},
    ui::{Server, state::AppState},
    usecase::{
        CancelSearchUseCase, ConnectParticipantUseCase, DisconnectParticipantUseCase,
        EndChatUseCase, FindPartnerUseCase, GetLobbyStatsUseCase, GetParticipantUseCase,
        HeartbeatUseCase, RelayEventUseCase,
    },
};

/// Build the shared state with the given lobby and clock.
///
/// Initialize dependencies in order:
/// 1. Repository
/// 2. MessagePusher
/// 3. UseCases
pub fn build_app_state_with(
    config: &ServerConfig,
    lobby: Lobby,
    clock: Arc<dyn Clock>,
) -> Arc<AppState> {
    // 1. Create Repository (in-memory lobby)
    let repository: Arc<dyn LobbyRepository> =
        Arc::new(InMemoryLobbyRepository::new(Arc::new(Mutex::new(lobby))));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher: Arc<dyn MessagePusher> =
        Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(HashMap::new()))));

    // 3. Create UseCases
    Arc::new(AppState {
        connect_participant_usecase: Arc::new(ConnectParticipantUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            clock.clone(),
        )),
        disconnect_participant_usecase: Arc::new(DisconnectParticipantUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        find_partner_usecase: Arc::new(FindPartnerUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        cancel_search_usecase: Arc::new(CancelSearchUseCase::new(repository.clone())),
        end_chat_usecase: Arc::new(EndChatUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        relay_event_usecase: Arc::new(RelayEventUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            clock,
        )),
        heartbeat_usecase: Arc::new(HeartbeatUseCase::new(message_pusher)),
        get_lobby_stats_usecase: Arc::new(GetLobbyStatsUseCase::new(repository.clone())),
        get_participant_usecase: Arc::new(GetParticipantUseCase::new(repository)),
        max_message_length: config.max_message_length,
    })
}

/// Build the production server: entropy-seeded lobby and system clock.
pub fn build_server(config: &ServerConfig) -> Server {
    let app_state = build_app_state_with(config, Lobby::new(), Arc::new(SystemClock));
    Server::new(app_state, config.stats_interval())
}
