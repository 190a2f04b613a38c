//! Periodic lobby statistics logging.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::usecase::GetLobbyStatsUseCase;

/// Spawns a task that logs lobby counts every `period`.
///
/// The first tick fires immediately, which is skipped so the first line
/// appears one full period after startup.
pub fn spawn_stats_reporter(
    get_lobby_stats_usecase: Arc<GetLobbyStatsUseCase>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;

        loop {
            interval.tick().await;
            let stats = get_lobby_stats_usecase.execute().await;
            tracing::info!(
                connected = stats.connected,
                waiting = stats.waiting,
                active_sessions = stats.active_sessions,
                "lobby stats"
            );
        }
    })
}
