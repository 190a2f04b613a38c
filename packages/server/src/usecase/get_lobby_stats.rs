//! UseCase: ロビー統計の取得

use std::sync::Arc;

use crate::domain::{LobbyRepository, LobbyStats};

pub struct GetLobbyStatsUseCase {
    repository: Arc<dyn LobbyRepository>,
}

impl GetLobbyStatsUseCase {
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> LobbyStats {
        self.repository.begin().await.stats()
    }
}
