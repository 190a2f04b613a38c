//! UseCase: 探索キャンセル処理
//!
//! 待機キューから外すだけ。待機中でなければ何もしない（冪等）。

use std::sync::Arc;

use crate::domain::{LobbyRepository, ParticipantId};

/// 探索キャンセルのユースケース
pub struct CancelSearchUseCase {
    repository: Arc<dyn LobbyRepository>,
}

impl CancelSearchUseCase {
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// 探索キャンセルを実行
    ///
    /// 待機キューから外れた場合は `true` を返す。
    pub async fn execute(&self, participant_id: &ParticipantId) -> bool {
        let cancelled = self.repository.begin().await.cancel_search(participant_id);
        if cancelled {
            tracing::info!(participant = %participant_id, "search cancelled");
        } else {
            tracing::debug!(participant = %participant_id, "cancel-search while not waiting ignored");
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Lobby, ParticipantState, Timestamp},
        infrastructure::repository::InMemoryLobbyRepository,
    };
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn test_cancel_search_twice_equals_once() {
        // テスト項目: cancel-search を 2 回呼んでも 1 回と同じ結果になる
        // given (前提条件):
        let repository = Arc::new(InMemoryLobbyRepository::new(Arc::new(Mutex::new(
            Lobby::with_seed(1),
        ))));
        let alice = ParticipantId::new("alice".to_string()).unwrap();
        repository.begin().await.connect(alice.clone(), Timestamp::new(1));
        repository.begin().await.find_partner(&alice).unwrap();
        let usecase = CancelSearchUseCase::new(repository.clone());

        // when (操作):
        let first = usecase.execute(&alice).await;
        let second = usecase.execute(&alice).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        let (_, state) = repository.begin().await.find_participant(&alice).unwrap();
        assert_eq!(state, ParticipantState::Idle);
        assert_eq!(repository.begin().await.stats().waiting, 0);
    }
}
