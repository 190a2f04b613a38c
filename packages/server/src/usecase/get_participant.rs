//! UseCase: 参加者の状態取得（デバッグ・監視用、読み取りのみ）

use std::sync::Arc;

use crate::domain::{LobbyRepository, Participant, ParticipantId, ParticipantState};

use super::error::LookupError;

pub struct GetParticipantUseCase {
    repository: Arc<dyn LobbyRepository>,
}

impl GetParticipantUseCase {
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// 文字列の ID から参加者と現在の状態を取得する
    pub async fn execute(
        &self,
        participant_id: String,
    ) -> Result<(Participant, ParticipantState), LookupError> {
        let participant_id = ParticipantId::try_from(participant_id)?;
        self.repository
            .begin()
            .await
            .find_participant(&participant_id)
            .ok_or_else(|| LookupError::ParticipantNotFound(participant_id.into_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Lobby, Timestamp, ValueObjectError},
        infrastructure::repository::InMemoryLobbyRepository,
    };
    use tokio::sync::Mutex;

    async fn create_usecase() -> GetParticipantUseCase {
        let repository = Arc::new(InMemoryLobbyRepository::new(Arc::new(Mutex::new(
            Lobby::with_seed(1),
        ))));
        repository.begin().await.connect(
                ParticipantId::new("alice".to_string()).unwrap(),
                Timestamp::new(10),
            );
        GetParticipantUseCase::new(repository)
    }

    #[tokio::test]
    async fn test_get_participant_found() {
        // テスト項目: 接続中の参加者は状態付きで取得できる
        // given (前提条件):
        let usecase = create_usecase().await;

        // when (操作):
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果):
        let (participant, state) = result.unwrap();
        assert_eq!(participant.joined_at, Timestamp::new(10));
        assert_eq!(state, ParticipantState::Idle);
    }

    #[tokio::test]
    async fn test_get_participant_not_found() {
        // テスト項目: 未登録の参加者は NotFound になる
        // given (前提条件):
        let usecase = create_usecase().await;

        // when (操作):
        let result = usecase.execute("bob".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(LookupError::ParticipantNotFound("bob".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_participant_invalid_id() {
        // テスト項目: 不正な ID は InvalidParticipantId になる
        // given (前提条件):
        let usecase = create_usecase().await;

        // when (操作):
        let result = usecase.execute(" ".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(LookupError::InvalidParticipantId(
                ValueObjectError::EmptyParticipantId
            ))
        );
    }
}
