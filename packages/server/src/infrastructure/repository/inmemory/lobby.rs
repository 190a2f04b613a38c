//! InMemory Lobby Repository 実装
//!
//! ドメイン層が定義する LobbyRepository trait の具体的な実装。
//! Lobby 集約全体を 1 つの Mutex で保護し、これを唯一の排他境界とする。
//!
//! `begin` がロックを取得し、返した `LobbyTransaction` が drop されるまで保持する。
//! UseCase はこの区間の中で通知を送信チャンネルに積む（非ブロッキング）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{
    DisconnectOutcome, FindPartnerOutcome, Lobby, LobbyRepository, LobbyStats, LobbyTransaction,
    Participant, ParticipantId, ParticipantState, RepositoryError, Timestamp,
};

/// インメモリ Lobby Repository 実装
pub struct InMemoryLobbyRepository {
    lobby: Arc<Mutex<Lobby>>,
}

impl InMemoryLobbyRepository {
    /// 新しい InMemoryLobbyRepository を作成
    pub fn new(lobby: Arc<Mutex<Lobby>>) -> Self {
        Self { lobby }
    }
}

#[async_trait]
impl LobbyRepository for InMemoryLobbyRepository {
    async fn begin<'a>(&'a self) -> Box<dyn LobbyTransaction + 'a> {
        Box::new(InMemoryLobbyTransaction {
            lobby: self.lobby.lock().await,
        })
    }
}

/// ロック中の Lobby。drop でロックを解放する
struct InMemoryLobbyTransaction<'a> {
    lobby: MutexGuard<'a, Lobby>,
}

impl LobbyTransaction for InMemoryLobbyTransaction<'_> {
    fn connect(&mut self, participant_id: ParticipantId, joined_at: Timestamp) -> Participant {
        self.lobby.connect(participant_id, joined_at)
    }

    fn disconnect(&mut self, participant_id: &ParticipantId) -> DisconnectOutcome {
        self.lobby.disconnect(participant_id)
    }

    fn find_partner(
        &mut self,
        participant_id: &ParticipantId,
    ) -> Result<FindPartnerOutcome, RepositoryError> {
        Ok(self.lobby.find_partner(participant_id)?)
    }

    fn cancel_search(&mut self, participant_id: &ParticipantId) -> bool {
        self.lobby.cancel_search(participant_id)
    }

    fn end_chat(&mut self, participant_id: &ParticipantId) -> Option<ParticipantId> {
        self.lobby.end_chat(participant_id)
    }

    fn partner_of(&self, participant_id: &ParticipantId) -> Option<ParticipantId> {
        self.lobby.partner_of(participant_id)
    }

    fn find_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Option<(Participant, ParticipantState)> {
        let participant = self.lobby.participant(participant_id)?;
        let state = self.lobby.state_of(participant_id);
        Some((participant, state))
    }

    fn stats(&self) -> LobbyStats {
        self.lobby.stats()
    }
}
