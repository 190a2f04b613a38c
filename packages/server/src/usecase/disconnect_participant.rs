//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - Registry / Waiting Queue / Pairing Table からの完全な削除
//! - 取り残されたパートナーへの partner-disconnected 通知（ちょうど 1 回）
//!
//! ### どのような状況を想定しているか
//! - 正常系：ペア中の参加者の切断
//! - エッジケース：待機中・アイドル中の切断、未登録の参加者の切断

use std::sync::Arc;

use crate::domain::{DisconnectOutcome, LobbyRepository, MessagePusher, ParticipantId};

use super::notify::notify_partner_left;

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 参加者切断を実行
    ///
    /// どの状態からでも呼び出せる。未登録の参加者に対しては何もしない。
    ///
    /// # Arguments
    ///
    /// * `participant_id` - 切断する参加者の ID
    /// * `reason` - トランスポート層から通知された切断理由（ログ用）
    pub async fn execute(&self, participant_id: &ParticipantId, reason: &str) -> DisconnectOutcome {
        let mut lobby = self.repository.begin().await;

        // 1. Lobby から削除（ペア解消・キューからの削除・登録解除を一括で）
        let outcome = lobby.disconnect(participant_id);

        // 2. 送信チャンネルを登録解除
        self.message_pusher.unregister_client(participant_id).await;

        // 3. 取り残されたパートナーに通知
        if let Some(partner) = outcome.abandoned_partner.as_ref() {
            notify_partner_left(self.message_pusher.as_ref(), partner).await;
        }
        drop(lobby);

        if outcome.removed.is_some() {
            tracing::info!(participant = %participant_id, reason, "participant disconnected");
        } else {
            tracing::debug!(participant = %participant_id, "disconnect for unknown participant ignored");
        }
        outcome
    }
}
