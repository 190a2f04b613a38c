//! UseCase: チャット終了処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EndChatUseCase::execute() メソッド
//! - 要求者はアイドル、パートナーは待機状態になり通知を受け取る
//!
//! ### どのような状況を想定しているか
//! - 正常系：ペア中の終了
//! - エッジケース：アイドル中の終了（何もしない）、2 回連続の終了

use std::sync::Arc;

use crate::domain::{LobbyRepository, MessagePusher, ParticipantId};

use super::notify::notify_partner_left;

/// チャット終了のユースケース
pub struct EndChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl EndChatUseCase {
    /// 新しい EndChatUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// チャット終了を実行
    ///
    /// # Returns
    ///
    /// 取り残され、待機キューに戻されたパートナー
    pub async fn execute(&self, participant_id: &ParticipantId) -> Option<ParticipantId> {
        let mut lobby = self.repository.begin().await;
        let abandoned = lobby.end_chat(participant_id);

        // 再探索で別のセッションに入る前に partner-disconnected を積んでおく
        match abandoned.as_ref() {
            Some(partner) => {
                tracing::info!(participant = %participant_id, partner = %partner, "chat ended");
                notify_partner_left(self.message_pusher.as_ref(), partner).await;
            }
            None => {
                tracing::debug!(participant = %participant_id, "end-chat without partner");
            }
        }
        drop(lobby);
        abandoned
    }
}
