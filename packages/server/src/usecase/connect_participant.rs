//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - Registry への登録、送信チャンネルの登録、connected 通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の接続（アイドル状態になる）
//! - エッジケース：同じ ID での再接続（冪等）

use std::sync::Arc;

use deai_shared::time::Clock;

use crate::domain::{
    LobbyRepository, MessagePusher, Notification, Participant, ParticipantId, PusherChannel,
    Timestamp,
};

use super::notify::push_or_warn;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `participant_id` - 接続する参加者の ID
    /// * `sender` - 参加者へのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// 登録された参加者。既に登録済みの場合は既存の参加者（冪等）。
    pub async fn execute(&self, participant_id: ParticipantId, sender: PusherChannel) -> Participant {
        let joined_at = Timestamp::new(self.clock.now_millis());

        let mut lobby = self.repository.begin().await;

        // 1. Registry に登録
        let participant = lobby.connect(participant_id.clone(), joined_at);

        // 2. MessagePusher に送信チャンネルを登録
        self.message_pusher
            .register_client(participant_id.clone(), sender)
            .await;

        // 3. 自分の ID を通知
        push_or_warn(
            self.message_pusher.as_ref(),
            &participant_id,
            Notification::Connected {
                participant_id: participant_id.clone(),
            },
        )
        .await;

        drop(lobby);

        tracing::info!(participant = %participant_id, "participant connected");
        participant
    }
}
