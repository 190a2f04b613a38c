//! MessagePusher trait 定義
//!
//! 参加者への通知の送り方（WebSocket など）をドメイン層から隠蔽する。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, notification::Notification, value_object::ParticipantId};

/// 参加者ごとの送信チャンネル（シリアライズ済みのフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ通知の抽象化
///
/// 送信は fire-and-forget。受信側が遅くても呼び出し元はブロックされない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 参加者の送信チャンネルを登録する
    async fn register_client(&self, participant_id: ParticipantId, sender: PusherChannel);

    /// 参加者の送信チャンネルを削除する
    async fn unregister_client(&self, participant_id: &ParticipantId);

    /// 特定の参加者に通知を送る
    async fn push_to(
        &self,
        participant_id: &ParticipantId,
        notification: Notification,
    ) -> Result<(), MessagePushError>;
}
