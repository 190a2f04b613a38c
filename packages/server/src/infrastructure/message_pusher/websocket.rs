//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 参加者ごとの `UnboundedSender` を管理
//! - ドメインの `Notification` を JSON フレームにシリアライズして送信
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、送信に使用します。
//! 実際のソケット書き込みは接続ごとの書き込みタスクが行うため、
//! ここでの送信はブロックしません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePushError, MessagePusher, Notification, ParticipantId, PusherChannel},
    infrastructure::dto::websocket::ServerEvent,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.push_to(&participant_id, Notification::WaitingForPartner).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中の参加者の送信チャンネル
    clients: Arc<Mutex<HashMap<ParticipantId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ParticipantId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, participant_id: ParticipantId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!(participant = %participant_id, "registered outbound channel");
        // 既存のチャンネルがあれば置き換えない（接続は冪等）
        clients.entry(participant_id).or_insert(sender);
    }

    async fn unregister_client(&self, participant_id: &ParticipantId) {
        let mut clients = self.clients.lock().await;
        clients.remove(participant_id);
        tracing::debug!(participant = %participant_id, "unregistered outbound channel");
    }

    async fn push_to(
        &self,
        participant_id: &ParticipantId,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        let kind = notification.kind();
        let frame = serde_json::to_string(&ServerEvent::from(notification))
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;

        let clients = self.clients.lock().await;
        let sender = clients
            .get(participant_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(participant_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!(participant = %participant_id, kind, "pushed notification");
        Ok(())
    }
}
