//! 通知送信の共通処理

use crate::domain::{MessagePusher, Notification, ParticipantId};

/// 通知を送る。失敗はログに残すだけで呼び出し元には伝えない
pub(super) async fn push_or_warn(
    pusher: &dyn MessagePusher,
    to: &ParticipantId,
    notification: Notification,
) -> bool {
    let kind = notification.kind();
    match pusher.push_to(to, notification).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(participant = %to, kind, "failed to push notification: {}", e);
            false
        }
    }
}

/// 取り残されたパートナーにセッション終了を知らせる
pub(super) async fn notify_partner_left(pusher: &dyn MessagePusher, partner: &ParticipantId) {
    tracing::info!(participant = %partner, "partner left, back to waiting queue");
    push_or_warn(pusher, partner, Notification::PartnerDisconnected).await;
}
