//! UseCase テスト用の MessagePusher

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{MessagePushError, MessagePusher, Notification, ParticipantId, PusherChannel};

/// 送られた通知を参加者ごとに到着順で記録する
///
/// `slow_on` で指定した種類の通知は、記録する前に `delay` だけ待つ。
/// 送信処理がスケジューラに後回しにされた状況を再現する。
#[derive(Default)]
pub(crate) struct RecordingPusher {
    received: Mutex<HashMap<ParticipantId, Vec<Notification>>>,
    slow: Option<(&'static str, Duration)>,
}

impl RecordingPusher {
    pub(crate) fn slow_on(kind: &'static str, delay: Duration) -> Self {
        Self {
            received: Mutex::default(),
            slow: Some((kind, delay)),
        }
    }

    /// 参加者が受け取った通知（到着順）
    pub(crate) async fn received_by(&self, participant_id: &ParticipantId) -> Vec<Notification> {
        self.received
            .lock()
            .await
            .get(participant_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessagePusher for RecordingPusher {
    async fn register_client(&self, _participant_id: ParticipantId, _sender: PusherChannel) {}

    async fn unregister_client(&self, _participant_id: &ParticipantId) {}

    async fn push_to(
        &self,
        participant_id: &ParticipantId,
        notification: Notification,
    ) -> Result<(), MessagePushError> {
        if let Some((kind, delay)) = self.slow {
            if notification.kind() == kind {
                tokio::time::sleep(delay).await;
            }
        }
        self.received
            .lock()
            .await
            .entry(participant_id.clone())
            .or_default()
            .push(notification);
        Ok(())
    }
}
