//! UseCase: アプリケーションレベルの ping に pong を返す

use std::sync::Arc;

use crate::domain::{MessagePusher, Notification, ParticipantId};

use super::notify::push_or_warn;

pub struct HeartbeatUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl HeartbeatUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(&self, participant_id: &ParticipantId) {
        push_or_warn(self.message_pusher.as_ref(), participant_id, Notification::Pong).await;
    }
}
