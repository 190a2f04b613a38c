//! UseCase: セッション内イベントの中継
//!
//! 送信者の現在のパートナーにだけイベントを転送する。パートナーがいない場合は
//! 黙って破棄する（UI の古い状態からの送信は想定内）。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayEventUseCase::execute() メソッド
//! - 転送先がパートナーだけであること、サーバー時刻が付与されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：チャットメッセージ・シグナリングの転送
//! - エッジケース：パートナーがいない状態での送信（破棄）
//! - 2 組のセッションが同時に存在する場合の混線防止

use std::sync::Arc;

use deai_shared::time::Clock;

use crate::domain::{LobbyRepository, MessagePusher, ParticipantId, RelayEvent, Timestamp};

use super::notify::push_or_warn;

/// 中継結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// パートナーの送信チャンネルに渡した
    Delivered { to: ParticipantId },
    /// 送信者にパートナーがいないため破棄した
    NoPartner,
    /// パートナーはいたが送信チャンネルが閉じていた
    PushFailed { to: ParticipantId },
}

/// イベント中継のユースケース
pub struct RelayEventUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// メッセージに付与するサーバー時刻
    clock: Arc<dyn Clock>,
}

impl RelayEventUseCase {
    /// 新しい RelayEventUseCase を作成
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

    /// イベント中継を実行
    pub async fn execute(&self, sender: &ParticipantId, event: RelayEvent) -> RelayOutcome {
        let kind = event.kind();

        // パートナーの解決と送信チャンネルへの投入は同じ排他区間で行う
        let lobby = self.repository.begin().await;
        let Some(partner) = lobby.partner_of(sender) else {
            tracing::debug!(participant = %sender, kind, "no partner, relay dropped");
            return RelayOutcome::NoPartner;
        };

        let relayed_at = Timestamp::new(self.clock.now_millis());
        let notification = event.into_notification(sender.clone(), relayed_at);
        let pushed = push_or_warn(self.message_pusher.as_ref(), &partner, notification).await;
        drop(lobby);

        if pushed {
            tracing::debug!(participant = %sender, partner = %partner, kind, "relayed");
            RelayOutcome::Delivered { to: partner }
        } else {
            RelayOutcome::PushFailed { to: partner }
        }
    }
}
