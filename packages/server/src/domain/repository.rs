//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::Participant,
    error::RepositoryError,
    lobby::{DisconnectOutcome, FindPartnerOutcome, LobbyStats, ParticipantState},
    value_object::{ParticipantId, Timestamp},
};

/// Lobby の排他区間
///
/// 値が生きている間は他の状態遷移は進まない。UseCase は遷移に伴う通知を
/// この区間の中で送信チャンネルに積み、そのあとで手放す。これにより参加者ごとの
/// 通知の順序が状態遷移の順序と一致する。
///
/// 区間内で行う通知は `UnboundedSender::send` だけで、待ちは発生しない。
pub trait LobbyTransaction: Send {
    /// 参加者を登録（冪等）
    fn connect(&mut self, participant_id: ParticipantId, joined_at: Timestamp) -> Participant;

    /// 参加者の切断処理
    fn disconnect(&mut self, participant_id: &ParticipantId) -> DisconnectOutcome;

    /// パートナー探索
    fn find_partner(
        &mut self,
        participant_id: &ParticipantId,
    ) -> Result<FindPartnerOutcome, RepositoryError>;

    /// 探索のキャンセル
    fn cancel_search(&mut self, participant_id: &ParticipantId) -> bool;

    /// チャット終了。取り残されたパートナーを返す
    fn end_chat(&mut self, participant_id: &ParticipantId) -> Option<ParticipantId>;

    /// 現在のパートナー
    fn partner_of(&self, participant_id: &ParticipantId) -> Option<ParticipantId>;

    /// 参加者と現在の状態
    fn find_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Option<(Participant, ParticipantState)>;

    /// ロビー全体の統計
    fn stats(&self) -> LobbyStats;
}

/// Lobby Repository trait
///
/// 排他区間は `begin` が返す `LobbyTransaction` 1 つだけ。
/// 区間の中では、片方向だけのペアなどの中間状態が外部から観測されることはない。
#[async_trait]
pub trait LobbyRepository: Send + Sync {
    /// 排他区間を開始する（ロックを取得するまで待つ）
    async fn begin<'a>(&'a self) -> Box<dyn LobbyTransaction + 'a>;
}
