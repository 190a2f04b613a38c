//! エンティティ定義

use super::value_object::{ParticipantId, Timestamp};

/// 接続中の参加者
///
/// Connection Registry が唯一の所有者。他のコンポーネントは ID のみで参照する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub joined_at: Timestamp,
}

impl Participant {
    pub fn new(id: ParticipantId, joined_at: Timestamp) -> Self {
        Self { id, joined_at }
    }
}
