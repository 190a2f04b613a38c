//! Connection Registry: 接続中の参加者の一覧

use std::collections::HashMap;

use crate::domain::{entity::Participant, value_object::ParticipantId};

/// 接続中の参加者を保持するレジストリ
///
/// 「その ID が今意味を持つか」の唯一の情報源。
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    participants: HashMap<ParticipantId, Participant>,
}

impl ConnectionRegistry {
    /// 参加者を登録する
    ///
    /// 既に登録済みの場合は何もせず、既存の参加者を返す（冪等）。
    pub fn register(&mut self, participant: Participant) -> &Participant {
        self.participants
            .entry(participant.id.clone())
            .or_insert(participant)
    }

    /// 参加者を削除する。存在しない場合は何もしない
    pub fn unregister(&mut self, id: &ParticipantId) -> Option<Participant> {
        self.participants.remove(id)
    }

    pub fn exists(&self, id: &ParticipantId) -> bool {
        self.participants.contains_key(id)
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
