//! Pairing Table: 参加者 → パートナーの対称マップ
//!
//! `partners[a] == b` ならば必ず `partners[b] == a`。
//! 両方向のエントリは常に同時に追加・削除される。

use std::collections::HashMap;

use crate::domain::{error::PairingError, value_object::ParticipantId};

#[derive(Debug, Default)]
pub struct PairingTable {
    partners: HashMap<ParticipantId, ParticipantId>,
}

impl PairingTable {
    /// 2 人をペアにする
    ///
    /// どちらかが既にペアを持っている場合はテーブルを変更せずにエラーを返す。
    pub fn pair(&mut self, a: ParticipantId, b: ParticipantId) -> Result<(), PairingError> {
        if a == b {
            return Err(PairingError::SelfPairing(a.into_string()));
        }
        for id in [&a, &b] {
            if self.partners.contains_key(id) {
                return Err(PairingError::AlreadyPaired(id.to_string()));
            }
        }
        self.partners.insert(a.clone(), b.clone());
        self.partners.insert(b, a);
        Ok(())
    }

    pub fn partner_of(&self, id: &ParticipantId) -> Option<&ParticipantId> {
        self.partners.get(id)
    }

    pub fn is_paired(&self, id: &ParticipantId) -> bool {
        self.partners.contains_key(id)
    }

    /// `id` のペアを解消し、解消されたパートナーの ID を返す
    pub fn unpair(&mut self, id: &ParticipantId) -> Option<ParticipantId> {
        let partner = self.partners.remove(id)?;
        self.partners.remove(&partner);
        Some(partner)
    }

    /// アクティブなセッション数（エントリ 2 つで 1 セッション）
    pub fn session_count(&self) -> usize {
        self.partners.len() / 2
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId)> {
        self.partners.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ParticipantId {
        ParticipantId::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_pair_sets_both_directions() {
        // テスト項目: pair で両方向のエントリが設定される
        // given (前提条件):
        let mut table = PairingTable::default();

        // when (操作):
        table.pair(id("alice"), id("bob")).unwrap();

        // then (期待する結果):
        assert_eq!(table.partner_of(&id("alice")), Some(&id("bob")));
        assert_eq!(table.partner_of(&id("bob")), Some(&id("alice")));
        assert_eq!(table.session_count(), 1);
    }

    #[test]
    fn test_pair_rejects_already_paired() {
        // テスト項目: 既にペアを持つ参加者とのペアは拒否され、テーブルは変化しない
        // given (前提条件):
        let mut table = PairingTable::default();
        table.pair(id("alice"), id("bob")).unwrap();

        // when (操作):
        let result = table.pair(id("charlie"), id("bob"));

        // then (期待する結果):
        assert_eq!(result, Err(PairingError::AlreadyPaired("bob".to_string())));
        assert!(!table.is_paired(&id("charlie")));
        assert_eq!(table.partner_of(&id("bob")), Some(&id("alice")));
    }

    #[test]
    fn test_pair_rejects_self() {
        // テスト項目: 自分自身とのペアは拒否される
        // given (前提条件):
        let mut table = PairingTable::default();

        // when (操作):
        let result = table.pair(id("alice"), id("alice"));

        // then (期待する結果):
        assert_eq!(result, Err(PairingError::SelfPairing("alice".to_string())));
        assert_eq!(table.session_count(), 0);
    }

    #[test]
    fn test_unpair_removes_both_directions() {
        // テスト項目: unpair で両方向のエントリが削除され、パートナーが返される
        // given (前提条件):
        let mut table = PairingTable::default();
        table.pair(id("alice"), id("bob")).unwrap();

        // when (操作):
        let partner = table.unpair(&id("bob"));

        // then (期待する結果):
        assert_eq!(partner, Some(id("alice")));
        assert!(!table.is_paired(&id("alice")));
        assert!(!table.is_paired(&id("bob")));
        assert_eq!(table.session_count(), 0);
    }

    #[test]
    fn test_unpair_unpaired_is_noop() {
        // テスト項目: ペアを持たない参加者の unpair は何もしない
        // given (前提条件):
        let mut table = PairingTable::default();
        table.pair(id("alice"), id("bob")).unwrap();

        // when (操作):
        let partner = table.unpair(&id("charlie"));

        // then (期待する結果):
        assert_eq!(partner, None);
        assert_eq!(table.session_count(), 1);
    }
}
