//! Waiting Queue: パートナーを探している参加者の集合
//!
//! 選択は FIFO ではなく一様ランダム。待ち時間に対する公平性は保証しないが、
//! 要求者以外の待機者は必ず 0 でない確率で選ばれる。

use rand::{Rng, seq::IteratorRandom};

use crate::domain::value_object::ParticipantId;

#[derive(Debug, Default)]
pub struct WaitingQueue {
    members: Vec<ParticipantId>,
}

impl WaitingQueue {
    /// ID を追加する。既に存在する場合は何もしない（集合セマンティクス）
    ///
    /// 追加された場合は `true` を返す。
    pub fn enqueue(&mut self, id: ParticipantId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// ID を削除する。存在しない場合は何もしない
    ///
    /// 削除された場合は `true` を返す。
    pub fn dequeue(&mut self, id: &ParticipantId) -> bool {
        match self.members.iter().position(|member| member == id) {
            Some(index) => {
                self.members.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.members.iter().any(|member| member == id)
    }

    /// `excluded` に含まれない待機者を一様ランダムに 1 人選ぶ
    ///
    /// 選んだ参加者はキューから削除しない。
    pub fn pick_partner_excluding<R: Rng + ?Sized>(
        &self,
        excluded: &[&ParticipantId],
        rng: &mut R,
    ) -> Option<ParticipantId> {
        self.members
            .iter()
            .filter(|member| !excluded.contains(member))
            .choose(rng)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> {
        self.members.iter()
    }
}
