//! Lobby 集約
//!
//! Connection Registry / Waiting Queue / Pairing Table をひとまとめに所有し、
//! Matchmaker のアルゴリズムと参加者ごとの状態遷移を実装する。
//!
//! ## 不変条件
//!
//! - 対称性: `partner_of(a) == Some(b)` ならば `partner_of(b) == Some(a)`
//! - 排他性: 各参加者のパートナーは高々 1 人
//! - 待機キューとペアリングテーブルの両方に同時に現れる参加者はいない
//! - キューとテーブルに現れる ID はすべてレジストリに登録済み
//!
//! Lobby 自体は同期的なデータ構造で、ロックは持たない。
//! 排他制御は Repository 層（単一の Mutex）が担う。

mod pairing_table;
mod registry;
mod waiting_queue;

use rand::{SeedableRng, rngs::StdRng};

pub use pairing_table::PairingTable;
pub use registry::ConnectionRegistry;
pub use waiting_queue::WaitingQueue;

use super::{
    entity::Participant,
    error::PairingError,
    value_object::{ParticipantId, SessionToken, Timestamp},
};

/// 参加者ごとの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantState {
    Unregistered,
    Idle,
    Waiting,
    Paired(ParticipantId),
}

/// `find_partner` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindPartnerOutcome {
    /// 要求者が登録されていない（何もしない）
    Unregistered,
    /// 新しいパートナーとペアになった
    Paired {
        abandoned_partner: Option<ParticipantId>,
        partner: ParticipantId,
        session_token: SessionToken,
    },
    /// 候補がいなかったため待機キューに入った
    Waiting {
        abandoned_partner: Option<ParticipantId>,
    },
}

impl FindPartnerOutcome {
    /// 直前のセッションから取り残され、待機キューに戻されたパートナー
    pub fn abandoned_partner(&self) -> Option<&ParticipantId> {
        match self {
            Self::Paired {
                abandoned_partner, ..
            }
            | Self::Waiting { abandoned_partner } => abandoned_partner.as_ref(),
            Self::Unregistered => None,
        }
    }
}

/// `disconnect` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectOutcome {
    /// 削除された参加者（未登録だった場合は `None`）
    pub removed: Option<Participant>,
    /// 取り残され、待機キューに戻されたパートナー
    pub abandoned_partner: Option<ParticipantId>,
}

/// ロビー全体の統計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyStats {
    pub connected: usize,
    pub waiting: usize,
    pub active_sessions: usize,
}

pub struct Lobby {
    registry: ConnectionRegistry,
    queue: WaitingQueue,
    pairings: PairingTable,
    rng: StdRng,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    /// エントロピーから初期化した乱数生成器で Lobby を作成
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// シードを固定した Lobby を作成（テスト用）
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            registry: ConnectionRegistry::default(),
            queue: WaitingQueue::default(),
            pairings: PairingTable::default(),
            rng,
        }
    }

    /// 参加者を登録する（冪等）
    ///
    /// 既に登録済みの場合は既存の参加者を返し、`joined_at` は更新しない。
    pub fn connect(&mut self, id: ParticipantId, joined_at: Timestamp) -> Participant {
        self.registry
            .register(Participant::new(id, joined_at))
            .clone()
    }

    /// パートナーを探す
    ///
    /// 1. 既存のペアを無条件に解消し、相手を待機キューに戻す
    /// 2. 要求者を待機キューから外す
    /// 3. 要求者と (1) の相手以外から候補を一様ランダムに選ぶ
    /// 4. 候補がいればペアにし、いなければ要求者を待機キューに入れる
    ///
    /// 何度呼んでも、そのたびに探索をやり直すだけである（再入可能）。
    pub fn find_partner(
        &mut self,
        requester: &ParticipantId,
    ) -> Result<FindPartnerOutcome, PairingError> {
        if !self.registry.exists(requester) {
            return Ok(FindPartnerOutcome::Unregistered);
        }

        let abandoned_partner = self.release_partner(requester);
        self.queue.dequeue(requester);

        let mut excluded = vec![requester];
        if let Some(previous) = abandoned_partner.as_ref() {
            excluded.push(previous);
        }
        let candidate = self
            .queue
            .pick_partner_excluding(&excluded, &mut self.rng);

        match candidate {
            Some(partner) => {
                self.queue.dequeue(&partner);
                if let Err(e) = self.pairings.pair(requester.clone(), partner.clone()) {
                    // 事前条件違反。状態を壊さないよう候補をキューに戻す
                    self.queue.enqueue(partner);
                    return Err(e);
                }
                Ok(FindPartnerOutcome::Paired {
                    abandoned_partner,
                    partner,
                    session_token: SessionToken::generate(),
                })
            }
            None => {
                self.queue.enqueue(requester.clone());
                Ok(FindPartnerOutcome::Waiting { abandoned_partner })
            }
        }
    }

    /// 探索をキャンセルする
    ///
    /// 待機中でなければ何もしない。キューから外れた場合は `true` を返す。
    pub fn cancel_search(&mut self, id: &ParticipantId) -> bool {
        self.queue.dequeue(id)
    }

    /// 現在のチャットを終了する
    ///
    /// 取り残されたパートナーは待機キューに戻され、その ID を返す。
    /// 要求者自身は待機キューに残らない。
    pub fn end_chat(&mut self, id: &ParticipantId) -> Option<ParticipantId> {
        let abandoned = self.release_partner(id);
        self.queue.dequeue(id);
        abandoned
    }

    /// 参加者の接続断を処理し、すべての構造から ID を取り除く
    pub fn disconnect(&mut self, id: &ParticipantId) -> DisconnectOutcome {
        let abandoned_partner = self.release_partner(id);
        self.queue.dequeue(id);
        let removed = self.registry.unregister(id);
        DisconnectOutcome {
            removed,
            abandoned_partner,
        }
    }

    pub fn partner_of(&self, id: &ParticipantId) -> Option<ParticipantId> {
        self.pairings.partner_of(id).cloned()
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<Participant> {
        self.registry.get(id).cloned()
    }

    pub fn state_of(&self, id: &ParticipantId) -> ParticipantState {
        if !self.registry.exists(id) {
            return ParticipantState::Unregistered;
        }
        if let Some(partner) = self.pairings.partner_of(id) {
            return ParticipantState::Paired(partner.clone());
        }
        if self.queue.contains(id) {
            return ParticipantState::Waiting;
        }
        ParticipantState::Idle
    }

    pub fn stats(&self) -> LobbyStats {
        LobbyStats {
            connected: self.registry.len(),
            waiting: self.queue.len(),
            active_sessions: self.pairings.session_count(),
        }
    }

    /// ペアを解消し、相手がまだ接続中なら待機キューに戻す
    fn release_partner(&mut self, id: &ParticipantId) -> Option<ParticipantId> {
        let partner = self.pairings.unpair(id)?;
        if self.registry.exists(&partner) {
            self.queue.enqueue(partner.clone());
        }
        Some(partner)
    }

    /// 不変条件を検査する（テスト用）
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for (a, b) in self.pairings.iter() {
            assert_eq!(
                self.pairings.partner_of(b),
                Some(a),
                "pairing of '{a}' and '{b}' is not symmetric"
            );
            assert_ne!(a, b, "'{a}' is paired with itself");
            assert!(self.registry.exists(a), "paired '{a}' is not registered");
            assert!(!self.queue.contains(a), "'{a}' is both paired and waiting");
        }
        for id in self.queue.iter() {
            assert!(self.registry.exists(id), "waiting '{id}' is not registered");
        }
    }
}
