//! UseCase: パートナー探索処理
//!
//! 「パートナーを探す」は「今のセッションを抜けて次を探す」も兼ねる。
//! 直前のパートナーは待機キューに戻され、partner-disconnected を受け取る。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - FindPartnerUseCase::execute() メソッド
//! - 待機・ペア成立・スキップそれぞれの通知内容
//!
//! ### どのような状況を想定しているか
//! - 正常系：待機者がいない場合の待機、待機者がいる場合のペア成立
//! - エッジケース：ペア中の再探索（スキップ）、未登録の参加者

use std::sync::Arc;

use crate::domain::{
    FindPartnerOutcome, LobbyRepository, MessagePusher, Notification, ParticipantId,
};

use super::{
    error::FindPartnerError,
    notify::{notify_partner_left, push_or_warn},
};

/// パートナー探索のユースケース
pub struct FindPartnerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl FindPartnerUseCase {
    /// 新しい FindPartnerUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// パートナー探索を実行
    ///
    /// # Returns
    ///
    /// * `Ok(FindPartnerOutcome)` - 探索結果（未登録の参加者の場合は `Unregistered`）
    /// * `Err(FindPartnerError)` - ペアリングテーブルの事前条件違反
    pub async fn execute(
        &self,
        requester: &ParticipantId,
    ) -> Result<FindPartnerOutcome, FindPartnerError> {
        // 1. ロック内で状態遷移を完了させる
        let mut lobby = self.repository.begin().await;
        let outcome = lobby.find_partner(requester)?;

        // 2. ロックを保持したまま通知を積む（次の遷移の通知より先に届く）
        let pusher = self.message_pusher.as_ref();
        if let Some(previous) = outcome.abandoned_partner() {
            notify_partner_left(pusher, previous).await;
        }

        match &outcome {
            FindPartnerOutcome::Unregistered => {
                tracing::debug!(participant = %requester, "find-partner from unknown participant ignored");
            }
            FindPartnerOutcome::Waiting { .. } => {
                tracing::info!(participant = %requester, "waiting for partner");
                push_or_warn(pusher, requester, Notification::WaitingForPartner).await;
            }
            FindPartnerOutcome::Paired {
                partner,
                session_token,
                ..
            } => {
                tracing::info!(
                    participant = %requester,
                    partner = %partner,
                    session = %session_token,
                    "paired"
                );
                push_or_warn(
                    pusher,
                    requester,
                    Notification::PartnerFound {
                        partner_id: partner.clone(),
                        session_token: session_token.clone(),
                    },
                )
                .await;
                push_or_warn(
                    pusher,
                    partner,
                    Notification::PartnerFound {
                        partner_id: requester.clone(),
                        session_token: session_token.clone(),
                    },
                )
                .await;
            }
        }
        drop(lobby);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Lobby, MockMessagePusher, ParticipantState, Timestamp},
        infrastructure::repository::InMemoryLobbyRepository,
        usecase::test_support::RecordingPusher,
    };
    use std::time::Duration;
    use tokio::sync::Mutex;

    fn id(value: &str) -> ParticipantId {
        ParticipantId::new(value.to_string()).unwrap()
    }

    async fn create_repository(names: &[&str]) -> Arc<InMemoryLobbyRepository> {
        let repository = Arc::new(InMemoryLobbyRepository::new(Arc::new(Mutex::new(
            Lobby::with_seed(11),
        ))));
        for (i, name) in names.iter().enumerate() {
            repository.begin().await.connect(id(name), Timestamp::new(i as i64));
        }
        repository
    }

    fn silent_pusher() -> MockMessagePusher {
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push_to().returning(|_, _| Ok(()));
        pusher
    }

    #[tokio::test]
    async fn test_find_partner_without_candidates_waits() {
        // テスト項目: 待機者がいない場合、要求者に waiting-for-partner が通知される
        // given (前提条件):
        let repository = create_repository(&["alice"]).await;
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .withf(|to, notification| {
                to.as_str() == "alice" && *notification == Notification::WaitingForPartner
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = FindPartnerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        let outcome = usecase.execute(&id("alice")).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            outcome,
            FindPartnerOutcome::Waiting {
                abandoned_partner: None
            }
        );
    }

    #[tokio::test]
    async fn test_find_partner_notifies_both_sides_with_same_token() {
        // テスト項目: ペア成立時、両者に相手の ID と同じセッショントークンが通知される
        // given (前提条件):
        let repository = create_repository(&["alice", "bob"]).await;
        FindPartnerUseCase::new(repository.clone(), Arc::new(silent_pusher()))
            .execute(&id("alice"))
            .await
            .unwrap();

        let sent = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut pusher = MockMessagePusher::new();
        let recorder = sent.clone();
        pusher
            .expect_push_to()
            .times(2)
            .returning(move |to, notification| {
                recorder
                    .lock()
                    .unwrap()
                    .push((to.clone(), notification));
                Ok(())
            });
        let usecase = FindPartnerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        usecase.execute(&id("bob")).await.unwrap();

        // then (期待する結果):
        let sent = sent.lock().unwrap();
        let tokens: Vec<_> = sent
            .iter()
            .map(|(to, notification)| match notification {
                Notification::PartnerFound {
                    partner_id,
                    session_token,
                } => {
                    assert_ne!(to, partner_id);
                    session_token.clone()
                }
                other => panic!("unexpected notification: {other:?}"),
            })
            .collect();
        assert_eq!(sent[0].0, id("bob"));
        assert_eq!(sent[1].0, id("alice"));
        assert_eq!(tokens[0], tokens[1]);
    }

    #[tokio::test]
    async fn test_find_partner_while_paired_releases_previous_partner() {
        // テスト項目: ペア中に再探索すると、元のパートナーは待機状態になり partner-disconnected を受け取る
        // given (前提条件):
        let repository = create_repository(&["alice", "bob"]).await;
        let setup = FindPartnerUseCase::new(repository.clone(), Arc::new(silent_pusher()));
        setup.execute(&id("alice")).await.unwrap();
        setup.execute(&id("bob")).await.unwrap();

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .withf(|to, notification| {
                to.as_str() == "bob" && *notification == Notification::PartnerDisconnected
            })
            .times(1)
            .returning(|_, _| Ok(()));
        pusher
            .expect_push_to()
            .withf(|to, notification| {
                to.as_str() == "alice" && *notification == Notification::WaitingForPartner
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = FindPartnerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        usecase.execute(&id("alice")).await.unwrap();

        // then (期待する結果):
        let (_, bob_state) = repository.begin().await.find_participant(&id("bob")).unwrap();
        assert_eq!(bob_state, ParticipantState::Waiting);
        assert_eq!(repository.begin().await.partner_of(&id("alice")), None);
    }

    #[tokio::test]
    async fn test_find_partner_push_failure_does_not_undo_pairing() {
        // テスト項目: 通知の送信に失敗してもペアリング自体は成立している
        // given (前提条件):
        let repository = create_repository(&["alice", "bob"]).await;
        FindPartnerUseCase::new(repository.clone(), Arc::new(silent_pusher()))
            .execute(&id("alice"))
            .await
            .unwrap();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push_to().returning(|to, _| {
            Err(crate::domain::MessagePushError::ClientNotFound(
                to.to_string(),
            ))
        });
        let usecase = FindPartnerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        let result = usecase.execute(&id("bob")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(repository.begin().await.partner_of(&id("bob")), Some(id("alice")));
    }

    #[tokio::test]
    async fn test_find_partner_unregistered_is_noop() {
        // テスト項目: 未登録の参加者による探索では何も通知されない
        // given (前提条件):
        let repository = create_repository(&[]).await;
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push_to().never();
        let usecase = FindPartnerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        let outcome = usecase.execute(&id("ghost")).await.unwrap();

        // then (期待する結果):
        assert_eq!(outcome, FindPartnerOutcome::Unregistered);
        assert_eq!(repository.begin().await.stats().waiting, 0);
    }

    /// 最後に受け取った通知が、サーバー側の状態と食い違っていないことを検査する
    fn assert_last_notification_matches(
        name: &str,
        state: &ParticipantState,
        last: Option<&Notification>,
    ) {
        match state {
            ParticipantState::Paired(partner) => assert!(
                matches!(last, Some(Notification::PartnerFound { partner_id, .. }) if partner_id == partner),
                "{name} is paired with {partner} but last saw {last:?}"
            ),
            ParticipantState::Waiting => assert!(
                matches!(
                    last,
                    Some(Notification::WaitingForPartner | Notification::PartnerDisconnected)
                ),
                "{name} is waiting but last saw {last:?}"
            ),
            other => panic!("{name} is in unexpected state {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_skip_and_concurrent_search_keep_notification_order() {
        // テスト項目: スキップと別の参加者の探索が並行しても、各参加者が最後に受け取る通知は現在の状態と一致する
        // given (前提条件): a-b がペア、c はアイドル。partner-disconnected の送信は遅い
        let repository = create_repository(&["a", "b", "c"]).await;
        let pusher = Arc::new(RecordingPusher::slow_on(
            "partner-disconnected",
            Duration::from_millis(50),
        ));
        let usecase = Arc::new(FindPartnerUseCase::new(repository.clone(), pusher.clone()));
        usecase.execute(&id("a")).await.unwrap();
        usecase.execute(&id("b")).await.unwrap();

        // when (操作): b がスキップし、その 10ms 後に c が探索する
        let skip = {
            let usecase = usecase.clone();
            tokio::spawn(async move { usecase.execute(&id("b")).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        usecase.execute(&id("c")).await.unwrap();
        skip.await.unwrap().unwrap();

        // then (期待する結果):
        for name in ["a", "b", "c"] {
            let (_, state) = repository.begin().await.find_participant(&id(name)).unwrap();
            let received = pusher.received_by(&id(name)).await;
            assert_last_notification_matches(name, &state, received.last());
        }
        assert_eq!(repository.begin().await.stats().active_sessions, 1);
    }
}
