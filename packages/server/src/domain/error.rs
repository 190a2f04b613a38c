//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクトの生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("participant id must not be empty")]
    EmptyParticipantId,

    #[error("participant id exceeds {max} characters")]
    ParticipantIdTooLong { max: usize },

    #[error("message content must not be empty")]
    EmptyMessage,

    #[error("message content has {actual} characters, limit is {max}")]
    MessageTooLong { max: usize, actual: usize },
}

/// ペアリングテーブルの事前条件違反
///
/// Matchmaker は `pair` の前に必ず既存のペアを解消するため、
/// 通常の運用では発生しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("participant '{0}' cannot be paired with itself")]
    SelfPairing(String),

    #[error("participant '{0}' already has a partner")]
    AlreadyPaired(String),
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("pairing conflict: {0}")]
    PairingConflict(#[from] PairingError),
}

/// メッセージ送信（通知）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("participant '{0}' has no outbound channel")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
