//! UseCase 層のエラー型
//!
//! 状態に対して効果のない要求（待機中でない参加者の cancel-search など）は
//! エラーではなく、各 UseCase の戻り値で表現する。

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// パートナー探索のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindPartnerError {
    #[error("matchmaking failed: {0}")]
    Repository(#[from] RepositoryError),
}

/// 参加者参照のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid participant id: {0}")]
    InvalidParticipantId(#[from] ValueObjectError),

    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),
}
