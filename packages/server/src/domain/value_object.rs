//! 値オブジェクト定義
//!
//! 生成時にバリデーションを行い、不正な値を持つインスタンスが存在しないことを保証する。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// 参加者 ID の最大文字数
pub const MAX_PARTICIPANT_ID_LENGTH: usize = 64;

/// チャットメッセージのデフォルト最大文字数
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;

/// 参加者 ID
///
/// 1 つのトランスポート接続の間だけ有効な匿名 ID。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// 文字列から ParticipantId を作成
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyParticipantId);
        }
        if trimmed.chars().count() > MAX_PARTICIPANT_ID_LENGTH {
            return Err(ValueObjectError::ParticipantIdTooLong {
                max: MAX_PARTICIPANT_ID_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 新しい匿名 ID を発行（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// セッショントークン
///
/// ペア成立ごとに発行され、UI とログの突き合わせに使われる。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// タイムスタンプ（Unix エポックからのミリ秒。タイムゾーンに依存しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// チャットメッセージ本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// デフォルトの最大文字数で MessageContent を作成
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        Self::with_limit(value, DEFAULT_MAX_MESSAGE_LENGTH)
    }

    /// 最大文字数を指定して MessageContent を作成
    ///
    /// 空白のみのメッセージは拒否する。本文自体はトリムせずそのまま保持する。
    pub fn with_limit(value: String, max_chars: usize) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyMessage);
        }
        let actual = value.chars().count();
        if actual > max_chars {
            return Err(ValueObjectError::MessageTooLong {
                max: max_chars,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// WebRTC シグナリングペイロード（offer / answer / ICE candidate）
///
/// 中身は一切解釈せず、そのまま相手に転送する。
#[derive(Debug, Clone, PartialEq)]
pub struct SignalingPayload(serde_json::Value);

impl SignalingPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_rejects_blank() {
        // テスト項目: 空白のみの ID は拒否される
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = ParticipantId::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyParticipantId));
    }

    #[test]
    fn test_participant_id_rejects_too_long() {
        // テスト項目: 最大文字数を超える ID は拒否される
        // given (前提条件):
        let value = "a".repeat(MAX_PARTICIPANT_ID_LENGTH + 1);

        // when (操作):
        let result = ParticipantId::try_from(value);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::ParticipantIdTooLong {
                max: MAX_PARTICIPANT_ID_LENGTH
            })
        );
    }

    #[test]
    fn test_generated_participant_ids_are_unique_and_valid() {
        // テスト項目: 発行された ID は一意で、バリデーションを通過する
        // given (前提条件):

        // when (操作):
        let first = ParticipantId::generate();
        let second = ParticipantId::generate();

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(ParticipantId::new(first.to_string()), Ok(first));
    }

    #[test]
    fn test_message_content_preserves_text() {
        // テスト項目: 前後の空白を含むメッセージは加工されずに保持される
        // given (前提条件):
        let text = "  hi there ".to_string();

        // when (操作):
        let content = MessageContent::new(text.clone()).unwrap();

        // then (期待する結果):
        assert_eq!(content.as_str(), text);
    }

    #[test]
    fn test_message_content_rejects_empty() {
        // テスト項目: 空のメッセージは拒否される
        // given (前提条件):

        // when (操作):
        let result = MessageContent::new(" \n".to_string());

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyMessage));
    }

    #[test]
    fn test_message_content_limit_counts_characters() {
        // テスト項目: 文字数制限はバイト数ではなく文字数で判定される
        // given (前提条件):
        let text = "こんにちは".to_string(); // 5 文字 / 15 バイト

        // when (操作):
        let accepted = MessageContent::with_limit(text.clone(), 5);
        let rejected = MessageContent::with_limit(text, 4);

        // then (期待する結果):
        assert!(accepted.is_ok());
        assert_eq!(
            rejected,
            Err(ValueObjectError::MessageTooLong { max: 4, actual: 5 })
        );
    }
}
