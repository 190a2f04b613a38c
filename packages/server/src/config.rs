//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::Parser;

use crate::domain::value_object::DEFAULT_MAX_MESSAGE_LENGTH;

/// Runtime configuration of the matchmaking server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "deai-server")]
#[command(about = "Random one-to-one chat matchmaking and WebRTC signaling server", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "DEAI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Period of the lobby stats log line in seconds (0 disables it)
    #[arg(long, env = "DEAI_STATS_INTERVAL_SECS", default_value_t = 30)]
    pub stats_interval_secs: u64,

    /// Maximum chat message length in characters
    #[arg(long, env = "DEAI_MAX_MESSAGE_LENGTH", default_value_t = DEFAULT_MAX_MESSAGE_LENGTH)]
    pub max_message_length: usize,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "DEAI_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// 統計ログの間隔（0 秒なら無効）
    pub fn stats_interval(&self) -> Option<Duration> {
        (self.stats_interval_secs > 0).then(|| Duration::from_secs(self.stats_interval_secs))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            stats_interval_secs: 30,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        // テスト項目: コマンドライン引数で各設定を上書きできる
        // given (前提条件):
        let args = [
            "deai-server",
            "-H",
            "0.0.0.0",
            "-p",
            "8080",
            "--stats-interval-secs",
            "5",
            "--max-message-length",
            "100",
            "--log-level",
            "debug",
        ];

        // when (操作):
        let config = ServerConfig::try_parse_from(args).unwrap();

        // then (期待する結果):
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.stats_interval(), Some(Duration::from_secs(5)));
        assert_eq!(config.max_message_length, 100);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_zero_stats_interval_disables_reporter() {
        // テスト項目: 統計間隔 0 は無効を意味する
        // given (前提条件):
        let config = ServerConfig {
            stats_interval_secs: 0,
            ..ServerConfig::default()
        };

        // when (操作):
        let interval = config.stats_interval();

        // then (期待する結果):
        assert_eq!(interval, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        // テスト項目: 範囲外のポート番号はパースエラー
        // given (前提条件):
        let args = ["deai-server", "--port", "70000"];

        // when (操作):
        let result = ServerConfig::try_parse_from(args);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
