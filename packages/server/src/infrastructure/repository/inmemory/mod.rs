//! インメモリ Repository 実装（単一プロセス前提）

pub mod lobby;

pub use lobby::InMemoryLobbyRepository;
