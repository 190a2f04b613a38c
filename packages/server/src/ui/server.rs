//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{
    handler::{get_participant, get_stats, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
    stats::spawn_stats_reporter,
};

/// Matchmaking server
///
/// This struct owns the shared state and provides methods to build the router
/// and run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, Some(Duration::from_secs(30)));
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
    /// 統計ログの出力間隔（`None` なら出力しない）
    stats_interval: Option<Duration>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `app_state` - Use cases shared by all handlers
    /// * `stats_interval` - Period of the lobby stats log line, `None` to disable it
    pub fn new(app_state: Arc<AppState>, stats_interval: Option<Duration>) -> Self {
        Self {
            app_state,
            stats_interval,
        }
    }

    /// Build the axum router with every endpoint mounted
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .route("/api/participants/{participant_id}", get(get_participant))
            .layer(TraceLayer::new_for_http())
            .with_state(self.app_state.clone())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails while accepting connections.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        let reporter = self.stats_interval.map(|period| {
            spawn_stats_reporter(self.app_state.get_lobby_stats_usecase.clone(), period)
        });

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Some(reporter) = reporter {
            reporter.abort();
        }

        result
    }

    /// Run the matchmaking server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Matchmaking server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
