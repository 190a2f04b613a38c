//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::ParticipantId,
    infrastructure::dto::{conversion::InboundCommand, websocket::ClientEvent},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: notifications produced by
/// any use case (via rx channel) are written to this participant's connection.
///
/// # Arguments
///
/// * `rx` - Channel receiver for serialized server events
/// * `sender` - WebSocket sink to send messages to this participant
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<&'static str> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                return "write failed";
            }
        }
        "outbound channel closed"
    })
}

/// Spawns a task that reads frames from this participant and dispatches them.
fn receiver_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    participant_id: ParticipantId,
) -> JoinHandle<&'static str> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!(participant = %participant_id, "WebSocket error: {}", e);
                    return "socket error";
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text(&state, &participant_id, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!(participant = %participant_id, "client requested close");
                    return "client closed";
                }
                _ => {}
            }
        }
        "stream ended"
    })
}

/// Parse one text frame and run the matching use case.
///
/// Malformed or invalid frames are logged and dropped; the connection stays open.
async fn handle_text(state: &AppState, participant_id: &ParticipantId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(participant = %participant_id, "Failed to parse event: {}", e);
            return;
        }
    };

    // DTO から Domain Model への変換
    let command = match event.into_command(state.max_message_length) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(participant = %participant_id, "Rejected event: {}", e);
            return;
        }
    };

    match command {
        InboundCommand::FindPartner => {
            if let Err(e) = state.find_partner_usecase.execute(participant_id).await {
                tracing::error!(participant = %participant_id, "find-partner failed: {}", e);
            }
        }
        InboundCommand::CancelSearch => {
            state.cancel_search_usecase.execute(participant_id).await;
        }
        InboundCommand::EndChat => {
            state.end_chat_usecase.execute(participant_id).await;
        }
        InboundCommand::Ping => {
            state.heartbeat_usecase.execute(participant_id).await;
        }
        InboundCommand::Relay(event) => {
            state
                .relay_event_usecase
                .execute(participant_id, event)
                .await;
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let participant_id = ParticipantId::generate();
    let (sender, receiver) = socket.split();

    // Create a channel for this participant to receive notifications
    let (tx, rx) = mpsc::unbounded_channel();

    // register_client and the connected notification happen inside the UseCase
    state
        .connect_participant_usecase
        .execute(participant_id.clone(), tx)
        .await;

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receiver_loop(receiver, state.clone(), participant_id.clone());

    // If any one of the tasks completes, abort the other
    let reason = tokio::select! {
        res = &mut recv_task => {
            send_task.abort();
            res.unwrap_or("receiver task aborted")
        }
        res = &mut send_task => {
            recv_task.abort();
            res.unwrap_or("pusher task aborted")
        }
    };

    // Lobby からの削除と相手への通知は UseCase 内で行う
    state
        .disconnect_participant_usecase
        .execute(&participant_id, reason)
        .await;
}
