//! WebSocket handler for the chat demo

use crate::chat::protocol::ServerMessage;
use crate::chat::session::ChatSession;
use crate::config::ChatConfig;
use crate::content::ContentStore;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared state for chat handlers
#[derive(Clone)]
pub struct ChatState {
    pub store: Arc<dyn ContentStore>,
    pub settings: Arc<ChatConfig>,
}

/// Create the chat router (`/ws`)
pub fn chat_router(state: ChatState) -> Router {
    Router::new()
        .route("/ws", get(ws_upgrade))
        .with_state(state)
}

/// WebSocket upgrade handler
async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<ChatState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_chat_ws(socket, state))
}

/// Drive one chat connection until either side goes away
async fn handle_chat_ws(socket: WebSocket, state: ChatState) {
    let connection_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(connection_id = %connection_id, "WebSocket client connected");

    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let mut session = ChatSession::new(
        connection_id.clone(),
        state.store.clone(),
        state.settings.clone(),
        tx,
    );
    session.greet();

    // Forward session → browser messages
    let send_connection_id = connection_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(connection_id = %send_connection_id, "Failed to encode message: {}", e);
                    continue;
                }
            };
            if ws_sender.send(Message::Text(text)).await.is_err() {
                tracing::debug!(connection_id = %send_connection_id, "WebSocket send failed");
                break;
            }
        }
    });

    // Browser → session
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = ws_receiver.next().await {
            match msg {
                Message::Text(text) => session.handle_text(&text).await,
                Message::Binary(bytes) => session.handle_binary(&bytes).await,
                Message::Close(_) => break,
                _ => {}
            }
        }
        session.close();
    });

    // Whichever half finishes first tears down the other; an aborted
    // receive task drops the session, which cancels its pending replies.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!(connection_id = %connection_id, "WebSocket client disconnected");
}
