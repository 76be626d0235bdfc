//! Per-connection chat session
//!
//! A session turns inbound frames into outbound [`ServerMessage`]s on an
//! unbounded channel; the socket writer drains that channel. Replies are
//! delivered after a fixed typing delay by spawned tasks that the session
//! owns, so closing or dropping the session cancels them.

use crate::chat::protocol::{parse_client_message, ClientMessage, ServerMessage};
use crate::config::ChatConfig;
use crate::content::ContentStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// State for one live chat connection
pub struct ChatSession {
    id: String,
    store: Arc<dyn ContentStore>,
    settings: Arc<ChatConfig>,
    outbound: mpsc::UnboundedSender<ServerMessage>,
    pending: Vec<JoinHandle<()>>,
}

impl ChatSession {
    pub fn new(
        id: impl Into<String>,
        store: Arc<dyn ContentStore>,
        settings: Arc<ChatConfig>,
        outbound: mpsc::UnboundedSender<ServerMessage>,
    ) -> Self {
        Self {
            id: id.into(),
            store,
            settings,
            outbound,
            pending: Vec::new(),
        }
    }

    /// Send the unsolicited greeting
    pub fn greet(&self) {
        self.send(ServerMessage::response(self.settings.greeting.clone()));
    }

    /// Handle one inbound text frame
    pub async fn handle_text(&mut self, text: &str) {
        let query = match parse_client_message(text) {
            Ok(ClientMessage::Query { message }) => message,
            Err(e) => {
                tracing::warn!(connection_id = %self.id, "Invalid chat message: {}", e);
                self.send(ServerMessage::error(self.settings.error_reply.clone()));
                return;
            }
        };

        let answer = match self.store.find_best_match(&query).await {
            Ok(Some(record)) => {
                tracing::debug!(connection_id = %self.id, matched = record.id, "Matched query");
                record.response
            }
            Ok(None) => self.settings.fallback_reply.clone(),
            Err(e) => {
                tracing::error!(connection_id = %self.id, "Failed to match query: {}", e);
                self.send(ServerMessage::error(self.settings.error_reply.clone()));
                return;
            }
        };

        self.send(ServerMessage::typing());
        self.schedule_reply(answer);
    }

    /// Handle one inbound binary frame (UTF-8 JSON is accepted)
    pub async fn handle_binary(&mut self, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.handle_text(text).await,
            Err(_) => {
                tracing::warn!(connection_id = %self.id, "Non-UTF-8 binary frame");
                self.send(ServerMessage::error(self.settings.error_reply.clone()));
            }
        }
    }

    /// Replies scheduled but not yet delivered
    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Cancel every pending reply
    pub fn close(&mut self) {
        let cancelled = self.pending_replies();
        for task in self.pending.drain(..) {
            task.abort();
        }
        if cancelled > 0 {
            tracing::debug!(connection_id = %self.id, cancelled, "Dropped pending replies");
        }
    }

    fn schedule_reply(&mut self, answer: String) {
        self.pending.retain(|task| !task.is_finished());

        let delay = self.settings.typing_delay();
        let outbound = self.outbound.clone();
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the connection closed; nothing to do
            let _ = outbound.send(ServerMessage::response(answer));
        }));
    }

    fn send(&self, message: ServerMessage) {
        if self.outbound.send(message).is_err() {
            tracing::debug!(connection_id = %self.id, "Outbound channel closed");
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        for task in &self.pending {
            task.abort();
        }
    }
}
