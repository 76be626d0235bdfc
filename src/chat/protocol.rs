//! Chat socket wire protocol
//!
//! Client → server: `{"type": "query", "message": "<text>"}`
//!
//! Server → client:
//! - `{"type": "response", "message": "<text>"}`
//! - `{"type": "typing", "typing": true}`
//! - `{"type": "error", "message": "<text>"}`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Messages accepted from the browser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Query { message: String },
}

/// Messages sent to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Response { message: String },
    Typing { typing: bool },
    Error { message: String },
}

impl ServerMessage {
    pub fn response(message: impl Into<String>) -> Self {
        Self::Response {
            message: message.into(),
        }
    }

    pub fn typing() -> Self {
        Self::Typing { typing: true }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Parse and validate one inbound frame
pub fn parse_client_message(text: &str) -> Result<ClientMessage> {
    let message: ClientMessage = serde_json::from_str(text)
        .map_err(|e| Error::Validation(format!("invalid chat message: {}", e)))?;

    match &message {
        ClientMessage::Query { message: body } if body.is_empty() => {
            Err(Error::Validation("query message must not be empty".to_string()))
        }
        _ => Ok(message),
    }
}
