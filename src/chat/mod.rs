//! Chat module — WebSocket chat demo
//!
//! Each connection gets a greeting, then answers every `query` frame with a
//! typing notification followed by the best stored response after a fixed
//! delay.

pub mod handler;
pub mod protocol;
pub mod session;

pub use handler::{chat_router, ChatState};
pub use protocol::{ClientMessage, ServerMessage};
pub use session::ChatSession;
