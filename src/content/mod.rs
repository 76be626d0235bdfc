//! Content module — timeline entries and canned chatbot responses
//!
//! Provides the append-only content store, the query matcher used by the
//! chat demo, and the REST endpoints over both collections.

pub mod handler;
pub mod matcher;
pub mod seed;
pub mod store;
pub mod types;

pub use handler::{content_router, ContentState};
pub use store::{ContentStore, MemoryStore};
pub use types::{ResponseRecord, TimelineRecord};
