//! Chatbot Guide - backend for a chatbot history and technology site
//!
//! Serves the JSON content behind the site (a timeline of notable chatbots and
//! a set of canned Q&A records) and a small WebSocket chat demo that answers
//! questions from those records.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        HTTP Server                       │
//! │  ┌───────────────────────┐   ┌────────────────────────┐  │
//! │  │   REST (/api/...)     │   │   Chat socket (/ws)    │  │
//! │  │  timeline, responses  │   │  greeting, typing,     │  │
//! │  │  list / create        │   │  delayed reply         │  │
//! │  └───────────┬───────────┘   └───────────┬────────────┘  │
//! │              └─────────────┬─────────────┘               │
//! │                ┌───────────▼───────────┐                 │
//! │                │     ContentStore      │                 │
//! │                │  append-only records  │                 │
//! │                │  + query matcher      │                 │
//! │                └───────────────────────┘                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: records, store, query matcher, REST endpoints
//! - [`chat`]: WebSocket chat sessions
//! - [`api`]: combined router with CORS, tracing and static frontend
//! - [`server`]: listener lifecycle
//! - [`config`]: configuration management

pub mod api;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod server;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use server::{Server, ServerBuilder};
