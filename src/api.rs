//! Unified API router for Chatbot Guide
//!
//! Merges all module routers into a single axum `Router` with CORS, request
//! tracing, and an optional static frontend.
//!
//! ## Endpoint Map
//!
//! | Path                                          | Module  | Description              |
//! |-----------------------------------------------|---------|--------------------------|
//! | `/health`                                     | api     | Health probe             |
//! | `/api/timeline`                               | content | Timeline list / create   |
//! | `/api/chatbot-responses`                      | content | Response list / create   |
//! | `/api/chatbot-responses/category/:category`   | content | Responses by category    |
//! | `/ws`                                         | chat    | Chat demo WebSocket      |
//! | anything else                                 | static  | Frontend (when enabled)  |

use crate::chat::{chat_router, ChatState};
use crate::config::AppConfig;
use crate::content::{content_router, ContentState, ContentStore};
use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the complete Chatbot Guide HTTP application
pub fn build_app(store: Arc<dyn ContentStore>, config: &AppConfig) -> Router {
    let content_state = ContentState {
        store: store.clone(),
    };
    let chat_state = ChatState {
        store,
        settings: Arc::new(config.chat.clone()),
    };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .merge(content_router(content_state))
        .merge(chat_router(chat_state));

    if let Some(dir) = &config.server.static_dir {
        app = app.fallback_service(static_files(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.server.cors_origins))
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Static frontend
// =============================================================================

/// Serve files from `dir`, falling back to `index.html` for client-side routes
fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(parsed)
    }
}
