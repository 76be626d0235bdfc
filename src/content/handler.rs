//! HTTP handlers for the timeline and chatbot response APIs
//!
//! - GET  /api/timeline                                 — timeline sorted by order
//! - POST /api/timeline                                 — add a timeline entry
//! - GET  /api/chatbot-responses                        — all responses
//! - POST /api/chatbot-responses                        — add a response
//! - GET  /api/chatbot-responses/category/:category     — responses in one category

use crate::content::store::ContentStore;
use crate::content::types::*;
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentState {
    pub store: Arc<dyn ContentStore>,
}

/// Create the content router
pub fn content_router(state: ContentState) -> Router {
    Router::new()
        .route("/api/timeline", get(list_timeline).post(create_timeline))
        .route(
            "/api/chatbot-responses",
            get(list_responses).post(create_response),
        )
        .route(
            "/api/chatbot-responses/category/:category",
            get(list_responses_by_category),
        )
        .with_state(state)
}

// =============================================================================
// Timeline handlers
// =============================================================================

/// GET /api/timeline
async fn list_timeline(State(state): State<ContentState>) -> Result<impl IntoResponse, ApiError> {
    let items = state.store.list_timeline().await.map_err(|e| {
        tracing::error!("Error fetching timeline items: {}", e);
        ApiError::internal("Error fetching timeline items")
    })?;
    Ok(Json(items))
}

/// POST /api/timeline
async fn create_timeline(
    State(state): State<ContentState>,
    body: Result<Json<CreateTimelineRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(reject_body)?;
    request.validate().map_err(|e| {
        tracing::warn!("Rejected timeline item: {}", e);
        ApiError::bad_request("Invalid request data")
    })?;

    let item = state.store.create_timeline(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// =============================================================================
// Chatbot response handlers
// =============================================================================

/// GET /api/chatbot-responses
async fn list_responses(State(state): State<ContentState>) -> Result<impl IntoResponse, ApiError> {
    let responses = state.store.list_responses().await.map_err(|e| {
        tracing::error!("Error fetching chatbot responses: {}", e);
        ApiError::internal("Error fetching chatbot responses")
    })?;
    Ok(Json(responses))
}

/// GET /api/chatbot-responses/category/:category
async fn list_responses_by_category(
    State(state): State<ContentState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let responses = state
        .store
        .list_responses_by_category(&category)
        .await
        .map_err(|e| {
            tracing::error!(category = %category, "Error fetching responses by category: {}", e);
            ApiError::internal("Error fetching responses by category")
        })?;
    Ok(Json(responses))
}

/// POST /api/chatbot-responses
async fn create_response(
    State(state): State<ContentState>,
    body: Result<Json<CreateResponseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(reject_body)?;
    request.validate().map_err(|e| {
        tracing::warn!("Rejected chatbot response: {}", e);
        ApiError::bad_request("Invalid request data")
    })?;

    let response = state.store.create_response(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Every body that fails to parse is a plain 400
fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    ApiError::bad_request("Invalid request data")
}
