//! API HTTP routes
//!
//! The `/api` JSON surface: feedback and quiz-result submission and listing,
//! news listing with an optional category filter, and the stub form-download
//! endpoint. Each request maps to exactly one store operation.
//!
//! Response shapes are fixed API behavior: successful writes wrap the record
//! in `{success:true, <entityName>}` while list routes return bare arrays.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::schema::SchemaRegistry;
use crate::store::{Entity, MemStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// API state shared across handlers: the record store and the insert schemas.
pub struct ApiState {
    pub store: MemStore,
    pub registry: SchemaRegistry,
}

impl ApiState {
    /// Create the state with a freshly seeded store.
    pub fn new() -> Self {
        Self {
            store: MemStore::with_sample_news(),
            registry: SchemaRegistry::new(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Query Types
// ==================

#[derive(Debug, Deserialize)]
struct NewsQuery {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    #[serde(default)]
    format: Option<String>,
}

/// Create the API routes
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/feedback", post(submit_feedback_handler))
        .route("/feedback", get(list_feedback_handler))
        .route("/quiz-results", post(submit_quiz_result_handler))
        .route("/quiz-results", get(list_quiz_results_handler))
        .route("/news", get(list_news_handler))
        .route("/forms/{form_id}/download", get(download_form_handler))
        .with_state(state)
}

/// Submit feedback handler
async fn submit_feedback_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = payload?;
    let record = state
        .registry
        .validate(Entity::Feedback, &body)
        .map_err(ApiError::validation)?;
    let feedback = state
        .store
        .insert(Entity::Feedback, record)
        .map_err(|_| ApiError::Write("Failed to submit feedback"))?;

    Ok(Json(json!({ "success": true, "feedback": feedback })))
}

/// List feedback handler, newest first
async fn list_feedback_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Value>>> {
    let feedbacks = state
        .store
        .list(Entity::Feedback, None)
        .map_err(|_| ApiError::Read("Failed to fetch feedback"))?;

    Ok(Json(feedbacks))
}

/// Submit quiz result handler
async fn submit_quiz_result_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = payload?;
    let record = state
        .registry
        .validate(Entity::QuizResults, &body)
        .map_err(ApiError::validation)?;
    let result = state
        .store
        .insert(Entity::QuizResults, record)
        .map_err(|_| ApiError::Write("Failed to save quiz result"))?;

    Ok(Json(json!({ "success": true, "result": result })))
}

/// List quiz results handler, newest first
async fn list_quiz_results_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Value>>> {
    let results = state
        .store
        .list(Entity::QuizResults, None)
        .map_err(|_| ApiError::Read("Failed to fetch quiz results"))?;

    Ok(Json(results))
}

/// List news handler, optionally filtered by category
async fn list_news_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<NewsQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    let filter = query.category.as_deref().map(|c| ("category", c));
    let news = state
        .store
        .list(Entity::News, filter)
        .map_err(|_| ApiError::Read("Failed to fetch news"))?;

    Ok(Json(news))
}

/// Form download stub handler
///
/// Builds the document URL without touching any filesystem path.
async fn download_form_handler(
    Path(form_id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Json<Value> {
    let format = query.format.unwrap_or_else(|| "pdf".to_string());

    Json(json!({
        "success": true,
        "downloadUrl": format!("/documents/{}.{}", form_id, format),
        "message": "Document would be downloaded in a real implementation",
    }))
}
