//! HTTP handlers for the contact relay.
//!
//! `/api/contact` is registered for every method so the handler can answer
//! non-POST requests with the fixed 405 body instead of axum's empty one.

use crate::models::{ApiMessage, ContactSubmission};
use crate::services::ContactService;
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared, immutable state for every request.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self { service }
    }
}

/// Build the router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/contact", any(contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

fn reply(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiMessage::new(message))).into_response()
}

/// `POST /api/contact`: verify the CAPTCHA, then relay the submission by email.
async fn contact(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let method = request.method().clone();
    if method != Method::POST {
        tracing::debug!(%method, "Rejected contact request");
        return reply(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    }

    let submission = match read_submission(request.into_body()).await {
        Ok(submission) => submission,
        Err(reason) => {
            tracing::warn!(reason = %reason, "Unreadable contact submission");
            return reply(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match state.service.submit(&submission).await {
        Ok(()) => reply(StatusCode::OK, "Email sent successfully"),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!(error = %e, "Contact submission failed");
            } else {
                tracing::warn!(error = %e, "Contact submission refused");
            }
            reply(status, e.public_message())
        }
    }
}

async fn read_submission(body: Body) -> Result<ContactSubmission, String> {
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}
