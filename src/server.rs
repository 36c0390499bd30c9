//! # Webhook Endpoint
//!
//! Axum surface exposing the skill over HTTP: `POST /` dispatches one request
//! envelope and returns the response envelope, `GET /health` answers `ok`.
//! The skill itself is stateless, so the router holds nothing but an `Arc` to
//! it; concurrent invocations never touch each other.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial dispatch and health routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::skill::Skill;

/// Build the router around an assembled skill.
pub fn router(skill: Arc<Skill>) -> Router {
    Router::new()
        .route("/", post(dispatch))
        .route("/health", get(health))
        .with_state(skill)
}

async fn health() -> &'static str {
    "ok"
}

async fn dispatch(
    State(skill): State<Arc<Skill>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, StatusCode> {
    let request_id = Uuid::new_v4();
    info!(
        "[{request_id}] {} {}",
        envelope.request.kind(),
        envelope.request.intent_name().unwrap_or("-")
    );

    match skill.dispatch(envelope).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            // Only reachable without a catch-all error handler.
            error!("[{request_id}] dispatch failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
