//! The fact-check endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::models::{FactCheckRequest, FactCheckVerdict};
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors that terminate a fact-check request.
///
/// Model output that is not valid JSON is deliberately absent here: it is
/// absorbed into a 200 response with an ERROR verdict, not an HTTP failure.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not JSON, or `message` was absent or empty.
    MissingMessage,
    /// No upstream API key in configuration. Operator error, not retried.
    KeyNotConfigured,
    /// Transport failure or non-2xx from the upstream service.
    UpstreamFailed(String),
    /// Anything else. Carries a short description only.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::MissingMessage => {
                (StatusCode::BAD_REQUEST, "Missing 'message'".to_string())
            }
            ApiError::KeyNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API key not configured".to_string(),
            ),
            ApiError::UpstreamFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("API request failed: {}", msg),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// `POST /` — relay a statement to the model and return its verdict.
///
/// The body is parsed by hand so malformed JSON yields this contract's own
/// 400 response rather than the framework's rejection body.
pub async fn fact_check(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let message = parse_message(&body).ok_or(ApiError::MissingMessage)?;

    if state.config.gemini.api_key.is_empty() {
        return Err(ApiError::KeyNotConfigured);
    }

    let text = state
        .provider
        .fact_check(&message)
        .await
        .map_err(|e| ApiError::UpstreamFailed(e.to_string()))?;

    // The model was asked for JSON. Trust it when it parses; degrade to an
    // ERROR verdict when it does not.
    match serde_json::from_str::<Value>(&text) {
        Ok(verdict) => Ok((StatusCode::OK, Json(verdict)).into_response()),
        Err(_) => {
            tracing::warn!(raw_len = text.len(), "Model output was not valid JSON");
            Ok((StatusCode::OK, Json(FactCheckVerdict::parse_failure(&text))).into_response())
        }
    }
}

/// Extract a non-empty `message` from the raw request body.
fn parse_message(body: &[u8]) -> Option<String> {
    let request: FactCheckRequest = serde_json::from_slice(body).ok()?;
    request.message.filter(|message| !message.is_empty())
}
