//! factcheck-service: a single-endpoint relay that fact-checks statements
//! through Google's Gemini API.
//!
//! The service accepts `POST /` with `{"message": "<statement>"}`, forwards
//! the statement to Gemini with a fixed fact-checking prompt, and returns
//! the model's structured verdict. The API key never leaves the backend.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::fact_check::ApiError;
use crate::startup::AppState;

/// Assemble the service router.
///
/// The CORS layer is outermost so every response, including error and
/// panic responses, carries `Access-Control-Allow-Origin: *`. It also
/// answers OPTIONS preflight requests directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::health::api_status).post(handlers::fact_check::fact_check),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}

/// Catch-all for panics inside handlers. Surfaces a short description,
/// never a backtrace.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    ApiError::Internal(detail).into_response()
}
