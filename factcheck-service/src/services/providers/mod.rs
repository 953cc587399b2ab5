//! AI provider abstractions and implementations.
//!
//! A trait-based seam over the upstream model so handlers and tests can
//! swap between the real Gemini backend and a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    DecodeError(String),
}

/// A provider that evaluates a statement and returns the model's raw
/// verdict text.
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    /// Run the fixed fact-checking prompt over `statement`.
    ///
    /// Returns the model's raw text output; the caller decides whether it
    /// parses as a verdict.
    async fn fact_check(&self, statement: &str) -> Result<String, ProviderError>;
}
