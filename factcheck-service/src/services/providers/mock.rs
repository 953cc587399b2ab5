//! Mock provider implementation for testing.

use super::{ProviderError, VerdictProvider};
use async_trait::async_trait;

/// Canned-output provider used by handler tests.
pub struct MockVerdictProvider {
    output: Result<String, fn() -> ProviderError>,
}

impl MockVerdictProvider {
    /// Provider that always returns the given raw text.
    pub fn returning(output: &str) -> Self {
        Self {
            output: Ok(output.to_string()),
        }
    }

    /// Provider that always fails with a network error.
    pub fn failing() -> Self {
        Self {
            output: Err(|| ProviderError::NetworkError("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl VerdictProvider for MockVerdictProvider {
    async fn fact_check(&self, _statement: &str) -> Result<String, ProviderError> {
        match &self.output {
            Ok(text) => Ok(text.clone()),
            Err(make_err) => Err(make_err()),
        }
    }
}
