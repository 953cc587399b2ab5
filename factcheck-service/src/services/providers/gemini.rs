//! Gemini verdict provider.
//!
//! Sends a single fact-check prompt to Google's Gemini API and returns the
//! model's raw text output. One request per call, no retry.

use super::{ProviderError, VerdictProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream request timeout. Expiry surfaces as a network error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed fact-checking persona and required verdict schema.
const SYSTEM_INSTRUCTION: &str = r#"
            You are an expert fact-checker. Your task is to analyze a given statement for factual accuracy.

            Please respond in the following JSON format:
            {
                "verdict": "TRUE" | "FALSE" | "MISLEADING" | "UNSUPPORTED",
                "explanation": "Detailed explanation of your analysis",
                "highlights": [
                    {
                        "statement": "specific part to highlight",
                        "reason": "why this part is important"
                    }
                ]
            }

            Base your analysis on verifiable facts and provide clear reasoning.
            "#;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

/// Gemini-backed verdict provider.
pub struct GeminiVerdictProvider {
    config: GeminiConfig,
    client: Client,
    // Built once at construction; identical for every request.
    generation_config: GenerationConfig,
}

impl GeminiVerdictProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                temperature: 0.2,
            },
        }
    }

    /// Build the API URL for the given method, key as query parameter.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base, self.config.model, method, self.config.api_key
        )
    }
}

#[async_trait]
impl VerdictProvider for GeminiVerdictProvider {
    async fn fact_check(&self, statement: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: statement.to_string(),
                }],
            }],
            generation_config: &self.generation_config,
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            statement_len = statement.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError { status, body });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::DecodeError(e.to_string()))?;

        Ok(extract_text(api_response))
    }
}

/// Pull the first candidate's first text part.
///
/// Any missing level of the response structure degrades to the empty JSON
/// object literal rather than an error, so an unexpected-but-2xx upstream
/// response still flows through the normal verdict path.
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .unwrap_or_else(|| "{}".to_string())
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiVerdictProvider {
        GeminiVerdictProvider::new(GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        })
    }

    #[test]
    fn api_url_places_key_as_query_parameter() {
        assert_eq!(
            provider().api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent?key=test-key"
        );
    }

    #[test]
    fn request_serializes_system_instruction_and_json_mode() {
        let provider = provider();
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "The moon is made of cheese".to_string(),
                }],
            }],
            generation_config: &provider.generation_config,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("expert fact-checker"));
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn extract_text_returns_first_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "role": "model",
                            "parts": [{"text": "{\"verdict\": \"TRUE\"}"}]
                        },
                        "finishReason": "STOP"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(response), r#"{"verdict": "TRUE"}"#);
    }

    #[test]
    fn extract_text_defaults_when_candidates_missing() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(response), "{}");
    }

    #[test]
    fn extract_text_defaults_when_parts_missing() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response), "{}");
    }

    #[test]
    fn extract_text_defaults_when_content_missing() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(extract_text(response), "{}");
    }
}
