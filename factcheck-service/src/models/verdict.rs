use serde::{Deserialize, Serialize};

/// How much raw model output to echo back when it is not valid JSON.
const RAW_PREVIEW_CHARS: usize = 200;

/// Inbound fact-check request body.
#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Fact-check outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    True,
    False,
    Misleading,
    Unsupported,
    Error,
}

/// A sub-span of the checked statement and why it matters to the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub statement: String,
    pub reason: String,
}

/// Structured verdict returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckVerdict {
    pub verdict: Verdict,
    pub explanation: String,
    pub highlights: Vec<Highlight>,
}

impl FactCheckVerdict {
    /// Degraded verdict for model output that is not valid JSON.
    ///
    /// Still served as HTTP 200; the parse failure is absorbed into the
    /// verdict rather than surfaced as a transport error.
    pub fn parse_failure(raw: &str) -> Self {
        let preview: String = raw.chars().take(RAW_PREVIEW_CHARS).collect();
        FactCheckVerdict {
            verdict: Verdict::Error,
            explanation: format!("Unable to parse AI response. Raw response: {}", preview),
            highlights: Vec::new(),
        }
    }
}
