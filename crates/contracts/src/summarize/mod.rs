use serde::{Deserialize, Serialize};

use crate::enums::SummaryStyle;

/// Minimum accepted input length, enforced client-side before any request
pub const MIN_TEXT_CHARS: usize = 50;

/// Maximum accepted input length
pub const MAX_TEXT_CHARS: usize = 50_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub style: SummaryStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub style: SummaryStyle,
    pub model: String,
    pub tokens_used: u64,
    /// Name of the upstream LLM provider, when the server reports it
    pub provider: Option<String>,
}

/// Body shape of non-2xx replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_response_parses() {
        let json = r#"{"summary":"X","style":"brief","model":"m1","tokens_used":42}"#;
        let resp: SummarizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.summary, "X");
        assert_eq!(resp.style, SummaryStyle::Brief);
        assert_eq!(resp.model, "m1");
        assert_eq!(resp.tokens_used, 42);
        assert_eq!(resp.provider, None);
    }

    #[test]
    fn test_summarize_response_with_provider() {
        let json = r#"{"summary":"s","style":"bullets","model":"gemini-2.5-flash","tokens_used":7,"provider":"Google Gemini"}"#;
        let resp: SummarizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.provider.as_deref(), Some("Google Gemini"));
    }

    #[test]
    fn test_health_ignores_extra_fields() {
        let json = r#"{"status":"healthy","message":"API is running","provider":"acme"}"#;
        let resp: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.provider, "acme");
    }

    #[test]
    fn test_error_body_parses() {
        let resp: ErrorResponse = serde_json::from_str(r#"{"error":"bad input"}"#).unwrap();
        assert_eq!(resp.error, "bad input");
    }

    #[test]
    fn test_request_serializes_style_code() {
        let req = SummarizeRequest {
            text: "hello".to_string(),
            style: SummaryStyle::Detailed,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"style\":\"detailed\""));
    }
}
