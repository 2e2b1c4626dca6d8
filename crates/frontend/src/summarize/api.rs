//! HTTP client for the summarization backend

use contracts::summarize::{
    ErrorResponse, HealthResponse, ModelsResponse, SummarizeRequest, SummarizeResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Probe backend reachability and identify its configured provider
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&api_url("/health"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Request a summary. On non-2xx replies the server-provided error message
/// is surfaced when present, a generic one otherwise.
pub async fn summarize(request: &SummarizeRequest) -> Result<SummarizeResponse, String> {
    let response = Request::post(&api_url("/summarize"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Failed to generate summary".to_string());
        return Err(message);
    }

    response
        .json::<SummarizeResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// List the models the backend can serve
pub async fn list_models() -> Result<ModelsResponse, String> {
    let response = Request::get(&api_url("/models"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Model list failed: {}", response.status()));
    }

    response
        .json::<ModelsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
