use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::provider::{GenerationRequest, TextGenerator};

/// Default API base for the Gemini REST endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Backend speaking the Gemini `generateContent` REST protocol.
pub struct GeminiGenerator {
    api_base: String,
    client: Client,
}

/// Request body for `generateContent`.
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

/// Response body for `generateContent`.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    // Absent when generation was blocked (e.g. safety filters).
    #[serde(default)]
    content: GeminiResponseContent,
}

#[derive(Deserialize, Default)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

/// Error envelope Gemini wraps non-2xx bodies in.
#[derive(Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiGenerator {
    /// Create a backend against the public Gemini endpoint.
    pub fn new() -> Self {
        Self::with_api_base(GEMINI_API_BASE)
    }

    /// Create a backend against a custom endpoint (proxies, test doubles).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl Default for GeminiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, request.model);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
        };

        debug!(
            "sending generateContent request: model={}, prompt_chars={}",
            request.model,
            request.prompt.len()
        );

        // The key travels in a header, never the URL: invocation errors
        // are shown to end users and reqwest error text includes the URL.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", request.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        Ok(extract_text(parsed))
    }
}

/// Map a non-success response to an API error, preferring the provider's
/// own error message over the raw body.
fn api_error(status: StatusCode, body: String) -> GenerationError {
    let detail = match serde_json::from_str::<GeminiErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body,
    };

    if detail.is_empty() {
        GenerationError::Api(status.to_string())
    } else {
        GenerationError::Api(format!("{status}: {detail}"))
    }
}

/// Pull the generated text out of a decoded response.
///
/// Missing candidates, blocked candidates and empty part lists all mean
/// the call was well-formed but produced nothing usable.
fn extract_text(response: GeminiResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: "Oi" }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contents": [{"role": "user", "parts": [{"text": "Oi"}]}]})
        );
    }

    #[test]
    fn response_text_is_joined_across_parts() {
        let parsed: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Gargalo: "}, {"text": "SP-Capital"}]}}]
        }))
        .unwrap();

        assert_eq!(extract_text(parsed).as_deref(), Some("Gargalo: SP-Capital"));
    }

    #[test]
    fn missing_candidates_mean_no_text() {
        let parsed: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert_eq!(extract_text(parsed), None);

        let parsed: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn blocked_candidate_without_parts_means_no_text() {
        let parsed: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();

        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn api_error_prefers_provider_message() {
        let body = json!({"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}});
        let err = api_error(StatusCode::BAD_REQUEST, body.to_string());

        assert_eq!(
            err.to_string(),
            "API error: 400 Bad Request: API key not valid."
        );
    }

    #[test]
    fn api_error_falls_back_to_raw_body_then_status() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream exploded".to_string());
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway: upstream exploded");

        let err = api_error(StatusCode::FORBIDDEN, String::new());
        assert_eq!(err.to_string(), "API error: 403 Forbidden");
    }

    #[test]
    fn trailing_slash_in_api_base_is_tolerated() {
        let generator = GeminiGenerator::with_api_base("http://localhost:9090/v1beta/");
        assert_eq!(generator.api_base, "http://localhost:9090/v1beta");
    }
}
