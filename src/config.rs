use serde::{Deserialize, Serialize};

/// Default Gemini model: the fast, economical variant the dashboard runs on.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Which generation-call shape to use.
///
/// The analysis logic is identical across providers; only the wire
/// format and the model family differ. Anything speaking one of these
/// two protocols can serve the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Google Gemini REST API (`generateContent`).
    #[serde(rename = "gemini")]
    Gemini,
    /// Any endpoint speaking the OpenAI chat-completions protocol.
    #[serde(rename = "openai-compatible")]
    OpenAiCompatible,
}

/// Configuration for the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Generation-call shape to use.
    pub provider: ProviderKind,

    /// Model identifier (e.g. "gemini-2.5-flash").
    ///
    /// A fixed deployment value, never taken from callers per request.
    pub model: String,

    /// Optional API base URL for custom endpoints.
    pub api_base: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();

        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn provider_kind_serializes_to_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::Gemini).unwrap(),
            "\"gemini\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderKind::OpenAiCompatible).unwrap(),
            "\"openai-compatible\""
        );
    }
}
