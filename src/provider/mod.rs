pub mod gemini;
pub mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

use async_trait::async_trait;

use crate::error::GenerationError;

/// Everything a backend needs for a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Credential resolved for this call; backends must not store it.
    pub api_key: &'a str,
    /// Model identifier from configuration.
    pub model: &'a str,
    /// Fully assembled prompt text.
    pub prompt: &'a str,
}

/// A text-generation endpoint: prompt in, text (or nothing, or an error) out.
///
/// `Ok(Some(text))` is a payload, `Ok(None)` a well-formed response that
/// carried no usable text, `Err` an invocation failure. Any provider
/// honoring this contract is substitutable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError>;
}
