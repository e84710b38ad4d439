use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::debug;

use crate::error::GenerationError;
use crate::provider::{GenerationRequest, TextGenerator};

/// Backend speaking the OpenAI chat-completions protocol.
///
/// Covers deployments that point the dashboard at an OpenAI-compatible
/// gateway instead of Gemini. The credential arrives per call, so the
/// SDK client is rebuilt on every request.
pub struct OpenAiGenerator {
    api_base: Option<String>,
}

impl OpenAiGenerator {
    pub fn new(api_base: Option<String>) -> Self {
        Self { api_base }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        let mut config = OpenAIConfig::new().with_api_key(request.api_key);
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base);
        }
        let client = Client::with_config(config);

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt)
            .build()
            .map_err(|e| GenerationError::Api(e.to_string()))?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model)
            .messages(vec![ChatCompletionRequestMessage::User(message)])
            .build()
            .map_err(|e| GenerationError::Api(e.to_string()))?;

        debug!(
            "sending chat completion request: model={}, prompt_chars={}",
            request.model,
            request.prompt.len()
        );

        let response = client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| GenerationError::Api(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(content.filter(|text| !text.is_empty()))
    }
}
