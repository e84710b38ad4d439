use tracing::{debug, error};

use crate::config::{AnalysisConfig, ProviderKind};
use crate::credentials;
use crate::prompt;
use crate::provider::{GeminiGenerator, GenerationRequest, OpenAiGenerator, TextGenerator};
use crate::records::CteRecord;

/// Notice returned when no credential source yields a key.
pub const MISSING_KEY_NOTICE: &str = "⚠️ Configuração Necessária: Chave de API da IA não detectada. Configure a variável 'API_KEY' no painel da Vercel.";

/// Notice returned when the model answers without usable text.
pub const NO_LEGIBLE_TEXT_NOTICE: &str = "A IA processou os dados mas não retornou texto legível.";

/// Placeholder detail for invocation errors that carry no message.
pub const UNKNOWN_ERROR_DETAIL: &str = "Erro desconhecido na IA";

/// Render the service-unavailable notice around an error detail.
fn service_unavailable_notice(detail: &str) -> String {
    let detail = if detail.is_empty() {
        UNKNOWN_ERROR_DETAIL
    } else {
        detail
    };
    format!("Serviço Indisponível: {detail}. Verifique se a API Key na Vercel é válida e se o modelo está acessível.")
}

/// Executive-analysis service for CT-e dashboards.
///
/// One operation: [`AnalysisService::analyze`]. Every outcome — generated
/// analysis, configuration warning, service error — comes back as
/// displayable text; callers never see a `Result`. That is a
/// compatibility contract with the existing dashboard, kept on purpose.
pub struct AnalysisService {
    config: AnalysisConfig,
    generator: Box<dyn TextGenerator>,
}

impl AnalysisService {
    /// Build the service with the backend selected by `config.provider`.
    pub fn new(config: AnalysisConfig) -> Self {
        let generator: Box<dyn TextGenerator> = match config.provider {
            ProviderKind::Gemini => match &config.api_base {
                Some(base) => Box::new(GeminiGenerator::with_api_base(base.as_str())),
                None => Box::new(GeminiGenerator::new()),
            },
            ProviderKind::OpenAiCompatible => {
                Box::new(OpenAiGenerator::new(config.api_base.clone()))
            }
        };

        Self { config, generator }
    }

    /// Build the service around an explicit backend.
    pub fn with_generator(config: AnalysisConfig, generator: Box<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }

    /// Analyze a batch of records under the given operational context.
    ///
    /// Never fails: configuration and invocation problems come back as
    /// fixed Portuguese notices instead of errors. The remote call is
    /// the only await point; there are no internal retries.
    pub async fn analyze(&self, records: &[CteRecord], context: &str) -> String {
        let api_key = match credentials::resolve() {
            Some(key) => key,
            None => {
                error!("API credential missing; checked API_KEY and VITE_API_KEY");
                return MISSING_KEY_NOTICE.to_string();
            }
        };

        let summary = prompt::sample_summary(records);
        let prompt_text = prompt::build_analysis_prompt(context, &summary);
        debug!(
            "analysis request: records={}, sampled={}, prompt_chars={}",
            records.len(),
            records.len().min(prompt::SAMPLE_CAP),
            prompt_text.len()
        );

        let request = GenerationRequest {
            api_key: &api_key,
            model: &self.config.model,
            prompt: &prompt_text,
        };

        match self.generator.generate(request).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => NO_LEGIBLE_TEXT_NOTICE.to_string(),
            Err(e) => {
                error!("text generation failed: {}", e);
                service_unavailable_notice(&e.to_string())
            }
        }
    }
}
