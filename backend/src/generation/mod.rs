//! Text-generation clients
//!
//! The advice requester only needs one capability: turn a prompt into
//! text. [`TextGenerator`] is that capability; each backing service gets
//! its own implementation.

use crate::config::{AiConfig, AiProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

mod gemini;
mod ollama;

pub use gemini::GeminiGenerator;
pub use ollama::OllamaGenerator;

/// A prompt split into persona framing and the user-specific request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Why a generation attempt produced no text
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Text generation is disabled")]
    Disabled,

    #[error("Missing API key for {0}")]
    MissingApiKey(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Short label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            GenerationError::Disabled => "disabled",
            GenerationError::MissingApiKey(_) => "missing_api_key",
            GenerationError::Transport(e) if e.is_timeout() => "timeout",
            GenerationError::Transport(e) if e.is_decode() => "decode",
            GenerationError::Transport(_) => "transport",
            GenerationError::Status { .. } => "status",
            GenerationError::Timeout(_) => "timeout",
        }
    }
}

/// Anything that can turn a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;

    /// Name shown in readiness checks and logs
    fn describe(&self) -> String;
}

/// Generator used when AI is switched off; every call fails
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}

/// Build the generator selected by configuration
pub fn build_generator(config: &AiConfig) -> Result<Arc<dyn TextGenerator>, GenerationError> {
    if !config.enabled {
        info!("AI advice disabled, canned advice will be served");
        return Ok(Arc::new(DisabledGenerator));
    }

    let generator: Arc<dyn TextGenerator> = match config.provider {
        AiProvider::Ollama => Arc::new(OllamaGenerator::new(
            &config.ollama_url,
            &config.model,
            config.timeout(),
        )?),
        AiProvider::Gemini => {
            let api_key = config
                .api_key()
                .cloned()
                .ok_or(GenerationError::MissingApiKey("gemini"))?;
            Arc::new(GeminiGenerator::new(
                &config.gemini_url,
                &config.model,
                api_key,
                config.timeout(),
            )?)
        }
    };

    info!(generator = %generator.describe(), "AI advice enabled");
    Ok(generator)
}

/// Read a failed response into a [`GenerationError::Status`]
pub(crate) async fn status_error(response: reqwest::Response) -> GenerationError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    GenerationError::Status {
        status,
        body: body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt {
            system: "system".to_string(),
            user: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        let err = DisabledGenerator.generate(&prompt()).await.unwrap_err();
        assert_eq!(err.reason(), "disabled");
    }

    #[test]
    fn test_build_disabled_by_default() {
        let generator = build_generator(&AiConfig::default()).unwrap();
        assert_eq!(generator.describe(), "disabled");
    }

    #[test]
    fn test_build_ollama() {
        let config = AiConfig {
            enabled: true,
            ..AiConfig::default()
        };
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.describe(), "ollama (llama3.2)");
    }

    #[test]
    fn test_build_gemini_requires_key() {
        let mut config = AiConfig {
            enabled: true,
            provider: AiProvider::Gemini,
            model: "gemini-2.0-flash".to_string(),
            ..AiConfig::default()
        };
        assert!(matches!(
            build_generator(&config),
            Err(GenerationError::MissingApiKey("gemini"))
        ));

        config.api_key = Some(secrecy::SecretString::new("secret".to_string()));
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.describe(), "gemini (gemini-2.0-flash)");
        assert!(!generator.describe().contains("secret"));
    }
}
