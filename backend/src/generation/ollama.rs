//! Ollama `/api/generate` client

use super::{status_error, GenerationError, Prompt, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Calls a local Ollama server with streaming disabled
pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaGenerator {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(url = %url, model = %self.model, "Requesting Ollama generation");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                system: &prompt.system,
                prompt: &prompt.user,
                stream: false,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.response)
    }

    fn describe(&self) -> String {
        format!("ollama ({})", self.model)
    }
}
