//! Gemini `generateContent` client

use super::{status_error, GenerationError, Prompt, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct GeminiGenerator {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty when there is none
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default()
    }
}

impl GeminiGenerator {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(url = %url, "Requesting Gemini generation");

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &prompt.system,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &prompt.user }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.into_text())
    }

    fn describe(&self) -> String {
        format!("gemini ({})", self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prompt() -> Prompt {
        Prompt {
            system: "You are a devil.".to_string(),
            user: "Judge me.".to_string(),
        }
    }

    fn generator(server: &MockServer) -> GeminiGenerator {
        GeminiGenerator::new(
            &server.uri(),
            "gemini-2.0-flash",
            SecretString::new("test-key".to_string()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_joins_candidate_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "systemInstruction": { "parts": [{ "text": "You are a devil." }] },
                "contents": [{ "role": "user", "parts": [{ "text": "Judge me." }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Greetings, " }, { "text": "sinner." }]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = generator(&server).generate(&prompt()).await.unwrap();
        assert_eq!(text, "Greetings, sinner.");
    }

    #[tokio::test]
    async fn test_no_candidates_yields_empty_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let text = generator(&server).generate(&prompt()).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_key_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt()).await.unwrap_err();
        assert_eq!(err.reason(), "status");
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt()).await.unwrap_err();
        assert_eq!(err.reason(), "decode");
    }
}
