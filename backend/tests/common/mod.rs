//! Common test utilities for integration tests
//!
//! Builds the full router in memory; no network listener is opened.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use async_trait::async_trait;
use final_tap_backend::{
    config::{AiConfig, AiProvider, AppConfig},
    generation::{GenerationError, Prompt, TextGenerator},
    routes,
    state::AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Application with AI disabled, serving canned advice
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Application whose advice comes from an Ollama-compatible server
    pub fn with_ollama(base_url: &str, timeout: Duration) -> Self {
        let mut config = test_config();
        config.ai = AiConfig {
            enabled: true,
            provider: AiProvider::Ollama,
            ollama_url: base_url.to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: timeout.as_secs().max(1),
            ..AiConfig::default()
        };
        Self::with_config(config)
    }

    /// Application around a hand-built generator
    pub fn with_generator(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            app: routes::create_router(AppState::with_generator(config, generator)),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("Failed to build test state");
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST a JSON value and parse the JSON reply
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, text) = self.post(path, &body.to_string()).await;
        let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
        (status, value)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Generator that answers only after `delay`
pub struct SlowGenerator {
    pub delay: Duration,
    pub text: &'static str,
}

#[async_trait]
impl TextGenerator for SlowGenerator {
    async fn generate(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.text.to_string())
    }

    fn describe(&self) -> String {
        "slow".to_string()
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: final_tap_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ai: AiConfig::default(),
        metrics: final_tap_backend::config::MetricsConfig { enabled: false },
    }
}

/// A profile with every virtue: male, 30, expectancy 101
pub fn saintly_habits() -> Value {
    json!({
        "name": "Faust",
        "age": 30,
        "gender": "male",
        "height": 180,
        "weight": 75,
        "smoking": "none",
        "drinking": "none",
        "sleep": 8,
        "water": 9,
        "stress": "calm",
        "depression": "happy",
        "screenTime": 1,
        "exercise": 45,
        "yoga": true,
        "junkFood": "rarely",
        "sugar": "none",
        "processedMeat": "none",
        "cityLiving": false,
        "socialLife": "good",
        "medicalCheckup": "annually",
        "medicalConditions": []
    })
}
