//! Configuration management for the Final Tap backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Longest advice wait accepted in production
const MAX_AI_TIMEOUT_SECS: u64 = 300;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which text-generation service writes the advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Ollama,
    Gemini,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Ollama => "ollama",
            AiProvider::Gemini => "gemini",
        }
    }
}

/// AI/LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    #[serde(default)]
    pub provider: AiProvider,
    pub ollama_url: String,
    pub gemini_url: String,
    pub model: String,
    /// Required by Gemini; redacted in `Debug` output
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    pub timeout_secs: u64,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if one is set and not blank
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|k| !k.expose_secret().trim().is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: AiProvider::Ollama,
            ollama_url: "http://localhost:11434".to_string(),
            gemini_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "llama3.2".to_string(),
            api_key: None,
            timeout_secs: 20,
        }
    }
}

/// Prometheus exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            ai: AiConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(
                config::File::with_name(&config_file)
                    .required(false)
            )
            // Override with environment variables (FT__ prefix)
            // e.g., FT__AI__PROVIDER=gemini sets ai.provider
            .add_source(
                config::Environment::with_prefix("FT")
                    .separator("__")
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unusable in production
    pub fn production_problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();

        if self.ai.enabled && self.ai.provider == AiProvider::Gemini {
            if self.ai.api_key().is_none() {
                problems.push("Gemini provider requires ai.api_key (FT__AI__API_KEY)");
            }
        }

        if self.ai.timeout_secs == 0 {
            problems.push("ai.timeout_secs must be greater than zero");
        }

        if self.ai.timeout_secs > MAX_AI_TIMEOUT_SECS {
            problems.push("ai.timeout_secs must be at most 300");
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.provider, AiProvider::Ollama);
        assert_eq!(config.ai.timeout(), Duration::from_secs(20));
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_defaults_have_no_production_problems() {
        assert!(AppConfig::default().production_problems().is_empty());
    }

    #[test]
    fn test_gemini_without_key_is_rejected() {
        let mut config = AppConfig::default();
        config.ai.enabled = true;
        config.ai.provider = AiProvider::Gemini;
        assert_eq!(config.production_problems().len(), 1);

        config.ai.api_key = Some(SecretString::new("   ".to_string()));
        assert_eq!(config.production_problems().len(), 1);

        config.ai.api_key = Some(SecretString::new("key".to_string()));
        assert!(config.production_problems().is_empty());
    }

    #[test]
    fn test_api_key_is_redacted_in_debug_output() {
        let mut config = AppConfig::default();
        config.ai.api_key = Some(SecretString::new("sk-very-secret".to_string()));

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-very-secret"));
        assert_eq!(
            config.ai.api_key().map(|k| k.expose_secret().as_str()),
            Some("sk-very-secret")
        );
    }

    #[test]
    fn test_api_key_deserializes_into_secret() {
        let ai: AiConfig = serde_json::from_value(serde_json::json!({
            "enabled": true,
            "provider": "gemini",
            "ollama_url": "http://localhost:11434",
            "gemini_url": "https://generativelanguage.googleapis.com",
            "model": "gemini-2.0-flash",
            "api_key": "from-env",
            "timeout_secs": 10
        }))
        .unwrap();
        assert_eq!(ai.api_key().unwrap().expose_secret(), "from-env");
    }

    #[test]
    fn test_unbounded_ai_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 300;
        assert!(config.production_problems().is_empty());

        config.ai.timeout_secs = 301;
        assert_eq!(config.production_problems(), vec!["ai.timeout_secs must be at most 300"]);
    }

    #[test]
    fn test_provider_deserializes_lowercase() {
        let provider: AiProvider = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(provider, AiProvider::Gemini);
    }
}
