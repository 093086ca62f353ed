//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything is built once at startup and cloned per request: every
//! field is an `Arc` or already cheap to clone, and nothing is mutated
//! while handling requests.

use crate::config::AppConfig;
use crate::generation::{build_generator, TextGenerator};
use crate::services::AdviceService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Advice requester wrapping the configured text generator
    pub advice: Arc<AdviceService>,
    /// Prometheus render handle, absent when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create the state, building the generator selected by `config.ai`
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let generator = build_generator(&config.ai)?;
        Ok(Self::with_generator(config, generator))
    }

    /// Create the state around an already-built generator
    pub fn with_generator(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let advice = AdviceService::new(generator, config.ai.timeout());
        Self {
            config: Arc::new(config),
            advice: Arc::new(advice),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle served at `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the advice requester
    #[inline]
    pub fn advice(&self) -> &AdviceService {
        &self.advice
    }
}
