//! Route definitions for the Final Tap API
//!
//! This module organizes all API routes and applies middleware.

use crate::config::AppConfig;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod calculate;
mod health;
mod scrape;

pub use calculate::calculate_routes;

/// Habit profiles are small; anything bigger is not a form submission
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Floor for the HTTP request deadline
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Room left after the advice deadline to score, format and respond
const ADVICE_MARGIN: Duration = Duration::from_secs(5);

/// HTTP deadline for a request; always outlasts the advice deadline so a
/// slow generator ends in fallback advice rather than a 408
pub fn request_timeout(config: &AppConfig) -> Duration {
    config
        .ai
        .timeout()
        .saturating_add(ADVICE_MARGIN)
        .max(MIN_REQUEST_TIMEOUT)
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = request_timeout(state.config());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(scrape::render_metrics))
        .route("/api/v1/", get(api_banner))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_banner))
        .merge(calculate::calculate_routes())
}

async fn api_banner() -> &'static str {
    "Final Tap API v1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_has_a_floor() {
        let config = AppConfig::default();
        assert_eq!(request_timeout(&config), Duration::from_secs(30));
    }

    #[test]
    fn test_request_timeout_outlasts_advice_timeout() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 60;
        assert_eq!(request_timeout(&config), Duration::from_secs(65));

        config.ai.timeout_secs = u64::MAX;
        assert_eq!(request_timeout(&config), Duration::MAX);
    }
}
