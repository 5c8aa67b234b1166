//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The calculator itself is stateless; the state only carries configuration,
//! the animation client and its cache, and the metrics exporter handle.

use crate::config::AppConfig;
use crate::services::AnimationClient;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Best-effort animation fetcher
    pub animation: AnimationClient,
    /// Prometheus render handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state without a metrics recorder
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let animation = AnimationClient::new(&config.animation)?;

        Ok(Self {
            config: Arc::new(config),
            animation,
            metrics: None,
        })
    }

    /// Attach the handle of an installed Prometheus recorder
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the animation client
    #[inline]
    pub fn animation(&self) -> &AnimationClient {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_clone_is_cheap() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }

    #[tokio::test]
    async fn test_state_starts_without_metrics() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(state.metrics.is_none());
        assert!(state.animation().is_enabled());
        assert_eq!(state.config().server.port, 8080);
    }
}
