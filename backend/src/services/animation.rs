//! Best-effort fetch of the decorative animation asset
//!
//! The animation is purely cosmetic. A disabled fetch, a timeout, a non-200
//! status or an unparsable body all resolve to `None` and the page is shown
//! without it. Successful fetches are cached for the lifetime of the process;
//! concurrent first requests share one fetch.

use crate::config::AnimationConfig;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// HTTP client for the animation asset with an in-memory cache
#[derive(Clone)]
pub struct AnimationClient {
    http: reqwest::Client,
    url: String,
    enabled: bool,
    cache: Arc<OnceCell<Arc<Value>>>,
}

impl AnimationClient {
    /// Build the client; the configured timeout applies to the whole request
    pub fn new(config: &AnimationConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
            enabled: config.enabled,
            cache: Arc::new(OnceCell::new()),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the animation, fetching it on first use
    pub async fn get(&self) -> Option<Arc<Value>> {
        if !self.enabled {
            return None;
        }

        // Only a successful fetch initializes the cell; failures retry later
        self.cache
            .get_or_try_init(|| async { self.fetch().await.map(Arc::new).ok_or(()) })
            .await
            .ok()
            .map(Arc::clone)
    }

    async fn fetch(&self) -> Option<Value> {
        debug!(url = %self.url, "Fetching animation");

        let response = match self.http.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch animation: {}. Continuing without it.", e);
                metrics::counter!("weight_forecast_animation_fetch_total", "outcome" => "error")
                    .increment(1);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "Animation unavailable. Continuing without it.");
            metrics::counter!("weight_forecast_animation_fetch_total", "outcome" => "unavailable")
                .increment(1);
            return None;
        }

        match response.json::<Value>().await {
            Ok(value) => {
                metrics::counter!("weight_forecast_animation_fetch_total", "outcome" => "ok")
                    .increment(1);
                Some(value)
            }
            Err(e) => {
                warn!("Animation body is not valid JSON: {}. Continuing without it.", e);
                metrics::counter!("weight_forecast_animation_fetch_total", "outcome" => "error")
                    .increment(1);
                None
            }
        }
    }
}
