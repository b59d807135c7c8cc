//! SendGrid v3 mail send client.

use super::{build_agent, build_url, map_error};
use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{EmailMessage, SendGridMailRequest};
use std::sync::Arc;
use std::time::Duration;

const MAIL_SEND_PATH: &str = "/v3/mail/send";

/// HTTP client for SendGrid's mail send endpoint.
///
/// Delivery is asynchronous on SendGrid's side: a 2xx (normally 202) means the
/// message was accepted, not delivered.
#[derive(Clone)]
pub struct SendGridClient {
    base_url: String,
    api_key: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl SendGridClient {
    /// Create a client from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            base_url: config.sendgrid_api_url.clone(),
            api_key: config.sendgrid_api_key.clone(),
            agent: Arc::new(build_agent(Duration::from_secs(config.request_timeout))),
            metrics,
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            base_url,
            api_key,
            agent: Arc::new(build_agent(timeout)),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Hand one message to SendGrid.
    pub fn send(&self, message: &EmailMessage) -> ProviderResult<()> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = build_url(&self.base_url, MAIL_SEND_PATH);
        let body = serde_json::to_value(SendGridMailRequest::from(message))?;

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_error);

        match result {
            Ok(response) => {
                tracing::debug!("POST {} - Accepted (status: {})", url, response.status());
                timer.complete();
                Ok(())
            }
            Err(ProviderError::Timeout) => {
                tracing::error!("POST {} - Timeout", url);
                timer.complete_with_timeout();
                Err(ProviderError::Timeout)
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
                Err(e)
            }
        }
    }
}
