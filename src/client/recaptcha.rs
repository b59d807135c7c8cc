//! reCAPTCHA siteverify client.

use super::{build_agent, map_error, read_body};
use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::CaptchaVerification;
use std::sync::Arc;
use std::time::Duration;

/// Client for the CAPTCHA verification endpoint.
///
/// Posts the shared secret and the client token as an url-encoded form and
/// parses the JSON verdict. A `success: false` verdict is returned as a value;
/// only transport, status and parse failures are errors.
#[derive(Clone)]
pub struct RecaptchaClient {
    verify_url: String,
    secret: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl RecaptchaClient {
    /// Create a client from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            verify_url: config.recaptcha_verify_url.clone(),
            secret: config.recaptcha_secret.clone(),
            agent: Arc::new(build_agent(Duration::from_secs(config.request_timeout))),
            metrics,
        }
    }

    /// Create a client against a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_verify_url(verify_url: String, secret: String, timeout: Duration) -> Self {
        Self {
            verify_url,
            secret,
            agent: Arc::new(build_agent(timeout)),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Verify one token.
    pub fn verify(&self, token: &str) -> ProviderResult<CaptchaVerification> {
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.verify_url);

        let result = self
            .agent
            .post(&self.verify_url)
            .send_form(&[("secret", self.secret.as_str()), ("response", token)])
            .map_err(map_error)
            .and_then(read_body)
            .and_then(|body| {
                serde_json::from_str::<CaptchaVerification>(&body).map_err(ProviderError::JsonError)
            });

        match &result {
            Ok(verification) => {
                tracing::debug!(
                    success = verification.success,
                    hostname = verification.hostname.as_deref().unwrap_or(""),
                    "POST {} - verification received",
                    self.verify_url
                );
                timer.complete();
            }
            Err(ProviderError::Timeout) => {
                tracing::error!("POST {} - Timeout", self.verify_url);
                timer.complete_with_timeout();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", self.verify_url, e);
                timer.complete_with_error();
            }
        }

        result
    }
}
