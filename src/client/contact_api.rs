//! Client for the relay's own `/api/contact` endpoint, used by the contact form.

use super::{build_agent, build_url, is_timeout_transport};
use crate::error::{ContactApiError, ContactApiResult};
use crate::models::ContactSubmission;
use std::sync::Arc;
use std::time::Duration;

const CONTACT_PATH: &str = "/api/contact";

/// Posts a submission as JSON and reports the HTTP status.
///
/// Non-2xx statuses are returned as values; the form decides what they mean.
#[derive(Clone)]
pub struct ContactApiClient {
    base_url: String,
    agent: Arc<ureq::Agent>,
}

impl ContactApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            agent: Arc::new(build_agent(timeout)),
        }
    }

    /// Post one submission and return the response status.
    pub fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<u16> {
        let url = build_url(&self.base_url, CONTACT_PATH);

        match self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(submission)
        {
            Ok(response) => Ok(response.status()),
            Err(ureq::Error::Status(code, _)) => {
                tracing::debug!("POST {} - status {}", url, code);
                Ok(code)
            }
            Err(ureq::Error::Transport(transport)) => {
                if is_timeout_transport(&transport) {
                    Err(ContactApiError::Timeout)
                } else {
                    Err(ContactApiError::HttpError(transport.to_string()))
                }
            }
        }
    }
}
