//! HTTP clients for the external providers and for the contact endpoint itself.
//!
//! The clients are synchronous (`ureq`) and are called from async contexts via
//! `tokio::task::spawn_blocking` through the wrappers in [`async_wrapper`].
//! Every client is built from explicit configuration and carries its own
//! request timeout; nothing is read from the environment here.

mod async_wrapper;
mod contact_api;
mod recaptcha;
mod sendgrid;

pub use async_wrapper::{
    AsyncContactApiClient, AsyncRecaptchaClient, AsyncSendGridClient, CaptchaVerifier,
    EmailSender,
};
pub use contact_api::ContactApiClient;
pub use recaptcha::RecaptchaClient;
pub use sendgrid::SendGridClient;

use crate::error::ProviderError;
use std::io;
use std::time::Duration;

/// Build a `ureq` agent whose whole-request deadline is `timeout`.
pub(crate) fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(timeout).build()
}

/// Join a base URL and a path with exactly one slash between them.
pub(crate) fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Whether an I/O error is the agent's deadline expiring.
pub(crate) fn is_timeout_io(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

/// Whether a transport failure is the agent's deadline expiring.
pub(crate) fn is_timeout_transport(transport: &ureq::Transport) -> bool {
    if transport.kind() != ureq::ErrorKind::Io {
        return false;
    }

    let timed_out_source = std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(is_timeout_io)
        .unwrap_or(false);

    timed_out_source || transport.to_string().contains("timed out")
}

/// Map a ureq error to a ProviderError.
pub(crate) fn map_error(error: ureq::Error) -> ProviderError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                401 | 403 => ProviderError::Unauthorized,
                429 => ProviderError::RateLimitExceeded,
                _ => ProviderError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if is_timeout_transport(&transport) {
                ProviderError::Timeout
            } else if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                ProviderError::HttpError("Connection failed".to_string())
            } else {
                ProviderError::HttpError(transport.to_string())
            }
        }
    }
}

/// Read a response body, keeping a deadline hit mid-body distinct from other I/O failures.
pub(crate) fn read_body(response: ureq::Response) -> Result<String, ProviderError> {
    response.into_string().map_err(|e| {
        if is_timeout_io(&e) {
            ProviderError::Timeout
        } else {
            ProviderError::HttpError(e.to_string())
        }
    })
}
