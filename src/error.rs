//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling an external provider (reCAPTCHA, SendGrid).
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl ProviderError {
    /// Whether this error is an expired timeout rather than an explicit failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Terminal outcomes of a submission that did not end in a sent email.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The verification service answered `success: false`
    #[error("CAPTCHA rejected (error codes: {0:?})")]
    CaptchaRejected(Vec<String>),

    /// The verification service could not be reached or answered garbage
    #[error("CAPTCHA verification unavailable: {0}")]
    CaptchaUnavailable(ProviderError),

    /// The email provider failed to accept the message
    #[error("Email delivery failed: {0}")]
    EmailFailed(ProviderError),
}

impl SubmissionError {
    /// HTTP status returned to the submitter.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::CaptchaRejected(_) | SubmissionError::CaptchaUnavailable(_) => {
                StatusCode::BAD_REQUEST
            }
            SubmissionError::EmailFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message returned to the submitter. Provider detail is never included.
    pub fn public_message(&self) -> &'static str {
        match self {
            SubmissionError::CaptchaRejected(_) | SubmissionError::CaptchaUnavailable(_) => {
                "Failed reCAPTCHA verification"
            }
            SubmissionError::EmailFailed(_) => "Error sending email",
        }
    }
}

/// Errors raised by the form's API client before a status code is available.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// Could not reach the contact endpoint
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;
