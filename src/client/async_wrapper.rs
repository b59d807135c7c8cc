//! Async wrappers around the synchronous clients.
//!
//! Each wrapper runs its blocking HTTP call on tokio's blocking thread pool via
//! `tokio::task::spawn_blocking`, preventing it from stalling the async runtime.
//! The traits here are the seams the contact service and the form depend on,
//! so tests can substitute fakes.

use super::{ContactApiClient, RecaptchaClient, SendGridClient};
use crate::error::{ContactApiError, ContactApiResult, ProviderError, ProviderResult};
use crate::form::SubmissionTransport;
use crate::models::{CaptchaVerification, ContactSubmission, EmailMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Verifies a CAPTCHA token with the verification service.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ProviderResult<CaptchaVerification>;
}

/// Hands a message to the transactional email service.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> ProviderResult<()>;
}

/// Async wrapper around [`RecaptchaClient`].
#[derive(Clone)]
pub struct AsyncRecaptchaClient {
    client: Arc<RecaptchaClient>,
}

impl AsyncRecaptchaClient {
    pub fn new(client: RecaptchaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl CaptchaVerifier for AsyncRecaptchaClient {
    async fn verify(&self, token: &str) -> ProviderResult<CaptchaVerification> {
        let client = self.client.clone();
        let token = token.to_string();

        tokio::task::spawn_blocking(move || client.verify(&token))
            .await
            .map_err(|e| ProviderError::HttpError(format!("Task join error: {}", e)))?
    }
}

/// Async wrapper around [`SendGridClient`].
#[derive(Clone)]
pub struct AsyncSendGridClient {
    client: Arc<SendGridClient>,
}

impl AsyncSendGridClient {
    pub fn new(client: SendGridClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailSender for AsyncSendGridClient {
    async fn send(&self, message: &EmailMessage) -> ProviderResult<()> {
        let client = self.client.clone();
        let message = message.clone();

        tokio::task::spawn_blocking(move || client.send(&message))
            .await
            .map_err(|e| ProviderError::HttpError(format!("Task join error: {}", e)))?
    }
}

/// Async wrapper around [`ContactApiClient`], used as the form's transport.
#[derive(Clone)]
pub struct AsyncContactApiClient {
    client: Arc<ContactApiClient>,
}

impl AsyncContactApiClient {
    pub fn new(client: ContactApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl SubmissionTransport for AsyncContactApiClient {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<u16> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
