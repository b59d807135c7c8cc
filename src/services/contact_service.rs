//! Contact service layer.
//!
//! Relays one submission: verify the CAPTCHA token, then send the email.
//! Both calls are sequential and neither is retried.

use crate::client::{CaptchaVerifier, EmailSender};
use crate::domain::EmailAddress;
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, EmailMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Verify and relay one submission.
    ///
    /// The email provider is only called after a successful verification.
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    verifier: Arc<dyn CaptchaVerifier>,
    sender: Arc<dyn EmailSender>,
    contact_address: EmailAddress,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        verifier: Arc<dyn CaptchaVerifier>,
        sender: Arc<dyn EmailSender>,
        contact_address: EmailAddress,
        metrics: Metrics,
    ) -> Self {
        Self {
            verifier,
            sender,
            contact_address,
            metrics,
        }
    }

    async fn verify_captcha(&self, token: &str) -> SubmissionResult<()> {
        let verification = match self.verifier.verify(token).await {
            Ok(verification) => verification,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("CAPTCHA verification timed out");
                } else {
                    tracing::error!(error = %e, "CAPTCHA verification request failed");
                }
                return Err(SubmissionError::CaptchaUnavailable(e));
            }
        };

        self.metrics.record_captcha(verification.success);

        if !verification.success {
            tracing::info!(
                error_codes = ?verification.error_codes,
                "CAPTCHA rejected"
            );
            return Err(SubmissionError::CaptchaRejected(verification.error_codes));
        }

        Ok(())
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        self.verify_captcha(&submission.captcha).await?;

        let message = EmailMessage::for_submission(&self.contact_address, submission);

        match self.sender.send(&message).await {
            Ok(()) => {
                self.metrics.record_email(true);
                tracing::info!("Contact email accepted by provider");
                Ok(())
            }
            Err(e) => {
                self.metrics.record_email(false);
                tracing::error!(error = %e, "SendGrid error");
                Err(SubmissionError::EmailFailed(e))
            }
        }
    }
}
