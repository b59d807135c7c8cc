use async_trait::async_trait;
use contact_relay::client::EmailSender;
use contact_relay::error::{ProviderError, ProviderResult};
use contact_relay::models::EmailMessage;
use std::sync::{Arc, Mutex};

/// How the mock email provider answers.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum EmailBehavior {
    Accept,
    /// Fail with a provider error carrying this detail
    Fail(String),
    Timeout,
}

/// Mock email sender for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailSender {
    behavior: EmailBehavior,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    pub fn new(behavior: EmailBehavior) -> Self {
        Self {
            behavior,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::new(EmailBehavior::Accept)
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, message: &EmailMessage) -> ProviderResult<()> {
        self.sent.lock().unwrap().push(message.clone());

        match &self.behavior {
            EmailBehavior::Accept => Ok(()),
            EmailBehavior::Fail(detail) => Err(ProviderError::ApiError {
                status: 400,
                message: detail.clone(),
            }),
            EmailBehavior::Timeout => Err(ProviderError::Timeout),
        }
    }
}
