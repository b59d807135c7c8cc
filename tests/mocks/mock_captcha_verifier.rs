use async_trait::async_trait;
use contact_relay::client::CaptchaVerifier;
use contact_relay::error::{ProviderError, ProviderResult};
use contact_relay::models::CaptchaVerification;
use std::sync::{Arc, Mutex};

/// How the mock verification service answers.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum CaptchaBehavior {
    Pass,
    Reject(Vec<String>),
    Timeout,
    Unreachable,
}

/// Mock CAPTCHA verifier for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockCaptchaVerifier {
    behavior: CaptchaBehavior,
    tokens: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCaptchaVerifier {
    pub fn new(behavior: CaptchaBehavior) -> Self {
        Self {
            behavior,
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn passing() -> Self {
        Self::new(CaptchaBehavior::Pass)
    }

    pub fn call_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptchaVerifier for MockCaptchaVerifier {
    async fn verify(&self, token: &str) -> ProviderResult<CaptchaVerification> {
        self.tokens.lock().unwrap().push(token.to_string());

        match &self.behavior {
            CaptchaBehavior::Pass => Ok(CaptchaVerification {
                success: true,
                ..Default::default()
            }),
            CaptchaBehavior::Reject(codes) => Ok(CaptchaVerification {
                success: false,
                error_codes: codes.clone(),
                ..Default::default()
            }),
            CaptchaBehavior::Timeout => Err(ProviderError::Timeout),
            CaptchaBehavior::Unreachable => {
                Err(ProviderError::HttpError("Connection failed".to_string()))
            }
        }
    }
}
