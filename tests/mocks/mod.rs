mod mock_captcha_verifier;
mod mock_email_sender;

pub use mock_captcha_verifier::{CaptchaBehavior, MockCaptchaVerifier};
pub use mock_email_sender::{EmailBehavior, MockEmailSender};
