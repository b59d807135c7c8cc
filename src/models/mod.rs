//! Data models for the contact flow.
//!
//! Wire types exchanged between the contact form, the relay, and the external
//! verification and email providers.

pub mod api;
pub mod captcha;
pub mod email;
pub mod submission;

pub use api::ApiMessage;
pub use captcha::CaptchaVerification;
pub use email::{EmailMessage, SendGridMailRequest};
pub use submission::ContactSubmission;
