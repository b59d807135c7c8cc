//! reCAPTCHA siteverify response.

use serde::Deserialize;

/// Response of the CAPTCHA verification endpoint.
///
/// Only `success` drives the relay; the rest is kept for logging.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CaptchaVerification {
    pub success: bool,

    /// Timestamp of the challenge load (ISO 8601)
    pub challenge_ts: Option<String>,

    /// Hostname of the site where the challenge was solved
    pub hostname: Option<String>,

    #[serde(rename = "error-codes")]
    pub error_codes: Vec<String>,
}
