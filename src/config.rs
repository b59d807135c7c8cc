//! Configuration management for the contact relay.
//!
//! Configuration is read once from the process environment at startup (after
//! loading a `.env` file if one exists) and passed explicitly to the provider
//! clients. Nothing is read from the environment after that.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Default reCAPTCHA verification endpoint.
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default SendGrid API base URL.
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// SendGrid API key (bearer token)
    pub sendgrid_api_key: String,

    /// SendGrid API base URL
    pub sendgrid_api_url: String,

    /// reCAPTCHA shared secret
    pub recaptcha_secret: String,

    /// reCAPTCHA siteverify URL
    pub recaptcha_verify_url: String,

    /// Address that receives and sends every contact email
    pub contact_email: EmailAddress,

    /// Timeout for each outbound call, in seconds (default: 10)
    pub request_timeout: u64,

    /// Interface to bind (default: 0.0.0.0)
    pub host: String,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SENDGRID_API_KEY`: SendGrid API key
    /// - `RECAPTCHA_SECRET_KEY`: reCAPTCHA shared secret
    /// - `CONTACT_EMAIL`: contact address (recipient and sender)
    ///
    /// Optional environment variables:
    /// - `SENDGRID_API_URL`: SendGrid base URL (default: https://api.sendgrid.com)
    /// - `RECAPTCHA_VERIFY_URL`: siteverify URL (default: Google's)
    /// - `REQUEST_TIMEOUT`: outbound timeout in seconds (default: 10)
    /// - `HOST`: bind address (default: 0.0.0.0)
    /// - `PORT`: listen port (default: 3000)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; real deployments set the environment directly.
        let _ = dotenvy::dotenv();

        let sendgrid_api_key = Self::required_secret("SENDGRID_API_KEY")?;
        let recaptcha_secret = Self::required_secret("RECAPTCHA_SECRET_KEY")?;

        let contact_email = env::var("CONTACT_EMAIL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_EMAIL".to_string()))?;
        let contact_email =
            EmailAddress::new(contact_email).map_err(|e| ConfigError::InvalidValue {
                var: "CONTACT_EMAIL".to_string(),
                reason: e.to_string(),
            })?;

        let sendgrid_api_url = Self::parse_env_url("SENDGRID_API_URL", DEFAULT_SENDGRID_API_URL)?;
        let recaptcha_verify_url =
            Self::parse_env_url("RECAPTCHA_VERIFY_URL", DEFAULT_RECAPTCHA_VERIFY_URL)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = Self::parse_env_u16("PORT", 3000)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            sendgrid_api_key,
            sendgrid_api_url,
            recaptcha_secret,
            recaptcha_verify_url,
            contact_email,
            request_timeout,
            host,
            port,
            log_level,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("Not a valid bind address: {}", self.host),
            })
    }

    /// Read a required, non-blank secret.
    fn required_secret(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Read an optional http(s) URL with a default value.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number (0-65535), got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}
