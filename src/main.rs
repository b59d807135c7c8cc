//! Contact Relay - main entry point
//!
//! Serves `POST /api/contact`, relaying verified contact form submissions by email.

use anyhow::Result;
use contact_relay::client::{
    AsyncRecaptchaClient, AsyncSendGridClient, CaptchaVerifier, EmailSender,
};
use contact_relay::services::{ContactService, ContactServiceImpl};
use contact_relay::{create_router, AppState, Config, Metrics, RecaptchaClient, SendGridClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG wins; LOG_LEVEL is the simpler knob for deployments
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Relaying contact submissions to {} (timeout: {}s)",
        config.contact_email, config.request_timeout
    );

    let metrics = Metrics::new();

    let verifier = Arc::new(AsyncRecaptchaClient::new(RecaptchaClient::new(
        &config,
        metrics.clone(),
    ))) as Arc<dyn CaptchaVerifier>;
    let sender = Arc::new(AsyncSendGridClient::new(SendGridClient::new(
        &config,
        metrics.clone(),
    ))) as Arc<dyn EmailSender>;

    let service = Arc::new(ContactServiceImpl::new(
        verifier,
        sender,
        config.contact_email.clone(),
        metrics.clone(),
    )) as Arc<dyn ContactService>;

    let router = create_router(Arc::new(AppState::new(service)));

    contact_relay::server::run_server(router, config.bind_addr()?).await?;

    let summary = metrics.summary();
    info!(
        emails_sent = summary.emails_sent_total,
        emails_failed = summary.emails_failed_total,
        captcha_rejected = summary.captcha_rejected_total,
        "Contact relay shutdown complete"
    );
    Ok(())
}
