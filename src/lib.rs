//! Contact Relay - the server side and form logic of a website contact page.
//!
//! The relay accepts contact form submissions on `POST /api/contact`, verifies
//! the attached reCAPTCHA token, and forwards the message by email through
//! SendGrid. The [`form`] module holds the matching client-side form logic.
//!
//! # Architecture
//!
//! - **config**: Configuration from environment variables
//! - **error**: Error types per concern
//! - **domain**: Validated value objects (contact address, form fields)
//! - **models**: Wire types for submissions, emails and provider replies
//! - **client**: reCAPTCHA, SendGrid and contact endpoint HTTP clients
//! - **services**: The verify-then-send submission sequence
//! - **server**: axum router and handlers
//! - **form**: Form state, validation and submission
//! - **metrics**: Counters for provider calls and outcomes

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;

pub use client::{RecaptchaClient, SendGridClient};
pub use config::Config;
pub use error::{ConfigError, ContactApiError, ProviderError, SubmissionError};
pub use form::{FormController, FormStatus, SubmitOutcome};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ApiMessage, ContactSubmission, EmailMessage};
pub use server::{create_router, AppState};
