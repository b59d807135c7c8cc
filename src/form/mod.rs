//! Contact form controller.
//!
//! Holds the contact form's field state, validates it locally and submits it
//! to `/api/contact` through a [`SubmissionTransport`]. The controller is UI
//! agnostic: a front end renders [`FormController::status`] and
//! [`FormController::errors`] and forwards input events.

mod controller;
mod validation;

pub use controller::{FormController, FormStatus, SubmitOutcome};
pub use validation::FieldErrors;

use crate::error::ContactApiResult;
use crate::models::ContactSubmission;
use async_trait::async_trait;

/// Delivers a submission to the contact endpoint.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send one submission and return the HTTP status of the response.
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<u16>;
}
