//! Form state and the submit state machine.

use super::{FieldErrors, SubmissionTransport};
use crate::domain::{FormField, ValidationError};
use crate::error::ContactApiResult;
use crate::models::ContactSubmission;

/// Status line shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Message sent successfully!",
            FormStatus::Failed => "Failed to send message.",
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing was sent.
    Busy,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default)]
struct FormData {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    message: String,
}

/// Contact form controller.
///
/// Submitting is split into [`begin_submit`](Self::begin_submit) and
/// [`finish_submit`](Self::finish_submit) so an event-loop front end can keep
/// the submit control disabled while the request is pending;
/// [`submit`](Self::submit) runs both around one transport call.
pub struct FormController<T> {
    transport: T,
    data: FormData,
    captcha: Option<String>,
    errors: FieldErrors,
    status: FormStatus,
    loading: bool,
}

impl<T: SubmissionTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            data: FormData::default(),
            captcha: None,
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
            loading: false,
        }
    }

    /// Set one field. Setting [`FormField::Captcha`] stores the token.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.data.first_name = value,
            FormField::LastName => self.data.last_name = value,
            FormField::Email => self.data.email = value,
            FormField::Phone => self.data.phone = value,
            FormField::Message => self.data.message = value,
            FormField::Captcha => self.set_captcha_token(Some(value)),
        }
    }

    /// Set a field by its input name, as delivered by a change event.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let field = FormField::from_name(name)?;
        self.update_field(field, value);
        Ok(())
    }

    /// CAPTCHA widget callback. `None` means the token expired or was reset.
    pub fn set_captcha_token(&mut self, token: Option<String>) {
        self.captcha = token.filter(|t| !t.is_empty());
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.data.first_name,
            FormField::LastName => &self.data.last_name,
            FormField::Email => &self.data.email,
            FormField::Phone => &self.data.phone,
            FormField::Message => &self.data.message,
            FormField::Captcha => self.captcha.as_deref().unwrap_or(""),
        }
    }

    pub fn captcha_token(&self) -> Option<&str> {
        self.captcha.as_deref()
    }

    /// Errors from the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.loading
    }

    /// Check the current state without changing it.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for field in [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Message,
        ] {
            if self.value(field).trim().is_empty() {
                errors.insert_required(field);
            }
        }

        if self.captcha.is_none() {
            errors.insert_required(FormField::Captcha);
        }

        errors
    }

    /// Snapshot of the current state as a wire payload.
    pub fn submission(&self) -> ContactSubmission {
        let phone = (!self.data.phone.trim().is_empty()).then(|| self.data.phone.clone());

        ContactSubmission {
            first_name: self.data.first_name.clone(),
            last_name: self.data.last_name.clone(),
            email: self.data.email.clone(),
            phone,
            message: self.data.message.clone(),
            captcha: self.captcha.clone().unwrap_or_default(),
        }
    }

    /// Validate and, if valid, enter the pending state.
    ///
    /// Returns the payload to send, or the outcome that stops the submission.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitOutcome> {
        if self.loading {
            return Err(SubmitOutcome::Busy);
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            return Err(SubmitOutcome::Invalid(self.errors.clone()));
        }

        self.loading = true;
        self.status = FormStatus::Sending;
        Ok(self.submission())
    }

    /// Leave the pending state with the transport's result.
    ///
    /// On a 2xx response every field and the CAPTCHA token are cleared; on any
    /// other status or a transport error the fields are kept for another try.
    pub fn finish_submit(&mut self, result: ContactApiResult<u16>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(status) if (200..300).contains(&status) => {
                self.status = FormStatus::Sent;
                self.data = FormData::default();
                self.captcha = None;
                SubmitOutcome::Sent
            }
            Ok(status) => {
                tracing::warn!(status, "Contact endpoint refused submission");
                self.status = FormStatus::Failed;
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact submission request failed");
                self.status = FormStatus::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, send exactly one request, and record the result.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = self.transport.submit(&submission).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactApiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingTransport {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SubmissionTransport for CountingTransport {
        async fn submit(&self, _submission: &ContactSubmission) -> ContactApiResult<u16> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(200)
        }
    }

    fn filled() -> FormController<CountingTransport> {
        let mut form = FormController::new(CountingTransport::default());
        form.update_field(FormField::FirstName, "A");
        form.update_field(FormField::LastName, "B");
        form.update_field(FormField::Email, "a@b.com");
        form.update_field(FormField::Message, "hi");
        form.set_captcha_token(Some("tok".to_string()));
        form
    }

    #[test]
    fn test_empty_form_fails_every_required_field() {
        let form = FormController::new(CountingTransport::default());
        let errors = form.validate();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(FormField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Message), Some("Message cannot be empty"));
        assert!(errors.contains(FormField::Captcha));
        assert!(!errors.contains(FormField::Phone));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_whitespace_only_fails() {
        let mut form = filled();
        form.update_field(FormField::Message, "  \n\t ");
        let errors = form.validate();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::Message]);
    }

    #[test]
    fn test_empty_captcha_token_counts_as_missing() {
        let mut form = filled();
        form.set_captcha_token(Some(String::new()));
        assert!(form.captcha_token().is_none());
        assert!(form.validate().contains(FormField::Captcha));
    }

    #[test]
    fn test_validate_is_pure() {
        let form = FormController::new(CountingTransport::default());
        let _ = form.validate();
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_update_field_by_name() {
        let mut form = FormController::new(CountingTransport::default());
        form.update_field_by_name("firstName", "Ada").unwrap();
        form.update_field_by_name("captcha", "tok").unwrap();
        assert_eq!(form.value(FormField::FirstName), "Ada");
        assert_eq!(form.captcha_token(), Some("tok"));
        assert!(form.update_field_by_name("company", "x").is_err());
    }

    #[test]
    fn test_submission_omits_blank_phone() {
        let mut form = filled();
        assert!(form.submission().phone.is_none());

        form.update_field(FormField::Phone, "555-0100");
        let submission = form.submission();
        assert_eq!(submission.phone.as_deref(), Some("555-0100"));
        assert_eq!(submission.captcha, "tok");
    }

    #[test]
    fn test_begin_submit_twice_is_busy() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submit_disabled());
        assert_eq!(form.status().message(), "Sending...");
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Busy));
    }

    #[test]
    fn test_finish_submit_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Err(ContactApiError::Timeout));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.status().message(), "Failed to send message.");
        assert!(!form.is_loading());
        assert_eq!(form.value(FormField::FirstName), "A");
        assert_eq!(form.captcha_token(), Some("tok"));
    }

    #[test]
    fn test_submit_with_block_on() {
        let mut form = filled();
        let calls = form.transport.calls.clone();

        let outcome = tokio_test::block_on(form.submit());
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.status().message(), "Message sent successfully!");
    }
}
