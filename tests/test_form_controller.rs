//! Form controller behaviour against a scripted transport.

use async_trait::async_trait;
use contact_relay::domain::FormField;
use contact_relay::error::{ContactApiError, ContactApiResult};
use contact_relay::models::ContactSubmission;
use contact_relay::{FormController, FormStatus, SubmitOutcome};
use contact_relay::form::SubmissionTransport;
use std::sync::{Arc, Mutex};

/// Replies with a fixed status (or a transport error) and records every payload.
#[derive(Clone)]
struct ScriptedTransport {
    reply: Option<u16>,
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl ScriptedTransport {
    fn replying(status: u16) -> Self {
        Self {
            reply: Some(status),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for ScriptedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<u16> {
        self.sent.lock().unwrap().push(submission.clone());
        self.reply
            .ok_or_else(|| ContactApiError::HttpError("Connection failed".to_string()))
    }
}

fn fill(form: &mut FormController<ScriptedTransport>) {
    form.update_field(FormField::FirstName, "A");
    form.update_field(FormField::LastName, "B");
    form.update_field(FormField::Email, "a@b.com");
    form.update_field(FormField::Message, "hi");
    form.set_captcha_token(Some("tok".to_string()));
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let transport = ScriptedTransport::replying(200);
    let mut form = FormController::new(transport.clone());

    let outcome = form.submit().await;

    match outcome {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![
                    FormField::FirstName,
                    FormField::LastName,
                    FormField::Email,
                    FormField::Message,
                    FormField::Captcha,
                ]
            );
        }
        other => panic!("Expected Invalid, got: {:?}", other),
    }
    assert!(transport.sent().is_empty());
    assert_eq!(form.errors().len(), 5);
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test]
async fn test_successful_submit_clears_form() {
    let transport = ScriptedTransport::replying(200);
    let mut form = FormController::new(transport.clone());
    fill(&mut form);
    form.update_field(FormField::Phone, "555-0100");

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.status().message(), "Message sent successfully!");
    for field in FormField::ALL {
        assert_eq!(form.value(field), "", "field {} not reset", field);
    }
    assert!(form.captcha_token().is_none());
    assert!(!form.is_submit_disabled());

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].first_name, "A");
    assert_eq!(sent[0].phone.as_deref(), Some("555-0100"));
    assert_eq!(sent[0].captcha, "tok");
}

#[tokio::test]
async fn test_rejected_submit_keeps_fields() {
    for status in [400, 405, 500] {
        let transport = ScriptedTransport::replying(status);
        let mut form = FormController::new(transport.clone());
        fill(&mut form);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed, "status {}", status);
        assert_eq!(form.status().message(), "Failed to send message.");
        assert_eq!(form.value(FormField::Message), "hi");
        assert_eq!(form.captcha_token(), Some("tok"));
        assert_eq!(transport.sent().len(), 1);
    }
}

#[tokio::test]
async fn test_transport_error_fails_without_panicking() {
    let transport = ScriptedTransport::unreachable();
    let mut form = FormController::new(transport.clone());
    fill(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert!(!form.is_loading());
    assert_eq!(form.value(FormField::FirstName), "A");
}

#[tokio::test]
async fn test_errors_clear_after_correction() {
    let transport = ScriptedTransport::replying(200);
    let mut form = FormController::new(transport.clone());
    fill(&mut form);
    form.update_field(FormField::Email, "   ");

    assert!(matches!(form.submit().await, SubmitOutcome::Invalid(_)));
    assert_eq!(form.errors().get(FormField::Email), Some("Email is required"));

    form.update_field(FormField::Email, "a@b.com");
    assert_eq!(form.submit().await, SubmitOutcome::Sent);
    assert!(form.errors().is_empty());
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_pending_submit_blocks_second_click() {
    let transport = ScriptedTransport::replying(200);
    let mut form = FormController::new(transport.clone());
    fill(&mut form);

    let submission = form.begin_submit().unwrap();
    assert!(form.is_submit_disabled());
    assert_eq!(form.status(), FormStatus::Sending);

    // Second click while the first request is in flight
    assert_eq!(form.submit().await, SubmitOutcome::Busy);
    assert!(transport.sent().is_empty());

    let result = transport.submit(&submission).await;
    assert_eq!(form.finish_submit(result), SubmitOutcome::Sent);
    assert_eq!(transport.sent().len(), 1);
}
