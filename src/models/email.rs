//! Outbound email built from a contact submission.

use super::submission::ContactSubmission;
use crate::domain::EmailAddress;
use serde::Serialize;

/// A plain-text message handed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

impl EmailMessage {
    /// Build the notification for one submission.
    ///
    /// The contact address is both sender and recipient; replies go to the
    /// submitter. The phone number is not part of the message.
    pub fn for_submission(contact_address: &EmailAddress, submission: &ContactSubmission) -> Self {
        let name = submission.full_name();

        Self {
            to: contact_address.to_string(),
            from: contact_address.to_string(),
            reply_to: submission.email.clone(),
            subject: format!("New Contact Form Submission from {}", name),
            text: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                name, submission.email, submission.message
            ),
        }
    }
}

/// SendGrid v3 `mail/send` request body.
#[derive(Debug, Serialize)]
pub struct SendGridMailRequest {
    pub personalizations: Vec<Personalization>,
    pub from: MailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<MailAddress>,
    pub subject: String,
    pub content: Vec<MailContent>,
}

#[derive(Debug, Serialize)]
pub struct Personalization {
    pub to: Vec<MailAddress>,
}

#[derive(Debug, Serialize)]
pub struct MailAddress {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MailContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl From<&EmailMessage> for SendGridMailRequest {
    fn from(message: &EmailMessage) -> Self {
        // SendGrid rejects an empty reply_to object, so omit it instead.
        let reply_to = (!message.reply_to.trim().is_empty()).then(|| MailAddress {
            email: message.reply_to.clone(),
        });

        Self {
            personalizations: vec![Personalization {
                to: vec![MailAddress {
                    email: message.to.clone(),
                }],
            }],
            from: MailAddress {
                email: message.from.clone(),
            },
            reply_to,
            subject: message.subject.clone(),
            content: vec![MailContent {
                content_type: "text/plain".to_string(),
                value: message.text.clone(),
            }],
        }
    }
}
