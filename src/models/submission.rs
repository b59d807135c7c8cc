//! Contact form submission payload.

use serde::{Deserialize, Serialize};

/// One contact form payload, as posted to `/api/contact`.
///
/// Deserialization is lenient: absent fields become empty strings. The relay
/// only uses the fields to build the email and the verification request, so
/// completeness is enforced by the form, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,

    pub last_name: String,

    /// Submitter address, used as the reply-to of the relayed email
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub message: String,

    /// Token produced by the CAPTCHA widget
    pub captcha: String,
}

impl ContactSubmission {
    /// "First Last", as shown in the subject and body of the relayed email.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
