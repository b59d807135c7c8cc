//! Response body of the contact endpoint.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }`, the body of every `/api/contact` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
