//! Application service layer.
//!
//! Services contain the submission logic and orchestrate the external
//! providers. They sit between the HTTP handler and the provider clients.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
