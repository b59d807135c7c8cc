//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact address the relay sends from and to,
//! and the fixed set of contact form fields.

pub mod email;
pub mod errors;
pub mod field;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::FormField;
