//! Contact form fields.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// One input of the contact form.
///
/// Ordering follows the on-page layout, so error maps keyed by field iterate
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    Captcha,
}

impl FormField {
    /// Every field, in layout order.
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
        FormField::Captcha,
    ];

    /// Look up a field by its input name (`firstName`, `lastName`, ...).
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "firstName" => Ok(FormField::FirstName),
            "lastName" => Ok(FormField::LastName),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" => Ok(FormField::Message),
            "captcha" => Ok(FormField::Captcha),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }

    /// Input name, matching the JSON key used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
            FormField::Captcha => "captcha",
        }
    }

    /// Message shown under the input when it fails validation.
    ///
    /// `None` for the optional phone field, which never fails.
    pub fn required_message(&self) -> Option<&'static str> {
        match self {
            FormField::FirstName => Some("First name is required"),
            FormField::LastName => Some("Last name is required"),
            FormField::Email => Some("Email is required"),
            FormField::Message => Some("Message cannot be empty"),
            FormField::Captcha => Some("Please verify you're not a robot"),
            FormField::Phone => None,
        }
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
