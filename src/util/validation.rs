//! Contact form field validation.
//!
//! Ordinary form checks, run before the anti-spam guard. Results are shown
//! inline next to each field and never logged.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    /// Translation key for the inline message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::NameRequired => "contact.errors.name_required",
            Self::EmailRequired => "contact.errors.email_required",
            Self::EmailInvalid => "contact.errors.email_invalid",
            Self::MessageRequired => "contact.errors.message_required",
            Self::MessageTooShort => "contact.errors.message_too_short",
        }
    }
}

/// Per-field validation outcome; `None` means the field is fine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Drop the error for `field` once the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

/// Validate the visible contact fields.
#[must_use]
pub fn validate_fields(name: &str, email: &str, message: &str) -> FieldErrors {
    let name = name.trim().is_empty().then_some(FieldError::NameRequired);

    let email = if email.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    };

    let message = if message.trim().is_empty() {
        Some(FieldError::MessageRequired)
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Some(FieldError::MessageTooShort)
    } else {
        None
    };

    FieldErrors { name, email, message }
}
