//! Contact form validation.
//!
//! Validation is stateless: every submit attempt re-runs all three
//! predicates on the trimmed field values and reports per-field results.
//! Nothing is validated as the user types.

use daily_grind_core::Email;

/// Error shown for a name shorter than two characters.
pub const NAME_ERROR: &str = "Please enter your full name (2+ chars).";
/// Error shown for a structurally invalid email address.
pub const EMAIL_ERROR: &str = "Please enter a valid email address (e.g., user@domain.com).";
/// Error shown for a message shorter than ten characters.
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long.";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Raw contact-form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation result for one submit attempt.
///
/// `None` means the field passed and its error slot should be cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationReport {
    /// Whether every field passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Validate a submit attempt.
///
/// The three predicates are independent: each failing field gets its own
/// message and passing fields stay clear.
#[must_use]
pub fn validate(form: &ContactForm) -> ValidationReport {
    let name_ok = form.name.trim().chars().count() >= MIN_NAME_CHARS;
    let email_ok = Email::parse(form.email.trim()).is_ok();
    let message_ok = form.message.trim().chars().count() >= MIN_MESSAGE_CHARS;

    ValidationReport {
        name: (!name_ok).then_some(NAME_ERROR),
        email: (!email_ok).then_some(EMAIL_ERROR),
        message: (!message_ok).then_some(MESSAGE_ERROR),
    }
}
