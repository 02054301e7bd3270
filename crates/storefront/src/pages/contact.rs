//! Contact page controller.
//!
//! Submission is always intercepted: nothing is posted anywhere. A valid
//! submit resets the fields and yields a success notice; an invalid one
//! re-renders the form with each failing field's message.

use askama::Template;

use crate::contact::{ContactForm, ValidationReport, validate};
use crate::views::{ContactFormTemplate, Notice};

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// All fields passed; the form was reset.
    Accepted {
        /// The re-rendered (now empty) form fragment.
        form: String,
        /// The success notice.
        notice: Notice,
    },
    /// At least one field failed; nothing was sent or reset.
    Rejected {
        /// The re-rendered form with per-field error messages.
        form: String,
    },
}

/// The contact page: current field values.
#[derive(Debug, Default)]
pub struct ContactPage {
    form: ContactForm,
}

impl ContactPage {
    /// Create the page with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input event on the name field.
    pub fn name_changed(&mut self, value: &str) {
        self.form.name = value.to_owned();
    }

    /// Input event on the email field.
    pub fn email_changed(&mut self, value: &str) {
        self.form.email = value.to_owned();
    }

    /// Input event on the message field.
    pub fn message_changed(&mut self, value: &str) {
        self.form.message = value.to_owned();
    }

    /// The form with current values and no error messages shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_form(&self) -> askama::Result<String> {
        self.render_with(ValidationReport::default())
    }

    /// Submit attempt: validate all three fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a fragment fails to render.
    pub fn submit(&mut self) -> askama::Result<SubmitOutcome> {
        let report = validate(&self.form);

        if report.is_valid() {
            self.form = ContactForm::default();
            return Ok(SubmitOutcome::Accepted {
                form: self.render_form()?,
                notice: Notice::MessageSent,
            });
        }

        Ok(SubmitOutcome::Rejected {
            form: self.render_with(report)?,
        })
    }

    /// The current field values.
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    fn render_with(&self, errors: ValidationReport) -> askama::Result<String> {
        ContactFormTemplate {
            form: self.form.clone(),
            errors,
        }
        .render()
    }
}
