//! Contact Form State
//!
//! Field bindings plus the `Editing -> Submitting -> Editing` submit cycle.
//! Derives `Store` so the page can bind each input to its own field.

use leptos::prelude::Update;
use reactive_stores::Store;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Role,
    Subject,
    Message,
    InquiryType,
}

impl ContactField {
    /// Fields carrying the HTML `required` marker
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Company => "Company/Organization",
            ContactField::Role => "Your Role",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::InquiryType => "Inquiry Type",
        }
    }
}

/// Snapshot handed to the inquiry desk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Store)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Role => &self.role,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
            ContactField::InquiryType => &self.inquiry_type,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Role => &mut self.role,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
            ContactField::InquiryType => &mut self.inquiry_type,
        }
    }

    /// First required field left blank
    pub fn missing_required(&self) -> Option<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(ContactField),
    AlreadySubmitting,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "{} is required", field.label()),
            FormError::AlreadySubmitting => write!(f, "A message is already being sent"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub phase: FormPhase,
}

impl ContactFormState {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Enter `Submitting` and return what to send
    pub fn begin_submit(&mut self) -> Result<ContactForm, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if let Some(field) = self.form.missing_required() {
            return Err(FormError::MissingField(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(self.form.clone())
    }

    /// Sending failed; keep what was typed
    pub fn submit_failed(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Clear every field and go back to `Editing`
    pub fn finish_submit(&mut self) {
        self.form = ContactForm::default();
        self.phase = FormPhase::Editing;
    }
}

/// Apply the inquiry outcome to the page's store. Returns `false` when the
/// store was disposed while the message was in flight.
pub fn settle_submit(store: Store<ContactFormState>, delivered: bool) -> bool {
    store
        .try_update(|state| {
            if delivered {
                state.finish_submit();
            } else {
                state.submit_failed();
            }
        })
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::{GetUntracked, Owner};

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.set(ContactField::Name, "Ada Lovelace");
        state.set(ContactField::Email, "ada@example.com");
        state.set(ContactField::Company, "Analytical Engines");
        state.set(ContactField::Role, "CTO");
        state.set(ContactField::Subject, "Demo request");
        state.set(ContactField::Message, "Please show us the dashboard.");
        state.set(ContactField::InquiryType, "demo");
        state
    }

    #[test]
    fn test_submit_cycle_resets_every_field() {
        let mut state = filled();

        let sent = state.begin_submit().unwrap();
        assert_eq!(state.phase, FormPhase::Submitting);
        assert_eq!(sent.subject, "Demo request");
        assert_eq!(sent.inquiry_type, "demo");

        state.finish_submit();
        assert_eq!(state.phase, FormPhase::Editing);
        assert_eq!(state.form, ContactForm::default());
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Company,
            ContactField::Role,
            ContactField::Subject,
            ContactField::Message,
            ContactField::InquiryType,
        ] {
            assert_eq!(state.form.field(field), "");
        }
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(FormError::AlreadySubmitting));
    }

    #[test]
    fn test_missing_required_field() {
        let mut state = filled();
        state.set(ContactField::Subject, "   ");
        assert_eq!(
            state.begin_submit(),
            Err(FormError::MissingField(ContactField::Subject))
        );
        assert_eq!(state.phase, FormPhase::Editing);
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let mut state = filled();
        state.set(ContactField::Company, "");
        state.set(ContactField::Role, "");
        state.set(ContactField::InquiryType, "");
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.submit_failed();
        assert_eq!(state.phase, FormPhase::Editing);
        assert_eq!(state.form.name, "Ada Lovelace");
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = FormError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "Email Address is required");
    }

    #[test]
    fn test_settle_submit_clears_live_store() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(filled()));
        store.update(|state| {
            state.begin_submit().unwrap();
        });

        assert!(settle_submit(store, true));
        let state = store.get_untracked();
        assert_eq!(state.phase, FormPhase::Editing);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_settle_submit_after_page_left() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(filled()));
        owner.cleanup();

        assert!(!settle_submit(store, true));
        assert!(!settle_submit(store, false));
    }
}
