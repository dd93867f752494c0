use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::events::EventSender;

pub mod mock;
pub mod web3forms;

pub use mock::MockRelay;
pub use web3forms::Web3FormsRelay;

/// Trait implemented by every form-relay backend
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver one message. A single attempt, no retry.
    async fn submit(&self, form: &ContactForm) -> Result<RelayResponse, ContactError>;
}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// First required field that is still blank
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body returned by the relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome shown in the contact pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    /// Collapse a relay result into the three user-visible states
    pub fn from_result(result: &Result<RelayResponse, ContactError>) -> Self {
        match result {
            Ok(resp) if resp.success => SubmitStatus::Success,
            _ => SubmitStatus::Error,
        }
    }

    pub fn banner(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some("Message sent successfully! I'll get back to you soon."),
            SubmitStatus::Error => Some("Failed to send message. Please try again later."),
        }
    }
}

/// Errors that can occur while sending the form
#[derive(Error, Debug, Clone)]
pub enum ContactError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid relay response: {0}")]
    Decode(String),

    #[error("Relay configuration error: {0}")]
    Configuration(String),
}

/// Contact pane state: the form, the in-flight flag and the last outcome
pub struct ContactDesk {
    pub form: ContactForm,
    pub focused: FormField,
    status: SubmitStatus,
    submitting: bool,
    relay: Arc<dyn FormRelay>,
    event_sender: EventSender,
}

impl ContactDesk {
    pub fn new(relay: Arc<dyn FormRelay>, event_sender: EventSender) -> Self {
        Self {
            form: ContactForm::default(),
            focused: FormField::Name,
            status: SubmitStatus::Idle,
            submitting: false,
            relay,
            event_sender,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focus_next(&mut self) {
        let i = FormField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = FormField::ALL[(i + 1) % FormField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::ALL.len();
        let i = FormField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = FormField::ALL[(i + len - 1) % len];
    }

    /// Edits are refused while a submission is in flight
    pub fn insert_char(&mut self, c: char) {
        if !self.submitting {
            self.form.field_mut(self.focused).push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if !self.submitting {
            self.form.field_mut(self.focused).pop();
        }
    }

    /// Start sending the form on a background task.
    ///
    /// Returns false (and moves focus to the blank field) if the form is
    /// incomplete, or if a submission is already running.
    pub fn submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        if let Some(field) = self.form.missing_field() {
            self.focused = field;
            return false;
        }

        self.submitting = true;
        self.status = SubmitStatus::Idle;

        let relay = self.relay.clone();
        let sender = self.event_sender.clone();
        let form = self.form.clone();
        tokio::spawn(async move {
            let result = relay.submit(&form).await;
            if let Err(e) = &result {
                warn!("Contact form submission failed: {}", e);
            }
            let status = SubmitStatus::from_result(&result);
            if sender.send_contact_result(status).is_err() {
                debug!("Event bus closed before contact result arrived");
            }
        });
        true
    }

    /// Apply the result reported by the background task
    pub fn finish(&mut self, status: SubmitStatus) {
        self.submitting = false;
        self.status = status;
        if status == SubmitStatus::Success {
            self.form.clear();
            self.focused = FormField::Name;
        }
    }
}

#[cfg(test)]
mod tests;
