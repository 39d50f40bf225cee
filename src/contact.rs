//! Contact form: validation, submit status and the relay payload.
//!
//! Delivery is delegated to a [`ContactRelay`]; this module only decides
//! what is sent and how the form reacts to the outcome.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default form-relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Minimum message length after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

const ERR_NAME_REQUIRED: &str = "Por favor, ingresa tu nombre";
const ERR_EMAIL_REQUIRED: &str = "Por favor, ingresa tu email";
const ERR_EMAIL_INVALID: &str = "Ingresa un email válido";
const ERR_MESSAGE_REQUIRED: &str = "Por favor, escribe un mensaje";
const ERR_MESSAGE_SHORT: &str = "El mensaje debe tener al menos 10 caracteres";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Check an address against the form's email rule.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::FullName, Field::Email, Field::Message];

    /// Form control name, matching the relay payload key.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// The values typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Create a filled-in form.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Validate all fields.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.full_name.trim().is_empty() {
            errors.full_name = Some(ERR_NAME_REQUIRED.to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(ERR_EMAIL_REQUIRED.to_string());
        } else if !is_valid_email(&self.email) {
            errors.email = Some(ERR_EMAIL_INVALID.to_string());
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.message = Some(ERR_MESSAGE_REQUIRED.to_string());
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.message = Some(ERR_MESSAGE_SHORT.to_string());
        }

        errors
    }

    /// Build the relay payload.
    pub fn payload(&self, access_key: &str) -> SubmissionPayload {
        SubmissionPayload {
            access_key: access_key.to_string(),
            name: self.full_name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            subject: format!("Nuevo mensaje de {} desde tu Portfolio", self.full_name),
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    /// Check if any field has an error.
    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|f| self.get(*f).is_some())
    }

    /// Error for a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Remove the error for a field.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::FullName => self.full_name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = Field::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|m| format!("{}: {}", field.name(), m)))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

/// JSON body sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

/// The relay's answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Something that delivers contact messages.
pub trait ContactRelay {
    /// Send one message. Transport failures are errors; a delivered but
    /// rejected message is `Ok` with `success: false`.
    fn send(&self, payload: &SubmissionPayload) -> Result<RelayResponse>;
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(FormErrors),
    /// The relay accepted the message
    Sent,
    /// The relay refused the message or could not be reached
    Failed(String),
}

/// A contact form together with its errors and submit status.
#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: FormErrors,
    status: SubmitStatus,
    access_key: String,
}

impl ContactSession {
    /// Create an empty session that signs submissions with `access_key`.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Self::default()
        }
    }

    /// Current values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Current errors.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Current status.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Set a field value; clears that field's error.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Validate and, if valid, send through `relay`.
    pub fn submit(&mut self, relay: &dyn ContactRelay) -> SubmitOutcome {
        if self.status == SubmitStatus::Loading {
            return SubmitOutcome::Failed("a submission is already in progress".to_string());
        }

        let errors = self.form.validate();
        if errors.has_errors() {
            log::debug!("Contact form rejected: {}", errors);
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        self.status = SubmitStatus::Loading;
        let payload = self.form.payload(&self.access_key);

        match relay.send(&payload) {
            Ok(response) if response.success => {
                self.status = SubmitStatus::Success;
                self.form = ContactForm::default();
                SubmitOutcome::Sent
            }
            Ok(response) => {
                let reason = response
                    .message
                    .unwrap_or_else(|| "relay reported failure".to_string());
                log::warn!("Contact relay refused message: {}", reason);
                self.status = SubmitStatus::Error;
                SubmitOutcome::Failed(reason)
            }
            Err(e) => {
                log::error!("Failed to send contact message: {}", e);
                self.status = SubmitStatus::Error;
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Back to idle with errors cleared; the typed values stay.
    pub fn reset(&mut self) {
        self.status = SubmitStatus::Idle;
        self.errors = FormErrors::default();
    }
}

/// Validate a form and send it in one step.
pub fn send_contact(
    form: &ContactForm,
    access_key: &str,
    relay: &dyn ContactRelay,
) -> Result<RelayResponse> {
    let errors = form.validate();
    if errors.has_errors() {
        return Err(Error::Validation(errors.to_string()));
    }
    let response = relay.send(&form.payload(access_key))?;
    if response.success {
        Ok(response)
    } else {
        Err(Error::Relay(
            response
                .message
                .unwrap_or_else(|| "relay reported failure".to_string()),
        ))
    }
}
