//! Contact form
//!
//! Field validation and the simulated submission. Nothing is sent
//! anywhere: submitting walks a fixed timeline (sending, success shown,
//! form reset, form shown again) driven by the caller's clock.

use crate::builder::scheduler::Scheduler;
use crate::error::Result;
use regex::Regex;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Input field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Service,
    Message,
    Privacy,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Service,
        Field::Message,
        Field::Privacy,
    ];

    /// Identifier of the field on the page
    pub fn id(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Service => "service",
            Field::Message => "message",
            Field::Privacy => "privacy",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone | Field::Company)
    }

    pub fn label(&self, locale: &str) -> Cow<'static, str> {
        match self {
            Field::FirstName => t!("contact_first_name", locale = locale),
            Field::LastName => t!("contact_last_name", locale = locale),
            Field::Email => t!("contact_email", locale = locale),
            Field::Phone => t!("contact_phone", locale = locale),
            Field::Company => t!("contact_company", locale = locale),
            Field::Service => t!("contact_service", locale = locale),
            Field::Message => t!("contact_message", locale = locale),
            Field::Privacy => t!("contact_privacy", locale = locale),
        }
    }

    /// Message shown under an invalid field; optional fields have none
    pub fn error_message(&self, locale: &str) -> Option<Cow<'static, str>> {
        let message = match self {
            Field::FirstName => t!("contact_error_first_name", locale = locale),
            Field::LastName => t!("contact_error_last_name", locale = locale),
            Field::Email => t!("contact_error_email", locale = locale),
            Field::Service => t!("contact_error_service", locale = locale),
            Field::Message => t!("contact_error_message", locale = locale),
            Field::Privacy => t!("contact_error_privacy", locale = locale),
            Field::Phone | Field::Company => return None,
        };
        Some(message)
    }
}

/// Values entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub privacy: bool,
}

impl ContactForm {
    /// Text value of a field; `None` for the privacy checkbox
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Company => Some(&self.company),
            Field::Service => Some(&self.service),
            Field::Message => Some(&self.message),
            Field::Privacy => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Company => Some(&mut self.company),
            Field::Service => Some(&mut self.service),
            Field::Message => Some(&mut self.message),
            Field::Privacy => None,
        }
    }
}

/// Field rules: required, email shape, required checkbox
#[derive(Debug, Clone)]
pub struct Validator {
    email: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn is_valid(&self, form: &ContactForm, field: Field) -> bool {
        match form.text(field) {
            None => !field.is_required() || form.privacy,
            Some(value) => {
                let value = value.trim();
                if field.is_required() && value.is_empty() {
                    return false;
                }
                if field == Field::Email && !value.is_empty() {
                    return self.email.is_match(value);
                }
                true
            }
        }
    }

    /// Invalid fields in form order
    pub fn validate(&self, form: &ContactForm) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_valid(form, *field))
            .collect()
    }
}

/// Delays of the simulated submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTiming {
    /// "Sending" until the success message appears
    pub sending: Duration,
    /// Success message shown until the form is cleared
    pub reset: Duration,
    /// Cleared form hidden until it is shown again
    pub reshow: Duration,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self {
            sending: Duration::from_millis(2000),
            reset: Duration::from_millis(1000),
            reshow: Duration::from_millis(5000),
        }
    }
}

/// Where the form is in the submission timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    /// Submit control disabled and labelled "sending"
    Sending,
    /// Form hidden, success message visible
    Succeeded { form_reset: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ShowSuccess,
    ResetForm,
    ShowForm,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    /// Fields that failed validation, first one should receive focus
    Invalid(Vec<Field>),
    /// A submission is already running
    Busy,
}

/// Contact form with its validation state and submission timeline
#[derive(Debug, Clone)]
pub struct ContactSession {
    pub form: ContactForm,
    validator: Validator,
    invalid: Vec<Field>,
    phase: SubmitPhase,
    timing: SubmitTiming,
    scheduler: Scheduler<Stage>,
}

impl ContactSession {
    pub fn new(timing: SubmitTiming) -> Result<Self> {
        Ok(Self {
            form: ContactForm::default(),
            validator: Validator::new()?,
            invalid: Vec::new(),
            phase: SubmitPhase::Editing,
            timing,
            scheduler: Scheduler::new(),
        })
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn invalid_fields(&self) -> &[Field] {
        &self.invalid
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Re-check one field, as on leaving it
    pub fn check_field(&mut self, field: Field) -> bool {
        let valid = self.validator.is_valid(&self.form, field);
        self.invalid.retain(|f| *f != field);
        if !valid {
            self.invalid.push(field);
            self.invalid.sort_by_key(|f| Field::ALL.iter().position(|a| a == f));
        }
        valid
    }

    /// Re-check a field while typing, only if it is already marked invalid
    pub fn recheck_if_invalid(&mut self, field: Field) {
        if self.is_invalid(field) {
            self.check_field(field);
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.phase != SubmitPhase::Editing {
            return SubmitOutcome::Busy;
        }
        self.invalid = self.validator.validate(&self.form);
        if !self.invalid.is_empty() {
            debug!(invalid = ?self.invalid, "Contact form rejected");
            return SubmitOutcome::Invalid(self.invalid.clone());
        }
        info!("Contact form submitted");
        self.phase = SubmitPhase::Sending;
        self.scheduler.schedule(now, self.timing.sending, Stage::ShowSuccess);
        SubmitOutcome::Started
    }

    /// Advance the submission timeline
    pub fn tick(&mut self, now: Instant) {
        for (_, stage) in self.scheduler.poll(now) {
            match stage {
                Stage::ShowSuccess => {
                    self.phase = SubmitPhase::Succeeded { form_reset: false };
                    self.scheduler.schedule(now, self.timing.reset, Stage::ResetForm);
                }
                Stage::ResetForm => {
                    self.form = ContactForm::default();
                    self.invalid.clear();
                    self.phase = SubmitPhase::Succeeded { form_reset: true };
                    self.scheduler.schedule(now, self.timing.reshow, Stage::ShowForm);
                }
                Stage::ShowForm => {
                    self.phase = SubmitPhase::Editing;
                }
            }
            debug!(?stage, phase = ?self.phase, "Contact submission advanced");
        }
    }
}
