//! Contact form state, anti-spam guard, and submission state machine.
//!
//! DESIGN
//! ======
//! Status moves `Idle -> Sending -> {Success | Error} -> Idle`. A submission
//! rejected by the guard jumps straight to `Success` without touching the
//! relay, so automated senders see the same outcome as humans and learn
//! nothing about the filter. Both terminal states revert to `Idle` on a
//! timer owned by the view.
//!
//! The guard runs in a fixed order: honeypot, dwell time, session ceiling,
//! content signatures. Field validation runs first and is not part of it.
//!
//! TRADE-OFFS
//! ==========
//! Absorbed submissions are indistinguishable from delivered ones for the
//! sender, including real people whose message trips a content signature.
//! Rejections are logged at `info` so the operator can spot false positives.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::net::api::{ApiError, ContactRelay};
use crate::net::types::RelayPayload;
use crate::util::spam::{self, SpamSignal};
use crate::util::validation::{Field, FieldErrors, validate_fields};

/// Minimum time between form render and submit.
pub const MIN_DWELL_MS: f64 = 3000.0;
/// Forwarded submissions allowed per page lifetime.
pub const MAX_SUBMISSIONS: u32 = 3;
/// How long `Success` stays on screen.
pub const SUCCESS_RESET_MS: u32 = 5000;
/// How long `Error` stays on screen.
pub const ERROR_RESET_MS: u32 = 3000;
/// How long an admin sign-in error line stays on screen.
pub const ADMIN_ERROR_DISMISS_MS: u32 = 4000;

const RELAY_TEMPLATE: &str = "table";

/// Raw form input. `honeypot` is bound to a field hidden from humans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn combined_text(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.email, self.message)
    }

    fn to_payload(&self) -> RelayPayload {
        let name = self.name.trim().to_owned();
        RelayPayload {
            subject: format!("Portfolio contact from {name}"),
            name,
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
            template: RELAY_TEMPLATE.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Delay before this status auto-reverts to `Idle`, if it does.
    #[must_use]
    pub fn reset_delay_ms(self) -> Option<u32> {
        match self {
            Self::Success => Some(SUCCESS_RESET_MS),
            Self::Error => Some(ERROR_RESET_MS),
            Self::Idle | Self::Sending => None,
        }
    }
}

/// Why the guard refused to forward a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    Honeypot,
    TooFast { elapsed_ms: f64 },
    RateLimited,
    Spam(SpamSignal),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Honeypot => write!(f, "honeypot field filled"),
            Self::TooFast { elapsed_ms } => write!(f, "submitted {elapsed_ms:.0}ms after render"),
            Self::RateLimited => write!(f, "session limit of {MAX_SUBMISSIONS} reached"),
            Self::Spam(signal) => write!(f, "content matched {signal:?}"),
        }
    }
}

/// Decide whether `form` may reach the relay.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies.
pub fn screen(form: &ContactForm, rendered_at_ms: f64, now_ms: f64, submit_count: u32) -> Result<(), Rejection> {
    if !form.honeypot.is_empty() {
        return Err(Rejection::Honeypot);
    }
    let elapsed_ms = now_ms - rendered_at_ms;
    if elapsed_ms < MIN_DWELL_MS {
        return Err(Rejection::TooFast { elapsed_ms });
    }
    if submit_count >= MAX_SUBMISSIONS {
        return Err(Rejection::RateLimited);
    }
    match spam::detect(&form.combined_text()) {
        Some(signal) => Err(Rejection::Spam(signal)),
        None => Ok(()),
    }
}

/// What the view should do after a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    /// A submission is already in flight; ignore the click.
    Busy,
    /// Field errors are now set on the state.
    Invalid,
    /// Silently dropped; status is already `Success`.
    Absorbed(Rejection),
    /// Status is `Sending`; deliver this payload and report back.
    Forward(RelayPayload),
}

/// Everything the contact section renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    pub submit_count: u32,
    pub rendered_at_ms: f64,
}

impl ContactState {
    #[must_use]
    pub fn new(rendered_at_ms: f64) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            submit_count: 0,
            rendered_at_ms,
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Store new input for `field` and drop its inline error.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Message => self.form.message = value,
        }
        self.errors.clear(field);
    }

    pub fn set_honeypot(&mut self, value: String) {
        self.form.honeypot = value;
    }

    /// Validate, screen, and transition for a submit at `now_ms`.
    pub fn begin_submit(&mut self, now_ms: f64) -> SubmitDecision {
        if self.is_sending() {
            return SubmitDecision::Busy;
        }

        self.errors = validate_fields(&self.form.name, &self.form.email, &self.form.message);
        if !self.errors.is_empty() {
            return SubmitDecision::Invalid;
        }

        if let Err(rejection) = screen(&self.form, self.rendered_at_ms, now_ms, self.submit_count) {
            log::info!("contact submission absorbed: {rejection}");
            self.form.clear();
            self.status = SubmitStatus::Success;
            return SubmitDecision::Absorbed(rejection);
        }

        self.submit_count += 1;
        self.status = SubmitStatus::Sending;
        SubmitDecision::Forward(self.form.to_payload())
    }

    /// Record the relay outcome for the in-flight submission.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        if !self.is_sending() {
            return;
        }
        match result {
            Ok(()) => {
                self.form.clear();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                log::warn!("contact relay failed: {e}");
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// Timer callback: return a terminal status to `Idle`.
    pub fn reset_status(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Run one full submit against `relay`, returning the resulting status.
pub async fn submit_contact<R: ContactRelay>(state: &mut ContactState, now_ms: f64, relay: &R) -> SubmitStatus {
    if let SubmitDecision::Forward(payload) = state.begin_submit(now_ms) {
        let result = relay.forward(&payload).await;
        state.finish_submit(&result);
    }
    state.status
}
