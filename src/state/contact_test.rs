use super::*;
use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use crate::util::validation::FieldError;

/// Relay fake that records every payload it is handed.
#[derive(Default)]
struct RecordingRelay {
    calls: RefCell<Vec<RelayPayload>>,
    fail_with: Cell<Option<u16>>,
}

impl RecordingRelay {
    fn failing(status: u16) -> Self {
        let relay = Self::default();
        relay.fail_with.set(Some(status));
        relay
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ContactRelay for RecordingRelay {
    async fn forward(&self, payload: &RelayPayload) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(payload.clone());
        match self.fail_with.get() {
            Some(status) => Err(ApiError::Status { service: "relay", status }),
            None => Ok(()),
        }
    }
}

const RENDERED_AT: f64 = 1_000.0;
const LATER: f64 = RENDERED_AT + MIN_DWELL_MS + 500.0;

fn filled(message: &str) -> ContactState {
    let mut state = ContactState::new(RENDERED_AT);
    state.edit(Field::Name, "Jo".to_owned());
    state.edit(Field::Email, "jo@x.com".to_owned());
    state.edit(Field::Message, message.to_owned());
    state
}

fn legit() -> ContactState {
    filled("Hello, I'd like to discuss a project with you.")
}

// =============================================================
// Guard: fail-open deception
// =============================================================

#[test]
fn honeypot_submission_shows_success_without_network() {
    let relay = RecordingRelay::default();
    let mut state = legit();
    state.set_honeypot("http://bot.example".to_owned());

    let status = block_on(submit_contact(&mut state, LATER, &relay));

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(relay.call_count(), 0);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn submission_before_dwell_time_is_absorbed() {
    let relay = RecordingRelay::default();
    let mut state = legit();

    let status = block_on(submit_contact(&mut state, RENDERED_AT + MIN_DWELL_MS - 1.0, &relay));

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(relay.call_count(), 0);
}

#[test]
fn submission_at_exact_dwell_time_is_forwarded() {
    let relay = RecordingRelay::default();
    let mut state = legit();
    block_on(submit_contact(&mut state, RENDERED_AT + MIN_DWELL_MS, &relay));
    assert_eq!(relay.call_count(), 1);
}

#[test]
fn three_urls_are_absorbed() {
    let relay = RecordingRelay::default();
    let mut state = filled("see https://a.example https://b.example https://c.example");

    let status = block_on(submit_contact(&mut state, LATER, &relay));

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(relay.call_count(), 0);
}

#[test]
fn two_full_www_links_are_forwarded() {
    let relay = RecordingRelay::default();
    let mut state = filled("See https://www.alpha.com and https://www.beta.com please");

    let status = block_on(submit_contact(&mut state, LATER, &relay));

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(relay.call_count(), 1);
}

#[test]
fn fourth_submission_never_reaches_network() {
    let relay = RecordingRelay::default();
    let mut state = ContactState::new(RENDERED_AT);

    for i in 0..5 {
        state.edit(Field::Name, "Jo".to_owned());
        state.edit(Field::Email, "jo@x.com".to_owned());
        state.edit(Field::Message, format!("Message number {i} for you"));
        let status = block_on(submit_contact(&mut state, LATER, &relay));
        assert_eq!(status, SubmitStatus::Success);
        state.reset_status();
    }

    assert_eq!(relay.call_count(), MAX_SUBMISSIONS as usize);
    assert_eq!(state.submit_count, MAX_SUBMISSIONS);
}

#[test]
fn absorbed_submissions_do_not_count_toward_ceiling() {
    let relay = RecordingRelay::default();
    let mut state = filled("buy now buy now");
    block_on(submit_contact(&mut state, LATER, &relay));
    assert_eq!(state.submit_count, 0);
}

// =============================================================
// Guard ordering
// =============================================================

#[test]
fn screen_reports_first_failing_check() {
    let mut form = ContactForm {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        message: "click here".to_owned(),
        honeypot: "x".to_owned(),
    };
    assert_eq!(screen(&form, 0.0, 0.0, 9), Err(Rejection::Honeypot));
    form.honeypot.clear();
    assert!(matches!(screen(&form, 0.0, 10.0, 9), Err(Rejection::TooFast { .. })));
    assert_eq!(screen(&form, 0.0, MIN_DWELL_MS, 9), Err(Rejection::RateLimited));
    assert!(matches!(screen(&form, 0.0, MIN_DWELL_MS, 0), Err(Rejection::Spam(_))));
}

#[test]
fn screen_checks_name_and_email_too() {
    let form = ContactForm {
        name: "VIAGRA deals".to_owned(),
        email: "jo@x.com".to_owned(),
        message: "nothing to see here".to_owned(),
        honeypot: String::new(),
    };
    assert!(matches!(screen(&form, 0.0, MIN_DWELL_MS, 0), Err(Rejection::Spam(SpamSignal::Keyword(_)))));
}

// =============================================================
// Validation gate
// =============================================================

#[test]
fn short_message_sets_inline_error_without_network() {
    let relay = RecordingRelay::default();
    let mut state = filled("123456789");

    let status = block_on(submit_contact(&mut state, LATER, &relay));

    assert_eq!(status, SubmitStatus::Idle);
    assert_eq!(state.errors.message, Some(FieldError::MessageTooShort));
    assert_eq!(relay.call_count(), 0);
    assert_eq!(state.form.message, "123456789");
}

#[test]
fn ten_char_message_is_forwarded() {
    let relay = RecordingRelay::default();
    let mut state = filled("1234567890");
    let status = block_on(submit_contact(&mut state, LATER, &relay));
    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(relay.call_count(), 1);
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut state = ContactState::new(RENDERED_AT);
    assert_eq!(state.begin_submit(LATER), SubmitDecision::Invalid);
    assert!(state.errors.name.is_some());
    state.edit(Field::Name, "Jo".to_owned());
    assert!(state.errors.name.is_none());
    assert!(state.errors.email.is_some());
}

// =============================================================
// State machine
// =============================================================

#[test]
fn forward_moves_to_sending_and_blocks_second_submit() {
    let mut state = legit();
    let decision = state.begin_submit(LATER);
    assert!(matches!(decision, SubmitDecision::Forward(_)));
    assert_eq!(state.status, SubmitStatus::Sending);
    assert_eq!(state.begin_submit(LATER), SubmitDecision::Busy);
    assert_eq!(state.submit_count, 1);
}

#[test]
fn forwarded_payload_is_trimmed_and_tagged() {
    let mut state = ContactState::new(RENDERED_AT);
    state.edit(Field::Name, "  Jo ".to_owned());
    state.edit(Field::Email, "jo@x.com".to_owned());
    state.edit(Field::Message, " Hello there, friend \n".to_owned());
    let SubmitDecision::Forward(payload) = state.begin_submit(LATER) else {
        panic!("expected forward");
    };
    assert_eq!(payload.name, "Jo");
    assert_eq!(payload.message, "Hello there, friend");
    assert_eq!(payload.subject, "Portfolio contact from Jo");
    assert_eq!(payload.template, "table");
}

#[test]
fn relay_success_clears_form() {
    let relay = RecordingRelay::default();
    let mut state = legit();
    let status = block_on(submit_contact(&mut state, LATER, &relay));
    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(relay.calls.borrow()[0].email, "jo@x.com");
}

#[test]
fn relay_failure_shows_error_and_keeps_form() {
    let relay = RecordingRelay::failing(500);
    let mut state = legit();
    let status = block_on(submit_contact(&mut state, LATER, &relay));
    assert_eq!(status, SubmitStatus::Error);
    assert_eq!(state.form.name, "Jo");
    assert_eq!(relay.call_count(), 1);
}

#[test]
fn terminal_states_reset_to_idle() {
    let mut state = legit();
    state.status = SubmitStatus::Error;
    state.reset_status();
    assert_eq!(state.status, SubmitStatus::Idle);
    state.status = SubmitStatus::Success;
    state.reset_status();
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn reset_does_not_interrupt_sending() {
    let mut state = legit();
    let _ = state.begin_submit(LATER);
    state.reset_status();
    assert_eq!(state.status, SubmitStatus::Sending);
}

#[test]
fn finish_outside_sending_is_ignored() {
    let mut state = legit();
    state.finish_submit(&Ok(()));
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.form.name, "Jo");
}

#[test]
fn reset_delays_cover_terminal_states_only() {
    assert_eq!(SubmitStatus::Success.reset_delay_ms(), Some(SUCCESS_RESET_MS));
    assert_eq!(SubmitStatus::Error.reset_delay_ms(), Some(ERROR_RESET_MS));
    assert_eq!(SubmitStatus::Idle.reset_delay_ms(), None);
    assert_eq!(SubmitStatus::Sending.reset_delay_ms(), None);
}

#[test]
fn admin_error_dismiss_delay_outlasts_error_reset() {
    assert_eq!(ADMIN_ERROR_DISMISS_MS, 4000);
    assert!(ADMIN_ERROR_DISMISS_MS > ERROR_RESET_MS);
}
