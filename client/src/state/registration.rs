//! Registration form + roster state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the draft inputs, the roster, the submitting flag and the two alert
//! messages. Network continuations call the `finish_*`/`apply_*` transitions;
//! nothing else mutates the roster.
//!
//! INVARIANTS
//! ==========
//! - `error` and `success` are never both set once an operation resolves.
//! - The roster is only ever replaced wholesale from a successful list call.
//! - At most one submission is in flight.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{NewUser, User};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields!";
pub const REGISTERED_MESSAGE: &str = "User registered successfully! ✅";
pub const REGISTER_FAILED_MESSAGE: &str = "Failed to register user";

/// Not-yet-submitted input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    /// Both fields present. Only emptiness is checked; email format is the
    /// server's call.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Whether a create request is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Reason a submission was refused before any request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("name and email are required")]
    MissingFields,
    #[error("a registration is already in flight")]
    InFlight,
}

/// View state for the registration page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub draft: Draft,
    pub roster: Vec<User>,
    pub phase: Phase,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl RegistrationState {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.draft.email = email;
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// On success both messages are cleared and the payload to POST is
    /// returned. A missing field replaces any confirmation with the
    /// validation message and leaves the phase untouched; a second call while submitting is refused silently.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when no request should be issued.
    pub fn begin_submit(&mut self) -> Result<NewUser, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if !self.draft.is_complete() {
            self.success = None;
            self.error = Some(MISSING_FIELDS_MESSAGE.to_owned());
            return Err(SubmitRejected::MissingFields);
        }
        self.error = None;
        self.success = None;
        self.phase = Phase::Submitting;
        Ok(NewUser { name: self.draft.name.clone(), email: self.draft.email.clone() })
    }

    /// Resolve the create request and return to `Idle`.
    ///
    /// Success clears the draft and shows the confirmation; failure keeps the
    /// draft for a retry and shows the server detail or the generic message.
    pub fn finish_submit(&mut self, outcome: &Result<(), ApiError>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(()) => {
                self.draft = Draft::default();
                self.error = None;
                self.success = Some(REGISTERED_MESSAGE.to_owned());
            }
            Err(err) => {
                log::warn!("user registration failed: {err}");
                let message = err.detail().unwrap_or(REGISTER_FAILED_MESSAGE);
                self.success = None;
                self.error = Some(message.to_owned());
            }
        }
    }

    /// Replace the roster from a list response.
    ///
    /// Failures only reach the log; the previous roster stays on screen.
    pub fn apply_roster(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => self.roster = users,
            Err(err) => log::warn!("failed to fetch users: {err}"),
        }
    }
}

/// Somewhere a [`RegistrationState`] lives while requests are in flight.
///
/// `modify` returns `None` once the state is gone (page unmounted), which
/// stops any pending continuation.
pub trait RegistrationStore {
    fn modify<R>(&self, f: impl FnOnce(&mut RegistrationState) -> R) -> Option<R>;
}

impl RegistrationStore for RwSignal<RegistrationState> {
    fn modify<R>(&self, f: impl FnOnce(&mut RegistrationState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
