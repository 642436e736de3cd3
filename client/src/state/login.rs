//! Login form submit lifecycle.
//!
//! DESIGN
//! ======
//! Submissions are not locked: the user may submit again while a request is
//! in flight. Each submit gets a [`RequestTicket`] from a sequence counter and
//! only the latest ticket may resolve the form, so an older response that
//! arrives late is dropped instead of overwriting newer state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::{RwSignal, Update};
use session::{Credential, LoginError};

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Identifies one submit; compare against [`LoginFlow`]'s latest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    phase: LoginPhase,
    latest: u64,
}

impl LoginFlow {
    /// Start a new attempt: clears any prior error.
    pub fn submit(&mut self) -> RequestTicket {
        self.latest += 1;
        self.phase = LoginPhase::Submitting;
        RequestTicket(self.latest)
    }

    /// Apply the response for `ticket`.
    ///
    /// Returns the issued token when `ticket` is current and the login
    /// succeeded. Stale tickets change nothing.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<String, LoginError>) -> Option<String> {
        if ticket.0 != self.latest {
            return None;
        }
        match result {
            Ok(token) => {
                self.phase = LoginPhase::Idle;
                Some(token)
            }
            Err(err) => {
                self.phase = LoginPhase::Failed(err.user_message());
                None
            }
        }
    }

    /// Fail without a request (validation, or the session refused the token).
    /// Supersedes anything still in flight.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.latest += 1;
        self.phase = LoginPhase::Failed(message.into());
    }

    #[must_use]
    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}

/// Hand the response for `ticket` to `flow` and return the token to log in
/// with.
///
/// Once the page is left `flow` is disposed and nothing can supersede the
/// request, so a successful response still yields its token.
pub fn settle(flow: RwSignal<LoginFlow>, ticket: RequestTicket, result: Result<String, LoginError>) -> Option<String> {
    match flow.try_update(|f| f.resolve(ticket, result.clone())) {
        Some(token) => token,
        None => result.ok(),
    }
}

/// Both fields must be non-empty; the text is sent exactly as typed.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS_MESSAGE`] if either field is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credential, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credential::new(username, password))
}
