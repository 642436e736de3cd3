//! Login failure taxonomy and `/login` response interpretation.
//!
//! Both HTTP clients (browser `gloo-net`, CLI `reqwest`) hand the raw status
//! and body to [`interpret_login_response`] so they agree on what a response
//! means. Only the presentation layer turns a [`LoginError`] into text, via
//! [`LoginError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::{ErrorResponse, TokenResponse};

/// Shown when a failure carries no server-provided message.
pub const GENERIC_LOGIN_ERROR: &str = "An error occurred. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The validator answered with a non-2xx status.
    #[error("login rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response without a readable token.
    #[error("malformed login response: {0}")]
    Decode(String),
}

impl LoginError {
    /// `401`: the credential pair did not match.
    #[must_use]
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }

    /// Text for the login form: the server's message when it sent one,
    /// otherwise [`GENERIC_LOGIN_ERROR`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_LOGIN_ERROR.to_owned(),
        }
    }
}

/// Map a `/login` response to the issued token or a [`LoginError`].
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for non-2xx statuses (with the body's
/// `message`, if parseable) and [`LoginError::Decode`] for a 2xx body that
/// is not `{ "token": ... }`.
pub fn interpret_login_response(status: u16, body: &str) -> Result<String, LoginError> {
    if (200..300).contains(&status) {
        let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
        return Ok(parsed.token);
    }
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|err| err.message);
    Err(LoginError::Rejected { status, message })
}
