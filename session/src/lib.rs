//! Shared login wire model and token session logic.
//!
//! This crate owns the representation used by `server`, `client`, and `cli`:
//! the `/login` request/response bodies, the client route table, and the
//! storage-agnostic [`SessionStore`]. It performs no I/O of its own; callers
//! plug in a [`TokenStorage`] backend and an HTTP client.


pub mod error;
pub mod guard;
pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};

pub use error::{LoginError, interpret_login_response};
pub use guard::{GuardDecision, guard};
pub use storage::{MemoryStorage, StorageError, TokenStorage};
pub use store::{SessionChange, SessionError, SessionStore};

/// Validator endpoint path.
pub const LOGIN_PATH: &str = "/login";

/// Public client route hosting the login form.
pub const LOGIN_ROUTE: &str = "/";

/// Token-gated client route.
pub const PROFILE_ROUTE: &str = "/profile";

/// Durable storage key holding the raw token.
pub const TOKEN_KEY: &str = "authToken";

/// Message returned by the validator on a credential mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Username/password pair submitted to `POST /login`.
///
/// Missing fields deserialize as empty strings so a partial body is simply a
/// mismatch rather than a parse failure.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `200 OK` body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body of `POST /login` (`401 Unauthorized`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
