//! Credential verification.
//!
//! The backend knows exactly one user. Verification is a plain equality check
//! on both fields; a match yields that user's fixed bearer token.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use session::Credential;

/// Pluggable credential check used by the `/login` route.
pub trait CredentialVerifier: Send + Sync {
    /// Return the bearer token for `credential`, or `None` on mismatch.
    fn verify(&self, credential: &Credential) -> Option<String>;
}

/// A single stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticUser {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl StaticUser {
    /// The hard-coded mock account.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            username: "user".to_owned(),
            password: "password123".to_owned(),
            token: "mock-token-123456".to_owned(),
        }
    }
}

impl CredentialVerifier for StaticUser {
    fn verify(&self, credential: &Credential) -> Option<String> {
        (credential.username == self.username && credential.password == self.password).then(|| self.token.clone())
    }
}
