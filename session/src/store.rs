//! Token session state.
//!
//! DESIGN
//! ======
//! `SessionStore` mutates the in-memory token and its durable mirror, and
//! nothing else. Mutators return a [`SessionChange`] so the caller decides
//! where to navigate; the store never touches routing.
//!
//! Writes are storage-first: if the backend fails, the in-memory token is left
//! as it was so memory and storage never disagree after a reload.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::storage::{StorageError, TokenStorage};
use crate::{LOGIN_ROUTE, PROFILE_ROUTE};

/// Outcome of a session mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    LoggedIn,
    LoggedOut,
}

impl SessionChange {
    /// Client route to show after this change.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::LoggedIn => PROFILE_ROUTE,
            Self::LoggedOut => LOGIN_ROUTE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("refusing to store an empty token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Current token plus the backend it is mirrored to.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// An unauthenticated store that has not read `storage` yet.
    pub fn new(storage: S) -> Self {
        Self { storage, token: None }
    }

    /// Build a store whose initial token is whatever `storage` holds.
    ///
    /// An unreadable backend or an empty persisted value both start the
    /// session unauthenticated.
    pub fn restore(storage: S) -> Self {
        let token = storage.load().ok().flatten().filter(|t| !t.is_empty());
        Self { storage, token }
    }

    /// Persist `token` and make it the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for an empty token, or
    /// [`SessionError::Storage`] if the backend write fails. Neither changes
    /// the current session.
    pub fn login(&mut self, token: impl Into<String>) -> Result<SessionChange, SessionError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.storage.save(&token)?;
        self.token = Some(token);
        Ok(SessionChange::LoggedIn)
    }

    /// Remove the persisted token and end the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backend cannot be cleared; the
    /// session stays authenticated in that case.
    pub fn logout(&mut self) -> Result<SessionChange, SessionError> {
        self.storage.clear()?;
        self.token = None;
        Ok(SessionChange::LoggedOut)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
