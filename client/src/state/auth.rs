//! Reactive session handle for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` wraps a [`SessionStore`] over `localStorage` in signals. It is
//! created once in `App` and passed to the pages and guard as a prop; nothing
//! looks it up from ambient context.
//!
//! The handle starts `pending` and empty. `restore` (run from an effect, so
//! browser-only and post-hydration) loads the persisted token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{GuardDecision, SessionChange, SessionError, SessionStore, StorageError, guard};

use crate::util::token_storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthSession {
    store: RwSignal<SessionStore<BrowserStorage>>,
    pending: RwSignal<bool>,
}

impl AuthSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(BrowserStorage)),
            pending: RwSignal::new(true),
        }
    }

    /// Replace the in-memory session with whatever `localStorage` holds.
    pub fn restore(self) {
        self.store.set(SessionStore::restore(BrowserStorage));
        self.pending.set(false);
    }

    /// Current token, tracked reactively.
    pub fn token(self) -> Option<String> {
        self.store.with(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated(self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn is_pending(self) -> bool {
        self.pending.get()
    }

    /// What a token-gated route should render right now.
    pub fn decision(self) -> GuardDecision {
        let pending = self.pending.get();
        self.store.with(|s| guard(pending, s.token()))
    }

    /// Store `token` as the active session.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the underlying store.
    pub fn login(self, token: String) -> Result<SessionChange, SessionError> {
        self.pending.set(false);
        self.store
            .try_update(|s| s.login(token))
            .unwrap_or_else(|| Err(disposed()))
    }

    /// End the active session.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the underlying store.
    pub fn logout(self) -> Result<SessionChange, SessionError> {
        self.store
            .try_update(SessionStore::logout)
            .unwrap_or_else(|| Err(disposed()))
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

fn disposed() -> SessionError {
    SessionError::Storage(StorageError::Unavailable("session handle disposed".to_owned()))
}
