//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the credential verifier and nothing mutable.

use std::sync::Arc;

use crate::services::credentials::{CredentialVerifier, StaticUser};

/// Clone is required by Axum; the verifier is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// State backed by the single hard-coded mock user.
    #[must_use]
    pub fn mock() -> Self {
        Self::new(Arc::new(StaticUser::mock()))
    }
}
