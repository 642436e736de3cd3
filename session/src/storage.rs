//! Durable token storage abstraction.
//!
//! A backend holds at most one raw token string under [`crate::TOKEN_KEY`].
//! The browser uses `localStorage`, the CLI a file, tests [`MemoryStorage`].

use std::sync::{Arc, Mutex};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Error returned by a [`TokenStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store does not exist in this environment.
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
    #[error("token storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Single-slot key/value storage for the session token.
pub trait TokenStorage {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same slot, which lets a test build a
/// second [`crate::SessionStore`] over the "same browser profile".
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.into()))) }
    }

    /// Current raw slot value, bypassing the trait.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut Option<String>) -> T) -> Result<T, StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("memory slot poisoned".to_owned()))?;
        Ok(f(&mut slot))
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.with_slot(|slot| slot.clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = Some(token.to_owned()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = None)
    }
}
