//! `localStorage` token backend.
//!
//! Stores the raw token under `authToken`. Requires a browser environment;
//! SSR and native test builds see an always-empty store whose writes succeed,
//! which keeps server rendering deterministic.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use session::{StorageError, TokenStorage};
#[cfg(feature = "hydrate")]
use session::TOKEN_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("window.localStorage".to_owned()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(TOKEN_KEY, token).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(TOKEN_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
