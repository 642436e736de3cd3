//! HTTP client for the credential validator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since logging in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned unchanged as [`LoginError`]; turning them into text
//! is the login form's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{Credential, LoginError};

/// Origin of the validator. Empty means same origin as the page.
const API_BASE: &str = match option_env!("TOKENPASS_API_BASE") {
    Some(base) => base,
    None => "",
};

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), session::LOGIN_PATH)
}

/// Exchange `credential` for a bearer token via `POST /login`.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for non-2xx responses,
/// [`LoginError::Network`] if the request could not be made, and
/// [`LoginError::Decode`] for an unreadable success body.
pub async fn login(credential: &Credential) -> Result<String, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(API_BASE))
            .json(credential)
            .map_err(|e| LoginError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| LoginError::Network(e.to_string()))?;
        session::interpret_login_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, API_BASE);
        Err(LoginError::Network("not available on server".to_owned()))
    }
}
