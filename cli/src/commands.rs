//! Command implementations over a [`SessionStore`].
//!
//! Each command returns the text to print. Commands take the store by
//! reference so tests can drive them with in-memory storage.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use session::{Credential, GuardDecision, SessionStore, TokenStorage, guard};

use crate::CliError;
use crate::api::AuthClient;

pub const PROFILE_TEXT: &str = "User Profile\nWelcome to your profile!";

/// Log in and show the profile view.
///
/// # Errors
///
/// Returns [`CliError::Login`] if the validator refuses or is unreachable and
/// [`CliError::Session`] if the token cannot be stored.
pub async fn login<S: TokenStorage>(
    client: &AuthClient,
    store: &mut SessionStore<S>,
    credential: Credential,
) -> Result<String, CliError> {
    let token = client.login(&credential).await?;
    let change = store.login(token)?;
    tracing::info!(username = %credential.username, route = change.route(), "logged in");
    profile(store)
}

/// # Errors
///
/// Returns [`CliError::Session`] if the stored token cannot be removed.
pub fn logout<S: TokenStorage>(store: &mut SessionStore<S>) -> Result<String, CliError> {
    let change = store.logout()?;
    tracing::info!(route = change.route(), "logged out");
    Ok("Logged out.".to_owned())
}

/// Show the profile view if a token is stored.
///
/// # Errors
///
/// Returns [`CliError::NotLoggedIn`] with the login route otherwise.
pub fn profile<S: TokenStorage>(store: &SessionStore<S>) -> Result<String, CliError> {
    match guard(false, store.token()) {
        GuardDecision::Allow => Ok(PROFILE_TEXT.to_owned()),
        GuardDecision::Redirect(route) => Err(CliError::NotLoggedIn(route)),
        GuardDecision::Pending => Err(CliError::NotLoggedIn(session::LOGIN_ROUTE)),
    }
}

pub fn status<S: TokenStorage>(store: &SessionStore<S>) -> String {
    if store.is_authenticated() {
        "Logged in.".to_owned()
    } else {
        "Not logged in.".to_owned()
    }
}
