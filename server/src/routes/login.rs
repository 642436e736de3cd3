//! `POST /login`: the credential validator endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use session::{Credential, ErrorResponse, INVALID_CREDENTIALS_MESSAGE, TokenResponse};

use crate::state::AppState;

/// Compare the submitted pair against the stored record.
///
/// Success is `200 {token}`; any mismatch is `401 {message}`. Failure is only
/// ever signalled through the status code. A body that is not a JSON object
/// carries no credentials, so it is rejected the same way.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credential>, JsonRejection>,
) -> Response {
    let credential = match payload {
        Ok(Json(credential)) => credential,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "login body unreadable");
            return unauthorized();
        }
    };
    match state.verifier.verify(&credential) {
        Some(token) => {
            tracing::info!(username = %credential.username, "login accepted");
            (StatusCode::OK, Json(TokenResponse { token })).into_response()
        }
        None => {
            tracing::warn!(username = %credential.username, "login rejected");
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    let body = ErrorResponse { message: INVALID_CREDENTIALS_MESSAGE.to_owned() };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
