//! `reqwest` client for the credential validator.

#[cfg(test)]
#[path = "api_test.rs"]
pub(crate) mod api_test;

use reqwest::Url;
use session::{Credential, LOGIN_PATH, LoginError};

use crate::CliError;

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = Url::parse(base_url).map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        Ok(Self { http: reqwest::Client::new(), base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Exchange `credential` for a bearer token via `POST /login`.
    ///
    /// # Errors
    ///
    /// See [`session::interpret_login_response`]; transport failures map to
    /// [`LoginError::Network`].
    pub async fn login(&self, credential: &Credential) -> Result<String, LoginError> {
        let resp = self
            .http
            .post(self.endpoint(LOGIN_PATH))
            .json(credential)
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| LoginError::Network(e.to_string()))?;
        session::interpret_login_response(status, &body)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Http`] on transport failure or a non-2xx status.
    pub async fn ping(&self) -> Result<(), CliError> {
        self.http
            .get(self.endpoint("/healthz"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
