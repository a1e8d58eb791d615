//! HTTP transport for the point-of-sale API.

use std::sync::{Arc, RwLock};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

/// JSON client for the point-of-sale API.
///
/// Attaches the configured bearer token to every request. The token lives
/// behind a shared lock so a login performed on one clone is visible to all
/// others.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
            http: Client::new(),
        }
    }

    /// Replace the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        *guard = token;
    }

    /// Whether a bearer token is currently set.
    #[must_use]
    pub fn has_token(&self) -> bool {
        let guard = match self.token.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        guard.is_some()
    }

    /// Build a request for `path`, with the bearer token attached when set.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);

        let guard = match self.token.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match guard.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Parse a JSON body out of a successful response.
///
/// # Errors
///
/// Returns an error on HTTP failure, a non-2xx status, or a body that does
/// not match `T`.
pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = expect_status(response).await?;

    Ok(response.json().await?)
}

/// Check a response for a 2xx status, discarding the body.
///
/// # Errors
///
/// Returns an error on HTTP failure or a non-2xx status.
pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    _ = expect_status(response).await?;

    Ok(())
}

async fn expect_status(response: Response) -> Result<Response, ApiError> {
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        return Err(ApiError::UnexpectedResponse(format!(
            "request failed with status {status}: {text}"
        )));
    }

    Ok(response)
}

/// Errors that can occur when communicating with the point-of-sale API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx response or an unexpected body.
    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(String),
}
