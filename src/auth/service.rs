//! Authentication calls against the point-of-sale API.

use reqwest::Method;
use tracing::info;

use crate::api::{self, ApiClient, ApiError};

use super::models::{AuthSession, Credentials};

/// Log in and store the returned bearer token on the client.
///
/// # Errors
///
/// Returns an error on HTTP failure or when the server rejects the
/// credentials.
#[tracing::instrument(
    name = "auth.login",
    skip(api, credentials),
    fields(username = %credentials.username),
    err
)]
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<AuthSession, ApiError> {
    let response = api
        .request(Method::POST, "/api/auth/login")
        .json(credentials)
        .send()
        .await?;

    let session: AuthSession = api::expect_json(response).await?;

    api.set_token(Some(session.token.clone()));

    info!("logged in");

    Ok(session)
}

/// Register a new user account.
///
/// # Errors
///
/// Returns an error on HTTP failure or when the server rejects the request.
#[tracing::instrument(
    name = "auth.register",
    skip(api, credentials),
    fields(username = %credentials.username),
    err
)]
pub async fn register(api: &ApiClient, credentials: &Credentials) -> Result<(), ApiError> {
    let response = api
        .request(Method::POST, "/api/auth/register")
        .json(credentials)
        .send()
        .await?;

    api::expect_success(response).await
}
