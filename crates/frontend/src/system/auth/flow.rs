//! Signup, login and logout as plain async functions.
//!
//! The login page drives these against [`ApiClient`](crate::shared::api_utils::ApiClient)
//! and the browser token store; tests drive them against in-memory doubles.

use contracts::system::auth::{AuthToken, Credentials};

use super::storage::TokenStore;
use crate::shared::api_utils::RecognitionApi;
use crate::shared::error::ApiError;

/// Register a new account. Does not log in.
pub async fn signup<A>(api: &A, credentials: &Credentials) -> Result<(), ApiError>
where
    A: RecognitionApi + ?Sized,
{
    credentials.validate().map_err(ApiError::Validation)?;
    api.signup(credentials).await?;
    log::info!("account {} created", credentials.username);
    Ok(())
}

/// Exchange credentials for a token and persist it.
///
/// A 2xx answer without a token is an error and leaves the store untouched.
pub async fn login<A, S>(api: &A, store: &S, credentials: &Credentials) -> Result<AuthToken, ApiError>
where
    A: RecognitionApi + ?Sized,
    S: TokenStore + ?Sized,
{
    credentials.validate().map_err(ApiError::Validation)?;
    let token = api
        .login(credentials)
        .await?
        .into_token()
        .ok_or_else(|| {
            log::warn!("login for {} answered without a token", credentials.username);
            ApiError::MissingToken
        })?;
    store.set(&token);
    Ok(token)
}

pub fn logout<S: TokenStore + ?Sized>(store: &S) {
    store.clear();
}
