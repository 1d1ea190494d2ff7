use axum_extra::extract::cookie::CookieJar;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::Session},
    service::auth::cookie::tokens_from_cookies,
};

/// Retrieves the session belonging to the request's token cookies.
///
/// # Returns
/// - `Ok(Session)`: The provider accepted the cookie access token
/// - `Err(Error::AuthError(AuthError::SessionMissing))`: No token cookies, or the provider
///   rejected them
/// - `Err(Error)`: The provider could not be reached or answered with a server error
pub async fn require_session(state: &AppState, jar: &CookieJar) -> Result<Session, Error> {
    let Some(tokens) = tokens_from_cookies(jar) else {
        return Err(AuthError::SessionMissing.into());
    };

    state
        .auth
        .server_client()?
        .get_session(Some(&tokens))
        .await?
        .ok_or_else(|| AuthError::SessionMissing.into())
}
