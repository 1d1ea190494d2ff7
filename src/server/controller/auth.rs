use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{redirect::found, request_url::RequestUrl},
        error::{auth::AuthError, provider::ProviderError, Error},
        model::{app::AppState, auth::AuthChangeEvent, session::auth::SessionAuthPkce},
        page::login::render_login_page,
        provider::client::OAuthProvider,
        service::auth::{
            cookie::tokens_from_cookies,
            listener::{sign_out, AuthStateListener},
            redirect::{compute_callback_url, host_with_port, resolve_return_url, LOGIN_PATH},
        },
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginSuccessParams {
    pub code: Option<String>,
    #[serde(rename = "returnUrl")]
    pub return_url: Option<String>,
    pub error_description: Option<String>,
}

/// Login page offering sign-in with Google
///
/// Computes the provider callback URL from the request, stores a fresh PKCE verifier in the
/// session and renders the page with the provider authorize link.
///
/// # Responses
/// - 200 (OK): Server rendered login page
/// - 400 (Bad Request): Request has no Host header
/// - 500 (Internal Server Error): Session storage failed
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    RequestUrl(url): RequestUrl,
    headers: HeaderMap,
) -> Result<Html<String>, Error> {
    let callback_url = compute_callback_url(&url, &headers)?;

    let login = state
        .auth
        .client(None)?
        .sign_in_with_oauth(OAuthProvider::Google, &callback_url)?;

    SessionAuthPkce::insert(&session, &login.pkce_verifier).await?;

    Ok(Html(render_login_page(&login.url)))
}

/// Callback the provider redirects to after the user authenticated
///
/// Exchanges the authorization code for a session. The auth state listener writes the token
/// cookies on `SIGNED_IN`, after which the user is sent to the return URL.
///
/// # Responses
/// - 302 (Found): Signed in, redirect to the return URL or `/dashboard`
/// - 302 (Found): No code, no pending login or code rejected, redirect to `/login`
/// - 500 (Internal Server Error): Session storage failed
pub async fn login_success(
    State(state): State<AppState>,
    session: Session,
    RequestUrl(url): RequestUrl,
    jar: CookieJar,
    Query(params): Query<LoginSuccessParams>,
) -> Result<Response, Error> {
    let Some(code) = params.code else {
        tracing::debug!(
            error = ?params.error_description,
            "Login callback without authorization code"
        );

        return Ok(found(LOGIN_PATH));
    };

    let verifier = match SessionAuthPkce::remove(&session).await {
        Ok(verifier) => verifier,
        Err(Error::AuthError(AuthError::PkceMissingValue)) => {
            tracing::debug!("Login callback without a pending login in session");

            return Ok(found(LOGIN_PATH));
        }
        Err(err) => return Err(err),
    };

    let destination = resolve_return_url(&url, params.return_url.as_deref());
    let client = state.auth.server_client()?;

    let mut listener = AuthStateListener::subscribe(
        &client,
        &host_with_port(&url),
        jar,
        move |event, _| match event {
            AuthChangeEvent::SignedIn => Some(destination.clone()),
            AuthChangeEvent::SignedOut => Some(LOGIN_PATH.to_string()),
            AuthChangeEvent::TokenRefreshed => None,
        },
    );

    if let Err(err) = client.exchange_code_for_session(&code, &verifier).await {
        tracing::warn!("Failed to exchange authorization code: {}", err);

        return Ok(found(LOGIN_PATH));
    }

    listener.process_pending().await;
    let (jar, redirect) = listener.finish();

    Ok((jar, found(redirect.as_deref().unwrap_or(LOGIN_PATH))).into_response())
}

/// Signs the current user out
///
/// Clears the session token cookies and revokes the session at the provider. Provider
/// failures are logged, the user is signed out locally either way.
#[utoipa::path(
    post,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 302, description = "Signed out, redirect to the login page")
    ),
)]
pub async fn signout(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let client = state.auth.server_client()?;

    let (jar, _) = sign_out(&client, &host_with_port(&url), jar, LOGIN_PATH).await;

    Ok((jar, found(LOGIN_PATH)))
}

/// Returns the signed in user
///
/// Looks up the user belonging to the token cookies. An expired access token is refreshed
/// once, in which case the response carries the new token cookies.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let Some(tokens) = tokens_from_cookies(&jar) else {
        return Err(AuthError::SessionMissing.into());
    };

    let client = state.auth.server_client()?;
    let mut listener =
        AuthStateListener::subscribe(&client, &host_with_port(&url), jar, |_, _| None);

    let session = match client.get_session(Some(&tokens)).await? {
        Some(session) => Some(session),
        None => match client.refresh_session(&tokens.refresh_token).await {
            Ok(session) => Some(session),
            Err(Error::ProviderError(ProviderError::Rejected { status, .. })) => {
                tracing::debug!(status, "Auth provider rejected refresh token");

                None
            }
            Err(err) => return Err(err),
        },
    };

    listener.process_pending().await;
    let (jar, _) = listener.finish();

    match session {
        Some(session) => Ok((jar, Json(UserDto::from(&session.user)))),
        None => Err(AuthError::SessionMissing.into()),
    }
}

