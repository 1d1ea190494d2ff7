use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;

use crate::server::{
    controller::util::redirect::found,
    error::Error,
    model::app::AppState,
    service::auth::{cookie::tokens_from_cookies, redirect::login_location},
};

/// Path prefixes that require a signed-in session
pub const PROTECTED_ROUTES: [&str; 2] = ["/dashboard", "/clients"];

pub fn is_protected_route(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|route| path.starts_with(route))
}

/// Redirects anonymous requests for protected routes to the login page.
///
/// Unprotected requests pass through without their cookies being read. For protected ones the
/// cookie tokens are checked with the provider; without a session the response is a `302` to
/// `/login` carrying the original path and query as return URL.
pub async fn route_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let path = request.uri().path().to_string();

    if !is_protected_route(&path) {
        return Ok(next.run(request).await);
    }

    let jar = CookieJar::from_headers(request.headers());
    let tokens = tokens_from_cookies(&jar);

    let session = match tokens {
        Some(tokens) => state.auth.server_client()?.get_session(Some(&tokens)).await?,
        None => None,
    };

    if session.is_none() {
        tracing::debug!(path = %path, "No session for protected route, redirecting to login");

        return Ok(found(&login_location(&path, request.uri().query())));
    }

    Ok(next.run(request).await)
}
