//! Reactions to session changes of an auth client.
//!
//! An [`AuthStateListener`] mirrors sign-ins and token refreshes into the token cookies and
//! runs the sign-out procedure once per sign-out. Every event is forwarded to the caller's
//! callback, which may pick where the response redirects to.

use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;

use crate::server::{
    model::auth::{AuthChangeEvent, AuthEvent, Session},
    provider::client::{AuthClient, AuthSubscription},
    service::auth::cookie::{clear_cookies, set_tokens_cookies, tokens_from_cookies},
};

/// Where the sign-out procedure redirects to unless told otherwise
pub const DEFAULT_SIGN_OUT_REDIRECT: &str = "/";

/// Subscription to an auth client that keeps the response cookies in sync with its session.
///
/// The subscription ends when the listener is dropped or finished.
pub struct AuthStateListener<F> {
    client: AuthClient,
    subscription: AuthSubscription,
    host: String,
    jar: CookieJar,
    signed_out: bool,
    redirect: Option<String>,
    callback: F,
}

impl<F> AuthStateListener<F>
where
    F: FnMut(AuthChangeEvent, Option<&Session>) -> Option<String>,
{
    /// Subscribes to `client`, writing cookies for `host` into `jar`.
    pub fn subscribe(client: &AuthClient, host: &str, jar: CookieJar, callback: F) -> Self {
        Self {
            client: client.clone(),
            subscription: client.on_auth_state_change(),
            host: host.to_string(),
            jar,
            signed_out: false,
            redirect: None,
            callback,
        }
    }

    /// Handles one session change.
    ///
    /// - `SIGNED_IN`, `TOKEN_REFRESHED`: writes the session tokens and re-arms sign-out
    /// - `SIGNED_OUT`: runs the sign-out procedure unless it already ran since the last sign-in
    pub async fn handle(&mut self, event: AuthEvent) {
        match event.event {
            AuthChangeEvent::SignedOut => {
                if !self.signed_out {
                    self.signed_out = true;

                    let jar = std::mem::take(&mut self.jar);
                    let (jar, redirect) =
                        sign_out(&self.client, &self.host, jar, DEFAULT_SIGN_OUT_REDIRECT).await;

                    self.jar = jar;
                    if redirect.is_some() {
                        self.redirect = redirect;
                    }
                }
            }
            AuthChangeEvent::SignedIn | AuthChangeEvent::TokenRefreshed => {
                if let Some(session) = &event.session {
                    let jar = std::mem::take(&mut self.jar);
                    self.jar = set_tokens_cookies(
                        jar,
                        &self.host,
                        &session.access_token,
                        &session.refresh_token,
                    );
                }

                self.signed_out = false;
            }
        }

        if let Some(target) = (self.callback)(event.event, event.session.as_ref()) {
            self.redirect = Some(target);
        }
    }

    /// Handles every event the client emitted since the last call.
    pub async fn process_pending(&mut self) {
        while let Some(event) = self.subscription.try_next() {
            self.handle(event).await;
        }
    }

    /// Ends the subscription, returning the updated cookies and the last redirect target set.
    pub fn finish(self) -> (CookieJar, Option<String>) {
        (self.jar, self.redirect)
    }
}

/// Clears the token cookies and signs the session out at the provider.
///
/// Failures are logged and not returned. The redirect target is only returned when the
/// provider sign-out succeeded.
pub async fn sign_out(
    client: &AuthClient,
    host: &str,
    jar: CookieJar,
    redirect_url: &str,
) -> (CookieJar, Option<String>) {
    let access_token = tokens_from_cookies(&jar).map(|tokens| tokens.access_token);
    let jar = clear_cookies(jar, host);

    match client.sign_out(access_token.as_deref()).await {
        Ok(()) => (jar, Some(redirect_url.to_string())),
        Err(err) => {
            tracing::error!("Sign out failed: {}", err);

            (jar, None)
        }
    }
}
