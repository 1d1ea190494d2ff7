//! Client for the provider's auth API.
//!
//! The client speaks the GoTrue REST API mounted under `{project_url}/auth/v1`. Sign-in uses
//! the OAuth authorization code flow with PKCE: [`AuthClient::sign_in_with_oauth`] builds the
//! authorize URL and returns the verifier, and [`AuthClient::exchange_code_for_session`] trades
//! the code returned to the callback for a session.
//!
//! Every session change is broadcast to subscribers obtained from
//! [`AuthClient::on_auth_state_change`]. Dropping the subscription unsubscribes.

use std::sync::Arc;

use dioxus_logger::tracing;
use oauth2::PkceCodeChallenge;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use tokio::sync::{
    broadcast::{
        self,
        error::{RecvError, TryRecvError},
    },
    RwLock,
};
use url::Url;

use crate::server::{
    error::{provider::ProviderError, Error},
    model::auth::{AuthChangeEvent, AuthEvent, Session, TokenPair, User},
    provider::transport::Transport,
};

/// Path of the auth API relative to the project URL
pub const AUTH_API_PATH: &str = "/auth/v1";

/// PKCE challenge method name expected by the provider
pub const PKCE_CHALLENGE_METHOD: &str = "s256";

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// OAuth identity providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Provider name as used in the authorize URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

/// Authorize URL for an OAuth login and the PKCE verifier needed to complete it.
#[derive(Debug)]
pub struct OAuthLogin {
    pub url: String,
    pub pkce_verifier: String,
}

/// Session handling behaviour of a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Keep the last session in the client and return it from `get_session`
    pub persist_session: bool,
    /// Refresh the session when the provider rejects the access token
    pub auto_refresh_token: bool,
}

impl ClientOptions {
    /// Options of the long-lived browser-context client.
    pub fn browser() -> Self {
        Self {
            persist_session: true,
            auto_refresh_token: false,
        }
    }

    /// Options of per-request server clients, which never hold on to a session.
    pub fn server() -> Self {
        Self {
            persist_session: false,
            auto_refresh_token: false,
        }
    }
}

/// Builder for [`AuthClient`].
pub struct AuthClientBuilder {
    url: String,
    api_key: String,
    bearer: Option<String>,
    options: ClientOptions,
    transport: Option<Transport>,
}

impl AuthClientBuilder {
    /// Sets the session handling options, browser options by default.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the network transport, a plain [`Transport`] by default.
    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sends `token` as the bearer instead of the API key when no user access token applies.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(AuthClient)`: Client ready for use
    /// - `Err(Error::UrlError)`: The project URL could not be parsed
    /// - `Err(Error::HttpError)`: The default transport could not be built
    pub fn build(self) -> Result<AuthClient, Error> {
        let url = Url::parse(&self.url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Transport::new()?,
        };
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(AuthClient {
            inner: Arc::new(AuthClientInner {
                base_url: url.as_str().trim_end_matches('/').to_string(),
                api_key: self.api_key,
                bearer: self.bearer,
                options: self.options,
                transport,
                session: RwLock::new(None),
                events,
            }),
        })
    }
}

/// Client bound to one provider project and API key.
///
/// Cloning is cheap and clones share the stored session and the event channel.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    base_url: String,
    api_key: String,
    bearer: Option<String>,
    options: ClientOptions,
    transport: Transport,
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

/// Subscription to session change events of one client.
///
/// Events emitted after the subscription was created are queued until read. Dropping the
/// subscription unsubscribes.
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthEvent>,
}

impl AuthSubscription {
    /// Returns the next queued event without waiting.
    pub fn try_next(&mut self) -> Option<AuthEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Auth state subscriber lagged, oldest events dropped");
                }
                Err(_) => return None,
            }
        }
    }

    /// Waits for the next event, `None` once the client is gone.
    pub async fn next(&mut self) -> Option<AuthEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Auth state subscriber lagged, oldest events dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[derive(Serialize)]
struct PkceGrant<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

#[derive(Serialize)]
struct RefreshTokenGrant<'a> {
    refresh_token: &'a str,
}

impl AuthClient {
    /// Starts building a client for the project at `url` authenticating with `api_key`.
    pub fn builder(url: &str, api_key: &str) -> AuthClientBuilder {
        AuthClientBuilder {
            url: url.to_string(),
            api_key: api_key.to_string(),
            bearer: None,
            options: ClientOptions::browser(),
            transport: None,
        }
    }

    pub fn options(&self) -> ClientOptions {
        self.inner.options
    }

    pub fn api_key(&self) -> &str {
        &self.inner.api_key
    }

    /// Subscribes to session change events.
    pub fn on_auth_state_change(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.inner.events.subscribe(),
        }
    }

    /// Builds the provider authorize URL for an OAuth login.
    ///
    /// No request is made. The returned verifier must be kept until the provider redirects
    /// back to `redirect_to` with an authorization code.
    pub fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> Result<OAuthLogin, Error> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let url = Url::parse_with_params(
            &self.endpoint("/authorize"),
            &[
                ("provider", provider.as_str()),
                ("redirect_to", redirect_to),
                ("code_challenge", pkce_challenge.as_str()),
                ("code_challenge_method", PKCE_CHALLENGE_METHOD),
            ],
        )?;

        Ok(OAuthLogin {
            url: url.to_string(),
            pkce_verifier: pkce_verifier.secret().to_string(),
        })
    }

    /// Exchanges an authorization code for a session and emits `SIGNED_IN`.
    ///
    /// # Returns
    /// - `Ok(Session)`: Code accepted
    /// - `Err(Error::ProviderError(ProviderError::Rejected))`: Code invalid, expired or already used
    /// - `Err(Error)`: Request or response decoding failed
    pub async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> Result<Session, Error> {
        let response = self
            .request(Method::POST, "/token?grant_type=pkce", None)
            .json(&PkceGrant {
                auth_code,
                code_verifier,
            })
            .send()
            .await?;
        let session: Session = error_for_status(response).await?.json().await?;

        self.store_session(&session).await;
        self.emit(AuthChangeEvent::SignedIn, Some(session.clone()));

        Ok(session)
    }

    /// Returns the current session.
    ///
    /// A persisting client returns its stored session first. Otherwise the cookie token pair is
    /// checked against the provider: an accepted access token yields a session, a rejected one
    /// yields `None` unless `auto_refresh_token` is enabled and the refresh succeeds.
    pub async fn get_session(&self, tokens: Option<&TokenPair>) -> Result<Option<Session>, Error> {
        if self.inner.options.persist_session {
            if let Some(session) = self.inner.session.read().await.clone() {
                return Ok(Some(session));
            }
        }

        let Some(tokens) = tokens else {
            return Ok(None);
        };

        match self.get_user(&tokens.access_token).await {
            Ok(user) => Ok(Some(Session::from_tokens(tokens.clone(), user))),
            Err(Error::ProviderError(ProviderError::Rejected { status, .. })) => {
                tracing::debug!(status, "Auth provider rejected access token");

                if !self.inner.options.auto_refresh_token {
                    return Ok(None);
                }

                match self.refresh_session(&tokens.refresh_token).await {
                    Ok(session) => Ok(Some(session)),
                    Err(Error::ProviderError(ProviderError::Rejected { .. })) => Ok(None),
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches the user the access token belongs to.
    pub async fn get_user(&self, access_token: &str) -> Result<User, Error> {
        let response = self
            .request(Method::GET, "/user", Some(access_token))
            .send()
            .await?;

        Ok(error_for_status(response).await?.json().await?)
    }

    /// Trades a refresh token for a new session and emits `TOKEN_REFRESHED`.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, Error> {
        let response = self
            .request(Method::POST, "/token?grant_type=refresh_token", None)
            .json(&RefreshTokenGrant { refresh_token })
            .send()
            .await?;
        let session: Session = error_for_status(response).await?.json().await?;

        self.store_session(&session).await;
        self.emit(AuthChangeEvent::TokenRefreshed, Some(session.clone()));

        Ok(session)
    }

    /// Revokes the session at the provider, forgets the stored session and emits `SIGNED_OUT`.
    ///
    /// Uses `access_token` or, when absent, the stored session's token. Without either only
    /// the local state is cleared. A token the provider no longer knows counts as signed out.
    pub async fn sign_out(&self, access_token: Option<&str>) -> Result<(), Error> {
        let access_token = match access_token {
            Some(token) => Some(token.to_string()),
            None => self
                .inner
                .session
                .read()
                .await
                .as_ref()
                .map(|session| session.access_token.clone()),
        };

        if let Some(token) = access_token {
            let response = self
                .request(Method::POST, "/logout", Some(&token))
                .send()
                .await?;

            match error_for_status(response).await {
                Ok(_) | Err(Error::ProviderError(ProviderError::Rejected { .. })) => (),
                Err(err) => return Err(err),
            }
        }

        *self.inner.session.write().await = None;
        self.emit(AuthChangeEvent::SignedOut, None);

        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.inner.base_url, AUTH_API_PATH, path)
    }

    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token
            .or(self.inner.bearer.as_deref())
            .unwrap_or(&self.inner.api_key);

        self.inner
            .transport
            .request(method, &self.endpoint(path))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(bearer)
    }

    async fn store_session(&self, session: &Session) {
        if self.inner.options.persist_session {
            *self.inner.session.write().await = Some(session.clone());
        }
    }

    fn emit(&self, event: AuthChangeEvent, session: Option<Session>) {
        tracing::debug!(event = %event, "Auth state changed");

        // No subscribers is not an error
        let _ = self.inner.events.send(AuthEvent { event, session });
    }
}

async fn error_for_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ProviderError::from_status(status.as_u16(), body).into())
}
