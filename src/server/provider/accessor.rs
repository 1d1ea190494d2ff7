use std::sync::OnceLock;

use serde_json::Map;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    provider::{
        client::{AuthClient, ClientOptions},
        jwt::create_jwt,
        transport::Transport,
    },
};

/// Constructs auth clients bound to the configured provider project.
///
/// The browser-context client is built on first use and shared afterwards. Server-context
/// clients are built fresh for every call so no session outlives the request that created it.
pub struct AuthClientAccessor {
    url: String,
    anon_key: String,
    service_key: Option<String>,
    jwt_secret: Option<String>,
    browser: OnceLock<AuthClient>,
}

impl AuthClientAccessor {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
            service_key: config.supabase_service_key.clone(),
            jwt_secret: config.supabase_jwt_secret.clone(),
            browser: OnceLock::new(),
        }
    }

    /// Returns the shared browser-context client.
    ///
    /// The first call decides the API key: `override_token` when given, else the anonymous
    /// key. Later calls return the same client and ignore their argument.
    pub fn client(&self, override_token: Option<&str>) -> Result<AuthClient, Error> {
        if let Some(client) = self.browser.get() {
            return Ok(client.clone());
        }

        let api_key = override_token.unwrap_or(&self.anon_key);
        let client = AuthClient::builder(&self.url, api_key)
            .options(ClientOptions::browser())
            .build()?;

        // A concurrent first call may have won the race, its client is the one kept
        Ok(self.browser.get_or_init(|| client).clone())
    }

    /// Builds a non-persisting client for handling one server request.
    pub fn server_client(&self) -> Result<AuthClient, Error> {
        AuthClient::builder(&self.url, &self.anon_key)
            .options(ClientOptions::server())
            .transport(Transport::no_store()?)
            .build()
    }

    /// Builds a server client authenticating with the service role key.
    ///
    /// Falls back to the anonymous key when no service key is configured.
    pub fn service_client(&self) -> Result<AuthClient, Error> {
        AuthClient::builder(&self.url, self.service_key())
            .options(ClientOptions::server())
            .transport(Transport::no_store()?)
            .build()
    }

    /// Builds a service client acting as `user_id` through a signed impersonation token.
    ///
    /// # Returns
    /// - `Ok(AuthClient)`: Client sending the impersonation token as bearer
    /// - `Err(Error::ConfigError(ConfigError::MissingEnvVar))`: `SUPABASE_JWT_SECRET` is not set
    /// - `Err(Error::JwtError)`: Token could not be signed
    pub fn impersonate(&self, user_id: &str) -> Result<AuthClient, Error> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SUPABASE_JWT_SECRET".to_string()))?;

        let token = create_jwt(secret, user_id, Map::new())?;

        AuthClient::builder(&self.url, self.service_key())
            .options(ClientOptions::server())
            .transport(Transport::no_store()?)
            .bearer(token)
            .build()
    }

    fn service_key(&self) -> &str {
        self.service_key.as_deref().unwrap_or(&self.anon_key)
    }
}
