//! Application configuration loaded from the environment.

use url::Url;

use crate::server::error::config::ConfigError;

/// Default base URL of the virtual phone number provider
pub const DEFAULT_SALVY_API_URL: &str = "https://api.salvy.com.br";

/// Server configuration read once at startup.
///
/// Optional secrets are only validated when the feature that needs them is used:
/// impersonation requires `SUPABASE_JWT_SECRET` and phone purchases require `SALVY_TOKEN`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the auth provider project
    pub supabase_url: String,
    /// Anonymous (public) API key of the provider project
    pub supabase_anon_key: String,
    /// Service role key, falls back to the anonymous key when unset
    pub supabase_service_key: Option<String>,
    /// Secret used to sign impersonation JWTs
    pub supabase_jwt_secret: Option<String>,
    /// Bearer token for the virtual phone number provider
    pub salvy_token: Option<String>,
    /// Base URL of the virtual phone number provider
    pub salvy_api_url: String,
}

impl Config {
    /// Reads and validates all configuration variables.
    ///
    /// # Returns
    /// - `Ok(Config)`: All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)`: A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)`: A URL variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = required_var("SUPABASE_URL")?;
        validate_url("SUPABASE_URL", &supabase_url)?;

        let salvy_api_url =
            optional_var("SALVY_API_URL").unwrap_or_else(|| DEFAULT_SALVY_API_URL.to_string());
        validate_url("SALVY_API_URL", &salvy_api_url)?;

        Ok(Self {
            supabase_url,
            supabase_anon_key: required_var("SUPABASE_ANON_KEY")?,
            supabase_service_key: optional_var("SUPABASE_SERVICE_KEY"),
            supabase_jwt_secret: optional_var("SUPABASE_JWT_SECRET"),
            salvy_token: optional_var("SALVY_TOKEN"),
            salvy_api_url,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: e.to_string(),
        })
}
