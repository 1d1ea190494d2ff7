//! PKCE verifier storage for the OAuth login flow.
//!
//! The login page generates a PKCE challenge for the provider authorize URL and stores the
//! matching verifier here. The provider callback consumes it to exchange the authorization
//! code for a session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for storing the PKCE code verifier.
pub const SESSION_AUTH_PKCE_KEY: &str = "whatsapp:auth:pkce";

/// Session wrapper for the PKCE code verifier.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthPkce(pub String);

impl SessionAuthPkce {
    /// Inserts the PKCE verifier into the session, replacing any previous one.
    ///
    /// # Arguments
    /// - `session` - User's session for storing the verifier
    /// - `verifier` - PKCE code verifier matching the challenge sent to the provider
    ///
    /// # Returns
    /// - `Ok(())` - Verifier stored
    /// - `Err(Error)` - Session storage failed
    pub async fn insert(session: &Session, verifier: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_PKCE_KEY, SessionAuthPkce(verifier.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the PKCE verifier so an authorization code is exchanged at most once.
    ///
    /// # Returns
    /// - `Ok(String)` - Verifier found and removed
    /// - `Err(Error::AuthError(AuthError::PkceMissingValue))` - No verifier in session
    /// - `Err(Error)` - Session operation failed
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthPkce>(SESSION_AUTH_PKCE_KEY).await? {
            Some(SessionAuthPkce(verifier)) => Ok(verifier),
            None => Err(AuthError::PkceMissingValue.into()),
        }
    }
}
