//! Provider session, user, and auth state change types.
//!
//! These mirror the JSON shapes returned by the provider's auth API. Unknown fields are
//! ignored so provider additions don't break deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Display metadata the OAuth provider attaches to a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A provider user identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// An authenticated session: token pair plus user identity.
///
/// Created on sign-in, replaced on token refresh and dropped on sign-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires, when the provider reported it
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: User,
}

impl Session {
    /// Builds a session from a cookie token pair and a user fetched with its access token.
    pub fn from_tokens(tokens: TokenPair, user: User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: None,
            user,
        }
    }

    /// The access/refresh pair of this session.
    pub fn tokens(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Access and refresh token as carried by the session cookies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Kind of session change reported by an auth client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl fmt::Display for AuthChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        };

        f.write_str(name)
    }
}

/// A session change notification delivered to subscribers.
#[derive(Clone, Debug)]
pub struct AuthEvent {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: user.user_metadata.full_name.clone(),
            name: user.user_metadata.name.clone(),
            avatar_url: user.user_metadata.avatar_url.clone(),
        }
    }
}
