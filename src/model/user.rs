use serde::{Deserialize, Serialize};

/// Base URL for generated avatars when the provider has no picture for the user
pub const GENERATED_AVATAR_URL: &str = "https://ui-avatars.com/api/";

/// Fallback display name when the user has no name or email
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// The signed in user as returned by `GET /api/auth/user`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    /// Provider user ID
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserDto {
    /// Name shown in the dashboard greeting.
    ///
    /// Resolves to the full name, then the name, then the local part of the email and
    /// finally [`DEFAULT_DISPLAY_NAME`].
    pub fn display_name(&self) -> String {
        non_empty(&self.full_name)
            .or_else(|| non_empty(&self.name))
            .or_else(|| {
                non_empty(&self.email)
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
            })
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_string()
    }

    /// Avatar image URL, generating one from the user's name when the provider has none.
    pub fn avatar(&self) -> String {
        if let Some(avatar_url) = non_empty(&self.avatar_url) {
            return avatar_url.to_string();
        }

        let name = non_empty(&self.full_name)
            .or_else(|| non_empty(&self.name))
            .or_else(|| non_empty(&self.email))
            .unwrap_or(DEFAULT_DISPLAY_NAME);

        let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();

        format!("{}?name={}", GENERATED_AVATAR_URL, encoded)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
