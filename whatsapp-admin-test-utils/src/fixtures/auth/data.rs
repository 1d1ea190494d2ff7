//! Auth provider response bodies.

use serde_json::{json, Value};

use crate::constant::{TEST_USER_EMAIL, TEST_USER_FULL_NAME, TEST_USER_ID};

/// User as returned by `GET /auth/v1/user`
pub fn user_json() -> Value {
    json!({
        "id": TEST_USER_ID,
        "aud": "authenticated",
        "role": "authenticated",
        "email": TEST_USER_EMAIL,
        "app_metadata": { "provider": "google", "providers": ["google"] },
        "user_metadata": {
            "full_name": TEST_USER_FULL_NAME,
            "name": TEST_USER_FULL_NAME,
            "avatar_url": "https://lh3.googleusercontent.com/a/test-avatar"
        },
        "created_at": "2025-01-01T00:00:00Z"
    })
}

/// Session as returned by `POST /auth/v1/token`
pub fn session_json(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1767225600,
        "refresh_token": refresh_token,
        "user": user_json()
    })
}
