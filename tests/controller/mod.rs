//! Tests for HTTP controller endpoints.
//!
//! Requests go through the full server router, session layer and route guard, with the auth
//! provider and phone provider mocked by mockito.

mod auth;

use axum::http::StatusCode;
use tower::ServiceExt;
use whatsapp_admin::server::service::auth::cookie::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use whatsapp_admin_test_utils::prelude::*;

use crate::util::{test_utils::*, TestContextExt};

/// Cookies of a signed in browser
fn signed_in_cookies() -> [(&'static str, &'static str); 2] {
    [
        (ACCESS_TOKEN_COOKIE, TEST_ACCESS_TOKEN),
        (REFRESH_TOKEN_COOKIE, TEST_REFRESH_TOKEN),
    ]
}
