//! Auth provider HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::fixtures::auth::{
    data::{session_json, user_json},
    AuthFixtures, AUTH_API_PATH,
};

impl<'a> AuthFixtures<'a> {
    /// Create a `GET /auth/v1/user` endpoint accepting `access_token`.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token the request must carry
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_user_endpoint(&mut self, access_token: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", format!("{}/user", AUTH_API_PATH).as_str())
            .match_header("authorization", format!("Bearer {}", access_token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(user_json().to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /auth/v1/user` endpoint rejecting `access_token` as expired.
    pub fn create_rejected_user_endpoint(
        &mut self,
        access_token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("{}/user", AUTH_API_PATH).as_str())
            .match_header("authorization", format!("Bearer {}", access_token).as_str())
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                json!({ "code": 401, "msg": "invalid JWT: token is expired" }).to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /auth/v1/token?grant_type=...` endpoint returning a session.
    ///
    /// # Arguments
    /// - `grant_type` - `pkce` or `refresh_token`
    /// - `access_token` - Access token of the returned session
    /// - `refresh_token` - Refresh token of the returned session
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_token_endpoint(
        &mut self,
        grant_type: &str,
        access_token: &str,
        refresh_token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", format!("{}/token", AUTH_API_PATH).as_str())
            .match_query(Matcher::UrlEncoded(
                "grant_type".to_string(),
                grant_type.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(session_json(access_token, refresh_token).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /auth/v1/token?grant_type=...` endpoint rejecting the grant.
    pub fn create_rejected_token_endpoint(
        &mut self,
        grant_type: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", format!("{}/token", AUTH_API_PATH).as_str())
            .match_query(Matcher::UrlEncoded(
                "grant_type".to_string(),
                grant_type.to_string(),
            ))
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "error": "invalid_grant",
                    "error_description": "Invalid or expired grant"
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /auth/v1/logout` endpoint answering with `status`.
    pub fn create_logout_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", format!("{}/logout", AUTH_API_PATH).as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
