//! Placeholder credentials and identities used across tests.
//!
//! None of these are real credentials.

/// Anonymous API key of the mock provider project
pub static TEST_ANON_KEY: &str = "test-anon-key";

/// Service role key of the mock provider project
pub static TEST_SERVICE_KEY: &str = "test-service-key";

/// Secret for signing impersonation tokens, long enough for HS256
pub static TEST_JWT_SECRET: &str = "test-jwt-secret-with-at-least-32-characters";

/// Bearer token for the mock phone provider
pub static TEST_SALVY_TOKEN: &str = "test-salvy-token";

pub static TEST_ACCESS_TOKEN: &str = "test-access-token";
pub static TEST_REFRESH_TOKEN: &str = "test-refresh-token";

/// Authorization code the mock provider hands to the login callback
pub static TEST_AUTH_CODE: &str = "test-auth-code";

pub static TEST_USER_ID: &str = "8d0fd2b3-9ca7-4d9e-a95f-9e13dded2e4a";
pub static TEST_USER_EMAIL: &str = "ada@example.com";
pub static TEST_USER_FULL_NAME: &str = "Ada Lovelace";

/// Host the app is served from in request tests
pub static TEST_HOST: &str = "admin.example.com";
