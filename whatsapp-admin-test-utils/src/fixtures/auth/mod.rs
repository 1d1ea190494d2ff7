pub mod data;
pub mod mockito;

use crate::TestContext;

/// Path of the auth API on the mock server
pub const AUTH_API_PATH: &str = "/auth/v1";

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}
