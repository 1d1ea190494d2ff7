//! Test context returned by `TestBuilder`.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment with a mock server standing in for both the auth provider and the phone
/// provider.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_user_endpoint(TEST_ACCESS_TOKEN, 1)
///     .build()
///     .await?;
///
/// let config = test_config(&test.url());
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server for provider endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, used as provider project URL and phone provider URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
